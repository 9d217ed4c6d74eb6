//! HTTP/1.1 front end for the route table.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::header::{HeaderValue, ALLOW, CONTENT_TYPE};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use mediator::{RouteError, RouteTable};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use webdom::text::escape_html;

use crate::error::ServerError;

const HTML: &str = "text/html; charset=utf-8";

/// Serves every route of a [`RouteTable`] until cancelled.
pub struct Server {
    listener: TcpListener,
    routes: Arc<RouteTable>,
}

impl Server {
    /// Bind the listener. Port 0 picks a free port.
    pub async fn bind(addr: SocketAddr, routes: RouteTable) -> Result<Self, ServerError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;

        Ok(Self {
            listener,
            routes: Arc::new(routes),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept connections until `cancel` fires. Each connection runs on its own task.
    pub async fn serve(self, cancel: CancellationToken) -> Result<(), ServerError> {
        loop {
            let accepted = tokio::select! {
                _ = cancel.cancelled() => {
                    log::info!("shutting down");
                    return Ok(());
                }
                accepted = self.listener.accept() => accepted,
            };

            let (stream, peer) = match accepted {
                Ok(conn) => conn,
                Err(e) => {
                    // Usually transient (fd exhaustion, reset before accept)
                    log::warn!("accept failed: {e}");
                    continue;
                }
            };

            let routes = Arc::clone(&self.routes);
            tokio::spawn(async move {
                let io = TokioIo::new(stream);
                let service = service_fn(move |req: Request<Incoming>| {
                    let routes = Arc::clone(&routes);
                    async move {
                        let response = respond(&routes, req.method(), req.uri().path());
                        log::info!(
                            "{peer} {} {} -> {}",
                            req.method(),
                            req.uri().path(),
                            response.status().as_u16()
                        );
                        Ok::<_, Infallible>(response)
                    }
                });

                // Clients often drop the connection early; not worth more than debug.
                if let Err(e) = http1::Builder::new().serve_connection(io, service).await {
                    log::debug!("connection from {peer} ended: {e}");
                }
            });
        }
    }
}

/// Map a request line to a response. Query strings must already be stripped.
///
/// HEAD gets the GET response; hyper omits the body on the wire.
pub fn respond(routes: &RouteTable, method: &Method, path: &str) -> Response<Full<Bytes>> {
    if *method != Method::GET && *method != Method::HEAD {
        let mut response = html_response(
            StatusCode::METHOD_NOT_ALLOWED,
            message_page("Method Not Allowed", "Only GET and HEAD are supported."),
        );
        response
            .headers_mut()
            .insert(ALLOW, HeaderValue::from_static("GET, HEAD"));
        return response;
    }

    match routes.render(path) {
        Ok(page) => html_response(StatusCode::OK, page.html),
        Err(RouteError::NotFound { path }) => html_response(
            StatusCode::NOT_FOUND,
            message_page("Not Found", &format!("No page at {path}.")),
        ),
    }
}

fn html_response(status: StatusCode, body: String) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from(body)));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(HTML));
    response
}

fn message_page(title: &str, body: &str) -> String {
    let title = escape_html(title);
    format!(
        "<!DOCTYPE html><html><head><title>{title}</title></head>\
         <body><h1>{title}</h1><p>{}</p></body></html>",
        escape_html(body)
    )
}
