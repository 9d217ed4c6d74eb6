use std::process::ExitCode;

use mediator::app_routes;
use mediator_server::{logging, Server, ServerConfig, ServerError};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::load()?;
    logging::init(&config)?;

    let routes = app_routes();
    let paths: Vec<_> = routes.paths().collect();
    let server = Server::bind(config.addr(), routes).await?;
    log::info!(
        "serving {} on http://{}",
        paths.join(", "),
        server.local_addr()?
    );

    let cancel = CancellationToken::new();
    let shutdown = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown.cancel();
        }
    });

    server.serve(cancel).await
}
