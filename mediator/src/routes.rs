//! Explicit route table binding paths to page composers.

use std::collections::BTreeMap;

use thiserror::Error;
use webdom::{render_document, Element};

use crate::pages::{home, HOME_PATH, HOME_TITLE};

/// Callback run once when a page is mounted.
///
/// Reserved for loading live data into a page; no route sets one yet.
pub type LoadHook = fn();

/// Route descriptor.
#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub path: &'static str,
    pub title: &'static str,
    pub compose: fn() -> Element,
    pub on_load: Option<LoadHook>,
}

impl Route {
    pub const fn new(path: &'static str, title: &'static str, compose: fn() -> Element) -> Self {
        Self {
            path,
            title,
            compose,
            on_load: None,
        }
    }

    pub const fn on_load(mut self, hook: LoadHook) -> Self {
        self.on_load = Some(hook);
        self
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("no page registered at {path}")]
    NotFound { path: String },
}

/// A composed and rendered page.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub title: &'static str,
    pub tree: Element,
    pub html: String,
}

/// Paths are matched without trailing slashes; `/` stays `/`.
fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: BTreeMap<&'static str, Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route. A later route for the same path replaces the earlier one.
    pub fn route(mut self, route: Route) -> Self {
        let path = normalize(route.path);
        if let Some(previous) = self.routes.insert(path, route) {
            log::warn!(
                "route {path} re-registered, replacing page \"{}\"",
                previous.title
            );
        }
        self
    }

    pub fn get(&self, path: &str) -> Option<&Route> {
        self.routes.get(normalize(path))
    }

    pub fn paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.routes.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Compose the page at `path` and render it as a full HTML document.
    pub fn render(&self, path: &str) -> Result<RenderedPage, RouteError> {
        let route = self.get(path).ok_or_else(|| RouteError::NotFound {
            path: path.to_string(),
        })?;

        let tree = (route.compose)();
        let html = render_document(route.title, &tree);
        log::debug!("composed {} ({} bytes)", route.path, html.len());

        Ok(RenderedPage {
            title: route.title,
            tree,
            html,
        })
    }
}

/// Routes served by the dashboard.
pub fn app_routes() -> RouteTable {
    RouteTable::new().route(Route::new(HOME_PATH, HOME_TITLE, home))
}
