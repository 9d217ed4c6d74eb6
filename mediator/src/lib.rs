//! The Discussion Mediator dashboard: builders for every panel of the page,
//! the page composer, and the route table that serves it.

pub mod composites;
pub mod content;
pub mod layout;
pub mod pages;
pub mod primitives;
pub mod routes;
pub mod sections;
pub mod theme;

pub use layout::{main_content, main_layout, page_sections};
pub use routes::{app_routes, LoadHook, RenderedPage, Route, RouteError, RouteTable};
