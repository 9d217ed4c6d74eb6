pub mod config;
pub mod error;
pub mod logging;
pub mod paths;
pub mod server;

pub use config::{ConfigError, ServerConfig};
pub use error::ServerError;
pub use server::{respond, Server};
