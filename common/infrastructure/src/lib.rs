pub mod app;
pub mod logging;

pub use app::http::{HttpServerBuilder, HttpServerConfig};
