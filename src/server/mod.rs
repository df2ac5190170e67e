pub mod config;
mod http_layers;
pub mod server;
pub mod state;
pub mod views;

mod api_routes;
mod html_routes;

pub use config::ServerConfig;
pub use http_layers::*;
#[allow(unused_imports)] // Used by main.rs
pub use server::run_server;
