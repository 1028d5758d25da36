pub mod api_doc;
pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod normalize;
pub mod routes;
pub mod server;
pub mod telemetry;
