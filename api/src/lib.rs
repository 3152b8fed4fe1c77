mod cookies;
mod error;
mod extractor;
mod init;
mod middleware;
mod openapi;
mod pages;

pub mod models;
pub mod routers;

pub use error::ApiError;
pub use init::{setup_config, setup_db, setup_router};
