pub mod auth;
pub mod config;
pub mod error;
pub mod persistence;
pub mod seed;
pub mod state;
pub mod sync;
