pub mod analytics;
pub mod api;
pub mod cli;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod models;
pub mod observability;
pub mod server;
pub mod state;
