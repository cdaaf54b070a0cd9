pub mod app;
pub mod common;
pub mod config;
pub mod docs;
pub mod infrastructure;
pub mod middleware;
pub mod modules;
pub mod routes;
pub mod state;
