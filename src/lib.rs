pub mod config;
pub mod executor;
pub mod routes;
pub mod web_server;
