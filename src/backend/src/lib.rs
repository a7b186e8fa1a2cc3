pub mod api;
pub mod config;
pub mod config_client;
pub mod http_client;
pub mod services;
