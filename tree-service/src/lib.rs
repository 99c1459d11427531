// Library exports for tree-service
pub mod config;
pub mod server;
