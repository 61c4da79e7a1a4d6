// Library exports for testing
pub mod config;
pub mod dataset;
pub mod errors;
pub mod extract;
pub mod models;
pub mod routes;
pub mod state;
