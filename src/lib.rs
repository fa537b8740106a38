pub mod api;
pub mod compress;
pub mod config;
pub mod errors;
