pub mod api;
pub mod config;
pub mod dataset;
pub mod error;
pub mod models;
pub mod services;
