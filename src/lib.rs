// Larder - library root

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod store;
