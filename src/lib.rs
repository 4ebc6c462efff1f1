pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod graphql;
pub mod logging;
pub mod normalizer;
pub mod server;
