pub mod builder;
pub mod config;
pub mod errors;
pub mod export;
pub mod exporter;
pub mod extract;
pub mod host;
pub mod resolve;
pub mod scope;
pub mod store;
pub mod types;
