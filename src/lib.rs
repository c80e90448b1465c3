// Library exports for the CLI binary and integration tests

pub mod app_data;
pub mod cli;
pub mod config;
pub mod errors;
pub mod http;
pub mod router;
pub mod services;
pub mod storage;
pub mod stores;
pub mod types;

#[cfg(test)]
mod test;
