// Database entities - SeaORM models
pub mod client_storage;
