// Errors layer - Error type definitions
pub mod api;
pub mod app;
pub mod router;
pub mod storage;

// Re-exports for convenience
pub use api::ApiError;
pub use app::AppError;
pub use router::RouterError;
pub use storage::StorageError;
