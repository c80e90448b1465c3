// Stores layer - client-side application state
pub mod app_store;
pub mod session_getters;

pub use app_store::AppStore;
pub use session_getters::SessionGetters;
