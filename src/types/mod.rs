// Types layer - All data structures
pub mod access_token;
pub mod checkout;
pub mod db;
pub mod permission;
pub mod session_user;

pub use access_token::AccessToken;
pub use checkout::{CheckinUpdate, CheckoutStatusUpdate};
pub use permission::ViewPermission;
pub use session_user::SessionUser;

/// Backend primary keys are plain integers
pub type EntityId = u64;
