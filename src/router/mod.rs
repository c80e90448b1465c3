// Router layer - route table and navigation guard
mod guard;
mod navigation;
mod path_pattern;
mod permissions;
mod route_table;

pub use guard::{before_each, NavigationOutcome, RedirectTarget};
pub use navigation::{Navigation, Router};
pub use path_pattern::{PathPattern, RouteParams};
pub use permissions::RouteRequirements;
pub use route_table::{routes, RouteDescriptor, ViewComponent};
