use crate::types::{SessionUser, ViewPermission};

/// Read-only view of the session consumed by the navigation guard
///
/// Every method is total: with no user present each returns `false`.
pub trait SessionGetters {
    fn is_authenticated(&self) -> bool;

    fn is_admin(&self) -> bool;

    fn is_role_assigned(&self) -> bool;

    fn can_view(&self, permission: ViewPermission) -> bool;
}

impl SessionGetters for Option<SessionUser> {
    fn is_authenticated(&self) -> bool {
        self.is_some()
    }

    fn is_admin(&self) -> bool {
        self.as_ref().is_some_and(|u| u.is_admin)
    }

    fn is_role_assigned(&self) -> bool {
        self.as_ref().is_some_and(|u| !u.is_unassigned)
    }

    fn can_view(&self, permission: ViewPermission) -> bool {
        self.as_ref().is_some_and(|u| u.can_view(permission))
    }
}
