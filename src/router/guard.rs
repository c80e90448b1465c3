use std::fmt;

use super::RouteDescriptor;
use crate::stores::SessionGetters;

/// Where a rejected navigation is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    Login,
    UserDashboard,
    UnassignedDashboard,
}

impl RedirectTarget {
    pub fn path(&self) -> &'static str {
        match self {
            RedirectTarget::Login => "/login",
            RedirectTarget::UserDashboard => "/userDashboard",
            RedirectTarget::UnassignedDashboard => "/unassignedDashboard",
        }
    }
}

impl fmt::Display for RedirectTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    Proceed,
    Redirect(RedirectTarget),
}

/// Decide whether navigating to `to` may proceed
///
/// Rules are checked in a fixed order and the first failing one picks the
/// redirect:
/// 1. authentication, to `/login`
/// 2. admin, to `/userDashboard`
/// 3. assigned role, to `/unassignedDashboard`
/// 4. every required view permission, to `/userDashboard`
pub fn before_each(
    to: &RouteDescriptor,
    from: Option<&RouteDescriptor>,
    session: &impl SessionGetters,
) -> NavigationOutcome {
    let requirements = &to.requirements;

    let outcome = if requirements.requires_auth && !session.is_authenticated() {
        NavigationOutcome::Redirect(RedirectTarget::Login)
    } else if requirements.requires_admin && !session.is_admin() {
        NavigationOutcome::Redirect(RedirectTarget::UserDashboard)
    } else if requirements.requires_role && !session.is_role_assigned() {
        NavigationOutcome::Redirect(RedirectTarget::UnassignedDashboard)
    } else if requirements.views.iter().any(|view| !session.can_view(*view)) {
        NavigationOutcome::Redirect(RedirectTarget::UserDashboard)
    } else {
        NavigationOutcome::Proceed
    };

    tracing::trace!(
        from = from.map(|r| r.name),
        to = to.name,
        ?outcome,
        "Navigation guard evaluated"
    );

    outcome
}
