use crate::types::ViewPermission;

/// Permission metadata attached to a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRequirements {
    pub requires_auth: bool,
    pub requires_admin: bool,
    pub requires_role: bool,
    /// Every listed view permission must be granted
    pub views: &'static [ViewPermission],
}

impl RouteRequirements {
    pub const NONE: RouteRequirements = RouteRequirements {
        requires_auth: false,
        requires_admin: false,
        requires_role: false,
        views: &[],
    };

    pub const fn authenticated() -> Self {
        Self {
            requires_auth: true,
            ..Self::NONE
        }
    }

    pub const fn with_admin(self) -> Self {
        Self {
            requires_admin: true,
            ..self
        }
    }

    pub const fn with_role(self) -> Self {
        Self {
            requires_role: true,
            ..self
        }
    }

    pub const fn with_views(self, views: &'static [ViewPermission]) -> Self {
        Self { views, ..self }
    }

    pub fn is_public(&self) -> bool {
        !self.requires_auth && !self.requires_admin && !self.requires_role && self.views.is_empty()
    }

    /// Short human-readable summary, e.g. `auth+admin` or `auth+viewAssets`
    pub fn describe(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if self.requires_auth {
            parts.push("auth".to_string());
        }
        if self.requires_admin {
            parts.push("admin".to_string());
        }
        if self.requires_role {
            parts.push("role".to_string());
        }
        parts.extend(self.views.iter().map(|v| v.flag_name().to_string()));

        if parts.is_empty() {
            "public".to_string()
        } else {
            parts.join("+")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_compose() {
        const REQS: RouteRequirements = RouteRequirements::authenticated()
            .with_admin()
            .with_views(&[ViewPermission::Users]);

        assert!(REQS.requires_auth);
        assert!(REQS.requires_admin);
        assert!(!REQS.requires_role);
        assert_eq!(REQS.views, &[ViewPermission::Users]);
        assert_eq!(REQS.describe(), "auth+admin+viewUsers");
    }

    #[test]
    fn test_none_is_public() {
        assert!(RouteRequirements::NONE.is_public());
        assert_eq!(RouteRequirements::NONE.describe(), "public");
        assert!(!RouteRequirements::authenticated().is_public());
    }
}
