use super::{before_each, routes, NavigationOutcome, PathPattern, RouteDescriptor, RouteParams};
use crate::errors::RouterError;
use crate::stores::SessionGetters;

struct CompiledRoute {
    descriptor: &'static RouteDescriptor,
    pattern: PathPattern,
    alias: Option<PathPattern>,
}

/// Result of a guarded navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub route: &'static RouteDescriptor,
    pub params: RouteParams,
    pub outcome: NavigationOutcome,
}

impl Navigation {
    /// Route the user actually ends up on
    pub fn destination(&self, router: &Router) -> Result<&'static RouteDescriptor, RouterError> {
        match self.outcome {
            NavigationOutcome::Proceed => Ok(self.route),
            NavigationOutcome::Redirect(target) => router.resolve(target.path()).map(|(r, _)| r),
        }
    }
}

/// Resolves paths against the route table and runs the guard
pub struct Router {
    routes: Vec<CompiledRoute>,
}

impl Router {
    pub fn new() -> Self {
        Self::with_routes(routes())
    }

    pub fn with_routes(table: &'static [RouteDescriptor]) -> Self {
        let routes = table
            .iter()
            .map(|descriptor| CompiledRoute {
                descriptor,
                pattern: PathPattern::parse(descriptor.path),
                alias: descriptor.alias.map(PathPattern::parse),
            })
            .collect();

        Self { routes }
    }

    pub fn routes(&self) -> impl Iterator<Item = &'static RouteDescriptor> + '_ {
        self.routes.iter().map(|r| r.descriptor)
    }

    /// Find the first route matching `path`
    pub fn resolve(&self, path: &str) -> Result<(&'static RouteDescriptor, RouteParams), RouterError> {
        self.routes
            .iter()
            .find_map(|route| {
                route
                    .pattern
                    .matches(path)
                    .or_else(|| route.alias.as_ref().and_then(|alias| alias.matches(path)))
                    .map(|params| (route.descriptor, params))
            })
            .ok_or_else(|| RouterError::NoMatch {
                path: path.to_string(),
            })
    }

    pub fn find_by_name(&self, name: &str) -> Option<&'static RouteDescriptor> {
        self.routes().find(|r| r.name == name)
    }

    /// Resolve `to` and run the navigation guard against the session
    ///
    /// `from` is the path currently displayed, if any; an unknown `from` is
    /// treated as no previous route.
    pub fn navigate(
        &self,
        to: &str,
        from: Option<&str>,
        session: &impl SessionGetters,
    ) -> Result<Navigation, RouterError> {
        let (route, params) = self.resolve(to)?;
        let from_route = from.and_then(|path| self.resolve(path).ok()).map(|(r, _)| r);

        let outcome = before_each(route, from_route, session);
        if let NavigationOutcome::Redirect(target) = outcome {
            tracing::debug!(route = route.name, redirect = %target, "Navigation redirected");
        }

        Ok(Navigation {
            route,
            params,
            outcome,
        })
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
