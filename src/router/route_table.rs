use std::fmt;

use super::RouteRequirements;
use crate::types::ViewPermission;

/// View rendered by a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewComponent {
    Login,
    AdminDashboard,
    UnassignedDashboard,
    UserDashboard,
    DevTools,
    UserManage,
    AssetManage,
    FacilityManage,
    PersonManage,
    ProfileView,
    AssetCheckout,
    Reports,
    ReportGeneration,
    SerializedAssetView,
    BuildingView,
    RoomView,
    PersonView,
    Maintenance,
    Warranties,
    Leasing,
}

impl fmt::Display for ViewComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// One entry of the route table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub alias: Option<&'static str>,
    pub name: &'static str,
    pub view: ViewComponent,
    pub requirements: RouteRequirements,
}

const AUTH: RouteRequirements = RouteRequirements::authenticated();
const AUTH_ROLE: RouteRequirements = AUTH.with_role();

const fn route(path: &'static str, name: &'static str, view: ViewComponent, requirements: RouteRequirements) -> RouteDescriptor {
    RouteDescriptor {
        path,
        alias: None,
        name,
        view,
        requirements,
    }
}

static ROUTES: [RouteDescriptor; 20] = [
    RouteDescriptor {
        path: "/",
        alias: Some("/login"),
        name: "login",
        view: ViewComponent::Login,
        requirements: RouteRequirements::NONE,
    },
    route("/adminDashboard", "adminDashboard", ViewComponent::AdminDashboard, AUTH.with_admin()),
    route("/unassignedDashboard", "unassignedDashboard", ViewComponent::UnassignedDashboard, AUTH),
    route("/userDashboard", "userDashboard", ViewComponent::UserDashboard, AUTH_ROLE),
    route("/devTools", "devTools", ViewComponent::DevTools, AUTH),
    route("/userManage", "userManage", ViewComponent::UserManage, AUTH.with_views(&[ViewPermission::Users])),
    route("/assetManage", "assetManage", ViewComponent::AssetManage, AUTH.with_views(&[ViewPermission::Assets])),
    route("/facilityManage", "facilityManage", ViewComponent::FacilityManage, AUTH.with_views(&[ViewPermission::Facilities])),
    route("/personManage", "personManage", ViewComponent::PersonManage, AUTH.with_views(&[ViewPermission::People])),
    route("/profileView:profileId", "profileView", ViewComponent::ProfileView, AUTH_ROLE),
    route("/assetCheckout", "assetCheckout", ViewComponent::AssetCheckout, AUTH.with_views(&[ViewPermission::CheckOutIn])),
    route("/reports", "reports", ViewComponent::Reports, AUTH.with_views(&[ViewPermission::Reports])),
    route("/reportGeneration", "reportGeneration", ViewComponent::ReportGeneration, AUTH.with_views(&[ViewPermission::Reports])),
    route("/serializedAssetView:serializedAssetId/:personId", "serializedAssetView", ViewComponent::SerializedAssetView, AUTH_ROLE),
    route("/buildingView:buildingId", "buildingView", ViewComponent::BuildingView, AUTH_ROLE),
    route("/RoomView:roomId", "roomView", ViewComponent::RoomView, AUTH_ROLE),
    route("/PersonView:personId", "personView", ViewComponent::PersonView, AUTH_ROLE),
    route("/Maintenance", "maintenance", ViewComponent::Maintenance, AUTH.with_views(&[ViewPermission::Maintenance])),
    route("/Warranties", "warranties", ViewComponent::Warranties, AUTH.with_views(&[ViewPermission::Warranties])),
    route("/Leasing", "leasing", ViewComponent::Leasing, AUTH.with_views(&[ViewPermission::Leases])),
];

/// The application's route table, in matching order
pub fn routes() -> &'static [RouteDescriptor] {
    &ROUTES
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn by_name(name: &str) -> &'static RouteDescriptor {
        routes().iter().find(|r| r.name == name).unwrap()
    }

    #[test]
    fn test_route_names_and_paths_are_unique() {
        let names: HashSet<_> = routes().iter().map(|r| r.name).collect();
        let paths: HashSet<_> = routes().iter().map(|r| r.path).collect();

        assert_eq!(names.len(), routes().len());
        assert_eq!(paths.len(), routes().len());
    }

    #[test]
    fn test_only_login_is_public() {
        let public: Vec<_> = routes()
            .iter()
            .filter(|r| r.requirements.is_public())
            .map(|r| r.name)
            .collect();

        assert_eq!(public, vec!["login"]);
        assert_eq!(by_name("login").alias, Some("/login"));
    }

    #[test]
    fn test_admin_dashboard_requires_admin() {
        let reqs = by_name("adminDashboard").requirements;
        assert!(reqs.requires_auth && reqs.requires_admin);
    }

    #[test]
    fn test_management_routes_require_matching_view_flag() {
        let expected = [
            ("userManage", ViewPermission::Users),
            ("assetManage", ViewPermission::Assets),
            ("facilityManage", ViewPermission::Facilities),
            ("personManage", ViewPermission::People),
            ("assetCheckout", ViewPermission::CheckOutIn),
            ("reports", ViewPermission::Reports),
            ("reportGeneration", ViewPermission::Reports),
            ("maintenance", ViewPermission::Maintenance),
            ("warranties", ViewPermission::Warranties),
            ("leasing", ViewPermission::Leases),
        ];

        for (name, permission) in expected {
            let reqs = by_name(name).requirements;
            assert!(reqs.requires_auth, "{} must require auth", name);
            assert_eq!(reqs.views, &[permission], "{} view flags", name);
        }
    }

    #[test]
    fn test_detail_views_require_assigned_role() {
        for name in ["userDashboard", "profileView", "serializedAssetView", "buildingView", "roomView", "personView"] {
            let reqs = by_name(name).requirements;
            assert!(reqs.requires_auth && reqs.requires_role, "{} must require a role", name);
        }
    }
}
