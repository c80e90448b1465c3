use std::fmt;

/// Fine-grained view permissions carried by the session user
///
/// Each variant maps to one `view*` flag on the user record and can be
/// required by a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewPermission {
    Users,
    Assets,
    Facilities,
    People,
    CheckOutIn,
    Reports,
    Maintenance,
    Warranties,
    Leases,
}

impl ViewPermission {
    pub const ALL: [ViewPermission; 9] = [
        ViewPermission::Users,
        ViewPermission::Assets,
        ViewPermission::Facilities,
        ViewPermission::People,
        ViewPermission::CheckOutIn,
        ViewPermission::Reports,
        ViewPermission::Maintenance,
        ViewPermission::Warranties,
        ViewPermission::Leases,
    ];

    /// Name of the flag on the user record
    pub fn flag_name(&self) -> &'static str {
        match self {
            ViewPermission::Users => "viewUsers",
            ViewPermission::Assets => "viewAssets",
            ViewPermission::Facilities => "viewFacilities",
            ViewPermission::People => "viewPeople",
            ViewPermission::CheckOutIn => "viewCheckOutIn",
            ViewPermission::Reports => "viewReports",
            ViewPermission::Maintenance => "viewMaintenance",
            ViewPermission::Warranties => "viewWarranties",
            ViewPermission::Leases => "viewLeases",
        }
    }
}

impl fmt::Display for ViewPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.flag_name())
    }
}
