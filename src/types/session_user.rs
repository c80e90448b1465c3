use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::{EntityId, ViewPermission};

/// The authenticated user as returned by the backend at login
///
/// Every permission flag defaults to `false` when the backend omits it or
/// sends `null`. Fields this client does not model are kept in `extra` so a
/// persisted user reloads as the same document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(rename = "fName", default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "lName", default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_role_id: Option<EntityId>,

    // Role flags
    #[serde(default, deserialize_with = "flag")]
    pub is_admin: bool,
    #[serde(default, deserialize_with = "flag")]
    pub is_manager: bool,
    #[serde(default, deserialize_with = "flag")]
    pub is_worker: bool,
    #[serde(default, deserialize_with = "flag")]
    pub is_unassigned: bool,
    #[serde(default, deserialize_with = "flag")]
    pub dev_permission: bool,

    // View flags
    #[serde(default, deserialize_with = "flag")]
    pub view_users: bool,
    #[serde(default, deserialize_with = "flag")]
    pub view_assets: bool,
    #[serde(default, deserialize_with = "flag")]
    pub view_facilities: bool,
    #[serde(default, deserialize_with = "flag")]
    pub view_people: bool,
    #[serde(default, deserialize_with = "flag")]
    pub view_check_out_in: bool,
    #[serde(default, deserialize_with = "flag")]
    pub view_reports: bool,
    #[serde(default, deserialize_with = "flag")]
    pub view_maintenance: bool,
    #[serde(default, deserialize_with = "flag")]
    pub view_warranties: bool,
    #[serde(default, deserialize_with = "flag")]
    pub view_leases: bool,

    // Action flags
    #[serde(default, deserialize_with = "flag")]
    pub can_add: bool,
    #[serde(default, deserialize_with = "flag")]
    pub can_edit: bool,
    #[serde(default, deserialize_with = "flag")]
    pub can_delete: bool,
    #[serde(default, deserialize_with = "flag")]
    pub can_archive: bool,
    #[serde(default, deserialize_with = "flag")]
    pub can_activate: bool,
    #[serde(default, deserialize_with = "flag")]
    pub can_manage_maintenance: bool,
    #[serde(default, deserialize_with = "flag")]
    pub can_manage_warranties: bool,
    #[serde(default, deserialize_with = "flag")]
    pub can_manage_leases: bool,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionUser {
    pub fn can_view(&self, permission: ViewPermission) -> bool {
        match permission {
            ViewPermission::Users => self.view_users,
            ViewPermission::Assets => self.view_assets,
            ViewPermission::Facilities => self.view_facilities,
            ViewPermission::People => self.view_people,
            ViewPermission::CheckOutIn => self.view_check_out_in,
            ViewPermission::Reports => self.view_reports,
            ViewPermission::Maintenance => self.view_maintenance,
            ViewPermission::Warranties => self.view_warranties,
            ViewPermission::Leases => self.view_leases,
        }
    }

    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.email.clone().unwrap_or_else(|| "unknown".to_string()),
        }
    }
}

fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_and_null_flags_read_as_false() {
        let user: SessionUser = serde_json::from_value(json!({
            "id": 3,
            "email": "worker@example.edu",
            "viewAssets": null,
            "isAdmin": true
        }))
        .unwrap();

        assert!(user.is_admin);
        assert!(!user.view_assets);
        assert!(!user.view_people);
        assert!(!user.is_unassigned);
    }

    #[test]
    fn test_flag_names_follow_backend_casing() {
        let user: SessionUser = serde_json::from_value(json!({
            "fName": "Ada",
            "lName": "Lovelace",
            "viewCheckOutIn": true,
            "canManageLeases": true,
            "devPermission": true
        }))
        .unwrap();

        assert!(user.view_check_out_in);
        assert!(user.can_manage_leases);
        assert!(user.dev_permission);
        assert_eq!(user.display_name(), "Ada Lovelace");
    }

    #[test]
    fn test_unknown_fields_survive_serialization() {
        let original = json!({
            "id": 9,
            "token": "abc",
            "userRoleId": 4,
            "department": "Facilities",
            "viewReports": true
        });

        let user: SessionUser = serde_json::from_value(original).unwrap();
        assert_eq!(user.extra.get("department"), Some(&json!("Facilities")));

        let reparsed: SessionUser =
            serde_json::from_value(serde_json::to_value(&user).unwrap()).unwrap();
        assert_eq!(reparsed, user);
    }

    #[test]
    fn test_can_view_maps_each_permission_to_its_flag() {
        for permission in ViewPermission::ALL {
            let mut document = Map::new();
            document.insert(permission.flag_name().to_string(), json!(true));
            let user: SessionUser = serde_json::from_value(Value::Object(document)).unwrap();

            assert!(user.can_view(permission), "{} should be granted", permission);
            for other in ViewPermission::ALL.iter().filter(|p| **p != permission) {
                assert!(!user.can_view(*other), "{} leaked from {}", other, permission);
            }
        }
    }
}
