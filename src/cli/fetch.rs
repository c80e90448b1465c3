// Read-only resource fetches

use clap::ValueEnum;

use crate::errors::{ApiError, AppError};
use crate::http::{ApiResponse, ApiResult};
use crate::services::Services;
use crate::types::EntityId;

/// Backend collections reachable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResourceKind {
    AssetProfiles,
    BuildingAssets,
    CustomFields,
    CustomFieldTypes,
    CustomFieldValues,
    People,
    PersonAssets,
    ProfileData,
    Reports,
    RoomAssets,
    Rooms,
    SerializedAssets,
    UserRoles,
    Warranties,
}

/// Issue `get_all` (or `get_by_id` when an id is given) and print the body
pub async fn fetch(services: &Services, resource: ResourceKind, id: Option<EntityId>) -> Result<(), AppError> {
    let response = match id {
        Some(id) => fetch_one(services, resource, id).await?,
        None => fetch_all(services, resource).await?,
    };

    tracing::debug!(?resource, status = response.status, "Fetched resource");

    let body = serde_json::to_string_pretty(&response.data).map_err(ApiError::from)?;
    println!("{}", body);
    Ok(())
}

async fn fetch_all(services: &Services, resource: ResourceKind) -> ApiResult<ApiResponse> {
    match resource {
        ResourceKind::AssetProfiles => services.asset_profiles.get_all().await,
        ResourceKind::BuildingAssets => services.building_assets.get_all().await,
        ResourceKind::CustomFields => services.custom_fields.get_all().await,
        ResourceKind::CustomFieldTypes => services.custom_field_types.get_all().await,
        ResourceKind::CustomFieldValues => services.custom_field_values.get_all().await,
        ResourceKind::People => services.people.get_all().await,
        ResourceKind::PersonAssets => services.person_assets.get_all().await,
        ResourceKind::ProfileData => services.profile_data.get_all().await,
        ResourceKind::Reports => services.reports.get_all(None).await,
        ResourceKind::RoomAssets => services.room_assets.get_all().await,
        ResourceKind::Rooms => services.rooms.get_all().await,
        ResourceKind::SerializedAssets => services.serialized_assets.get_all(None, None).await,
        ResourceKind::UserRoles => services.user_roles.get_all().await,
        ResourceKind::Warranties => services.warranties.get_all().await,
    }
}

async fn fetch_one(services: &Services, resource: ResourceKind, id: EntityId) -> ApiResult<ApiResponse> {
    match resource {
        ResourceKind::AssetProfiles => services.asset_profiles.get_by_id(id).await,
        ResourceKind::BuildingAssets => services.building_assets.get_by_id(id).await,
        ResourceKind::CustomFields => services.custom_fields.get(id).await,
        ResourceKind::CustomFieldTypes => services.custom_field_types.get(id).await,
        ResourceKind::CustomFieldValues => services.custom_field_values.get_by_id(id).await,
        ResourceKind::People => services.people.get_by_id(id).await,
        ResourceKind::PersonAssets => services.person_assets.get_by_id(id).await,
        ResourceKind::ProfileData => services.profile_data.get_by_id(id).await,
        ResourceKind::Reports => services.reports.get_by_id(id).await,
        ResourceKind::RoomAssets => services.room_assets.get_by_id(id).await,
        ResourceKind::Rooms => services.rooms.get_by_id(id).await,
        ResourceKind::SerializedAssets => services.serialized_assets.get_by_id(id).await,
        ResourceKind::UserRoles => services.user_roles.get(id).await,
        ResourceKind::Warranties => services.warranties.get_by_id(id).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use crate::test::utils::RecordingClient;

    #[tokio::test]
    async fn test_fetch_without_id_lists_collection() {
        let client = RecordingClient::new();
        let services = Services::new(client.clone());

        fetch(&services, ResourceKind::UserRoles, None).await.unwrap();

        let request = client.single();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "/useruserroles/");
    }

    #[tokio::test]
    async fn test_fetch_with_id_gets_single_record() {
        let client = RecordingClient::new();
        let services = Services::new(client.clone());

        fetch(&services, ResourceKind::CustomFieldTypes, Some(3)).await.unwrap();
        fetch(&services, ResourceKind::SerializedAssets, Some(9)).await.unwrap();

        let paths: Vec<_> = client.requests().into_iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["/customFieldType/3", "/serializedAsset/9"]);
    }
}
