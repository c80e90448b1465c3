// Services layer - one REST client per backend resource
pub mod asset_profile;
pub mod assignment;
pub mod building_asset;
pub mod custom_field;
pub mod custom_field_type;
pub mod custom_field_value;
pub mod person;
pub mod person_asset;
pub mod profile_data;
pub mod report;
pub mod room;
pub mod room_asset;
pub mod serialized_asset;
pub mod user_user_role;
pub mod warranty;

pub use asset_profile::AssetProfileService;
pub use assignment::AssignmentService;
pub use building_asset::BuildingAssetService;
pub use custom_field::CustomFieldService;
pub use custom_field_type::CustomFieldTypeService;
pub use custom_field_value::CustomFieldValueService;
pub use person::PersonService;
pub use person_asset::PersonAssetService;
pub use profile_data::ProfileDataService;
pub use report::ReportService;
pub use room::RoomService;
pub use room_asset::RoomAssetService;
pub use serialized_asset::SerializedAssetService;
pub use user_user_role::UserUserRoleService;
pub use warranty::WarrantyService;

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::errors::ApiError;
use crate::http::ApiClient;

/// Every resource service, sharing one HTTP client
#[derive(Clone)]
pub struct Services {
    pub asset_profiles: AssetProfileService,
    pub assignments: AssignmentService,
    pub building_assets: BuildingAssetService,
    pub custom_fields: CustomFieldService,
    pub custom_field_types: CustomFieldTypeService,
    pub custom_field_values: CustomFieldValueService,
    pub people: PersonService,
    pub person_assets: PersonAssetService,
    pub profile_data: ProfileDataService,
    pub reports: ReportService,
    pub rooms: RoomService,
    pub room_assets: RoomAssetService,
    pub serialized_assets: SerializedAssetService,
    pub user_roles: UserUserRoleService,
    pub warranties: WarrantyService,
}

impl Services {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self {
            asset_profiles: AssetProfileService::new(client.clone()),
            assignments: AssignmentService::new(client.clone()),
            building_assets: BuildingAssetService::new(client.clone()),
            custom_fields: CustomFieldService::new(client.clone()),
            custom_field_types: CustomFieldTypeService::new(client.clone()),
            custom_field_values: CustomFieldValueService::new(client.clone()),
            people: PersonService::new(client.clone()),
            person_assets: PersonAssetService::new(client.clone()),
            profile_data: ProfileDataService::new(client.clone()),
            reports: ReportService::new(client.clone()),
            rooms: RoomService::new(client.clone()),
            room_assets: RoomAssetService::new(client.clone()),
            serialized_assets: SerializedAssetService::new(client.clone()),
            user_roles: UserUserRoleService::new(client.clone()),
            warranties: WarrantyService::new(client),
        }
    }
}

/// Serialize a request payload before anything is sent
pub(crate) fn to_body<T: Serialize + ?Sized>(data: &T) -> Result<Value, ApiError> {
    Ok(serde_json::to_value(data)?)
}
