mod common;

use std::sync::Arc;
use std::time::Duration;

use asset_portal::app_data::AppData;
use asset_portal::config::ClientSettings;
use asset_portal::router::{NavigationOutcome, RedirectTarget, Router};
use asset_portal::storage::DatabaseStorage;
use asset_portal::types::SessionUser;
use serde_json::json;

async fn setup_app_data() -> AppData {
    let settings = ClientSettings::new("http://localhost:3032/asset-t1/", "sqlite::memory:", Duration::from_secs(5));
    let storage = Arc::new(DatabaseStorage::new(common::setup_test_storage_db().await));
    AppData::with_storage(settings, storage)
        .await
        .expect("Failed to build app data")
}

fn user(document: serde_json::Value) -> SessionUser {
    serde_json::from_value(document).expect("user fixture should parse")
}

#[tokio::test]
async fn test_anonymous_navigation_only_reaches_login() {
    let app_data = setup_app_data().await;
    let protected = [
        "/adminDashboard",
        "/unassignedDashboard",
        "/userDashboard",
        "/devTools",
        "/userManage",
        "/assetManage",
        "/facilityManage",
        "/personManage",
        "/profileView3",
        "/assetCheckout",
        "/reports",
        "/reportGeneration",
        "/serializedAssetView15/22",
        "/buildingView2",
        "/RoomView4",
        "/PersonView7",
        "/Maintenance",
        "/Warranties",
        "/Leasing",
    ];

    for path in protected {
        let navigation = app_data.navigate(path, None).unwrap();
        assert_eq!(
            navigation.outcome,
            NavigationOutcome::Redirect(RedirectTarget::Login),
            "{} should require login",
            path
        );
    }

    for path in ["/", "/login"] {
        let navigation = app_data.navigate(path, None).unwrap();
        assert_eq!(navigation.route.name, "login");
        assert_eq!(navigation.outcome, NavigationOutcome::Proceed);
    }
}

#[tokio::test]
async fn test_worker_navigation_follows_view_flags() {
    let mut app_data = setup_app_data().await;
    app_data
        .login(user(json!({"id": 5, "token": "t", "isWorker": true, "viewAssets": true})))
        .await
        .unwrap();

    let assets = app_data.navigate("/assetManage", Some("/userDashboard")).unwrap();
    assert_eq!(assets.outcome, NavigationOutcome::Proceed);

    let users = app_data.navigate("/userManage", Some("/userDashboard")).unwrap();
    assert_eq!(users.outcome, NavigationOutcome::Redirect(RedirectTarget::UserDashboard));
    assert_eq!(users.destination(&app_data.router).unwrap().name, "userDashboard");

    let admin = app_data.navigate("/adminDashboard", None).unwrap();
    assert_eq!(admin.outcome, NavigationOutcome::Redirect(RedirectTarget::UserDashboard));
}

#[tokio::test]
async fn test_unassigned_user_is_sent_to_unassigned_dashboard() {
    let mut app_data = setup_app_data().await;
    app_data
        .login(user(json!({"id": 9, "isUnassigned": true})))
        .await
        .unwrap();

    let navigation = app_data.navigate("/PersonView7", None).unwrap();

    assert_eq!(
        navigation.outcome,
        NavigationOutcome::Redirect(RedirectTarget::UnassignedDashboard)
    );
    assert_eq!(navigation.params.get("personId"), Some("7"));
    assert_eq!(
        navigation.destination(&app_data.router).unwrap().name,
        "unassignedDashboard"
    );
}

#[tokio::test]
async fn test_params_are_captured_for_detail_views() {
    let router = Router::new();

    let (route, params) = router.resolve("/serializedAssetView15/22").unwrap();

    assert_eq!(route.name, "serializedAssetView");
    assert_eq!(params.get("serializedAssetId"), Some("15"));
    assert_eq!(params.get("personId"), Some("22"));
}

#[tokio::test]
async fn test_unknown_path_is_an_error() {
    let app_data = setup_app_data().await;

    assert!(app_data.navigate("/nowhere", None).is_err());
}
