//! End-to-end flows over the in-memory platform backend.

use fabric_mcp::services::memory::MemoryPlatform;
use fabric_mcp::services::Platform;
use fabric_mcp::AppError;

use super::test_helpers::{sample_connection, sample_dataflow, sample_gateway, sample_workspace};

#[tokio::test]
async fn connection_crud_lifecycle() {
    let platform = MemoryPlatform::new(50);
    assert!(platform.list_connections().await.expect("list").is_empty());

    let created = platform
        .create_connection(sample_connection("conn-1"))
        .await
        .expect("create");
    assert_eq!(created.id, "conn-1");

    let fetched = platform.get_connection("conn-1").await.expect("get");
    assert_eq!(fetched, created);

    let mut updated = fetched.clone();
    updated.display_name = "Renamed".to_owned();
    let stored = platform.update_connection(updated).await.expect("update");
    assert_eq!(stored.display_name, "Renamed");
    assert_eq!(
        platform
            .get_connection("conn-1")
            .await
            .expect("get")
            .display_name,
        "Renamed"
    );

    platform.delete_connection("conn-1").await.expect("delete");
    assert!(platform.list_connections().await.expect("list").is_empty());

    let err = platform
        .get_connection("conn-1")
        .await
        .expect_err("gone after delete");
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn create_assigns_an_identifier_when_absent() {
    let platform = MemoryPlatform::new(50);
    let created = platform
        .create_connection(sample_connection(""))
        .await
        .expect("create");
    assert!(!created.id.is_empty(), "server assigns an id");

    let fetched = platform.get_connection(&created.id).await.expect("get");
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_rejects_a_duplicate_identifier() {
    let platform = MemoryPlatform::new(50);
    platform
        .create_connection(sample_connection("conn-1"))
        .await
        .expect("create");

    let err = platform
        .create_connection(sample_connection("conn-1"))
        .await
        .expect_err("must fail");
    assert!(matches!(err, AppError::Platform(_)));
    assert!(err.to_string().contains("conn-1"));
}

#[tokio::test]
async fn update_and_delete_require_an_existing_connection() {
    let platform = MemoryPlatform::new(50);

    let err = platform
        .update_connection(sample_connection("missing"))
        .await
        .expect_err("must fail");
    assert!(matches!(err, AppError::NotFound(_)));

    let err = platform
        .delete_connection("missing")
        .await
        .expect_err("must fail");
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn gateways_are_fetched_by_identifier() {
    let platform = MemoryPlatform::new(50);
    platform.seed_gateway(sample_gateway("gw-1")).await;
    platform.seed_gateway(sample_gateway("gw-2")).await;

    let all = platform.list_gateways().await.expect("list");
    assert_eq!(all.len(), 2);

    let one = platform.get_gateway("gw-2").await.expect("get");
    assert_eq!(one.id(), "gw-2");

    let err = platform.get_gateway("gw-9").await.expect_err("must fail");
    assert!(matches!(err, AppError::NotFound(_)));
    assert!(err.to_string().contains("gw-9"));
}

#[tokio::test]
async fn workspaces_and_capacities_list_what_was_seeded() {
    let platform = MemoryPlatform::new(50);
    platform.seed_workspace(sample_workspace("ws-1")).await;
    platform.seed_workspace(sample_workspace("ws-2")).await;

    let workspaces = platform.list_workspaces().await.expect("list");
    assert_eq!(workspaces.len(), 2);
    assert_eq!(workspaces[0].id, "ws-1");

    assert!(platform.list_capacities().await.expect("list").is_empty());
}

#[tokio::test]
async fn dataflow_listing_honours_the_workspace_scope() {
    let platform = MemoryPlatform::new(50);
    platform.seed_dataflow(sample_dataflow("df-1", "ws-a")).await;
    platform.seed_dataflow(sample_dataflow("df-2", "ws-b")).await;

    let all = platform.list_dataflows(None).await.expect("list");
    assert_eq!(all.len(), 2);

    let scoped = platform.list_dataflows(Some("ws-a")).await.expect("list");
    assert_eq!(scoped.len(), 1);
    assert_eq!(scoped[0].id, "df-1");
}

#[tokio::test]
async fn dataflow_query_echoes_the_request_shape() {
    let platform = MemoryPlatform::new(50);
    platform.seed_dataflow(sample_dataflow("df-1", "ws-a")).await;

    let result = platform
        .query_dataflow("df-1", "evaluate Orders")
        .await
        .expect("query");
    assert_eq!(result.dataflow_id, "df-1");
    assert_eq!(result.query, "evaluate Orders");
    assert_eq!(result.row_count, 0);
    assert!(result.rows.is_empty());

    let err = platform
        .query_dataflow("df-9", "evaluate Orders")
        .await
        .expect_err("must fail");
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn device_code_login_yields_a_presentable_challenge() {
    let platform = MemoryPlatform::new(50);
    let login = platform.begin_device_code_login().await.expect("login");

    assert_eq!(login.user_code.len(), 8);
    assert_eq!(login.user_code, login.user_code.to_uppercase());
    assert!(login.verification_uri.starts_with("https://"));
    assert!(login.interval_seconds > 0);
    assert!(login.expires_at > chrono::Utc::now());
}
