//! Unit tests for pipeline paging: the envelope invariant and the
//! offset-token walk over the in-memory store.

use fabric_mcp::models::pipeline::{ListPipelinesResponse, Pipeline, PipelineInfo};
use fabric_mcp::services::memory::MemoryPlatform;
use fabric_mcp::services::Platform;
use fabric_mcp::AppError;

fn pipeline(id: &str, workspace_id: &str) -> Pipeline {
    Pipeline {
        id: id.to_owned(),
        display_name: format!("Pipeline {id}"),
        description: None,
        item_type: "DataPipeline".to_owned(),
        workspace_id: workspace_id.to_owned(),
        folder_id: None,
    }
}

async fn seeded(count: usize, page_size: usize) -> MemoryPlatform {
    let platform = MemoryPlatform::new(page_size);
    for index in 0..count {
        platform
            .seed_pipeline(pipeline(&format!("p-{index}"), "ws-1"))
            .await;
    }
    platform
}

#[test]
fn continuation_pair_travels_together() {
    let last = ListPipelinesResponse::last_page(vec![]);
    assert!(last.continuation_token.is_none());
    assert!(last.continuation_uri.is_none());
    assert!(!last.has_more());

    let next = ListPipelinesResponse::page_with_continuation(
        vec![],
        "2".into(),
        "/v1/pipelines?continuationToken=2".into(),
    );
    assert!(next.has_more());
    assert_eq!(
        next.continuation(),
        Some(("2", "/v1/pipelines?continuationToken=2"))
    );
}

#[test]
fn envelope_serialization_omits_absent_continuation() {
    let last = ListPipelinesResponse::last_page(vec![pipeline("p-0", "ws-1")]);
    let wire = serde_json::to_value(&last).expect("serialize");
    let map = wire.as_object().expect("object");
    assert!(map.contains_key("value"));
    assert!(!map.contains_key("continuationToken"));
    assert!(!map.contains_key("continuationUri"));
}

#[tokio::test]
async fn full_walk_visits_every_pipeline_exactly_once() {
    let platform = seeded(7, 3).await;

    let mut seen = Vec::new();
    let mut token: Option<String> = None;
    let mut pages = 0;
    loop {
        let page = platform
            .list_pipelines(Some("ws-1"), token.as_deref())
            .await
            .expect("page");
        pages += 1;
        seen.extend(page.value.iter().map(|p| p.id.clone()));
        match page.continuation() {
            Some((next, _uri)) => token = Some(next.to_owned()),
            None => break,
        }
    }

    assert_eq!(pages, 3, "7 items at page size 3");
    let expected: Vec<String> = (0..7).map(|i| format!("p-{i}")).collect();
    assert_eq!(seen, expected, "no duplicates, no gaps, stable order");
}

#[tokio::test]
async fn exact_multiple_of_page_size_ends_cleanly() {
    let platform = seeded(6, 3).await;

    let first = platform.list_pipelines(None, None).await.expect("page");
    assert_eq!(first.value.len(), 3);
    let (token, uri) = first.continuation().expect("more pages");
    assert!(uri.contains(token), "uri embeds the token");

    let second = platform
        .list_pipelines(None, Some(token))
        .await
        .expect("page");
    assert_eq!(second.value.len(), 3);
    assert!(!second.has_more(), "last full page carries no continuation");
}

#[tokio::test]
async fn single_short_page_has_no_continuation() {
    let platform = seeded(2, 10).await;
    let page = platform.list_pipelines(None, None).await.expect("page");
    assert_eq!(page.value.len(), 2);
    assert!(!page.has_more());
}

#[tokio::test]
async fn empty_store_yields_an_empty_last_page() {
    let platform = MemoryPlatform::new(5);
    let page = platform.list_pipelines(None, None).await.expect("page");
    assert!(page.value.is_empty());
    assert!(!page.has_more());
}

#[tokio::test]
async fn workspace_filter_applies_before_paging() {
    let platform = MemoryPlatform::new(2);
    for index in 0..3 {
        platform
            .seed_pipeline(pipeline(&format!("a-{index}"), "ws-a"))
            .await;
        platform
            .seed_pipeline(pipeline(&format!("b-{index}"), "ws-b"))
            .await;
    }

    let first = platform
        .list_pipelines(Some("ws-a"), None)
        .await
        .expect("page");
    assert_eq!(first.value.len(), 2);
    assert!(first.value.iter().all(|p| p.workspace_id == "ws-a"));

    let (token, _) = first.continuation().expect("more pages");
    let second = platform
        .list_pipelines(Some("ws-a"), Some(token))
        .await
        .expect("page");
    assert_eq!(second.value.len(), 1);
    assert!(!second.has_more());
}

#[tokio::test]
async fn garbage_continuation_token_is_rejected() {
    let platform = seeded(3, 2).await;
    let err = platform
        .list_pipelines(None, Some("not-a-token"))
        .await
        .expect_err("must fail");
    assert!(matches!(err, AppError::Platform(_)));
    assert!(err.to_string().contains("not-a-token"));
}

#[tokio::test]
async fn token_past_the_end_yields_an_empty_last_page() {
    let platform = seeded(3, 2).await;
    let page = platform
        .list_pipelines(None, Some("99"))
        .await
        .expect("page");
    assert!(page.value.is_empty());
    assert!(!page.has_more());
}

#[test]
fn info_projection_keeps_the_fixed_field_subset() {
    let mut full = pipeline("p-1", "ws-1");
    full.description = Some("nightly load".into());
    full.folder_id = Some("folder-1".into());

    let info = PipelineInfo::from(&full);
    assert_eq!(info.id, "p-1");
    assert_eq!(info.display_name, "Pipeline p-1");
    assert_eq!(info.item_type, "DataPipeline");
    assert_eq!(info.workspace_id, "ws-1");

    let wire = serde_json::to_value(&info).expect("serialize");
    let map = wire.as_object().expect("object");
    assert_eq!(map.len(), 4, "projection adds nothing beyond its fields");
    assert!(!map.contains_key("description"));
    assert!(!map.contains_key("folderId"));
}
