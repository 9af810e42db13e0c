//! Tests that the server advertisement mirrors the composed registry.

use fabric_mcp::mcp::handler::FabricServer;
use fabric_mcp::registry::Transport;
use fabric_mcp::services::memory::MemoryPlatform;

use super::test_helpers::app_state;

#[test]
fn advertisement_mirrors_the_registry_exactly() {
    let state = app_state(MemoryPlatform::new(50), &[], Transport::Stdio);
    let server = FabricServer::new(state);

    let advertised = server.advertised_tools();
    let registry = server.state().registry.clone();
    assert_eq!(advertised.len(), registry.len());
    for (tool, descriptor) in advertised.iter().zip(registry.tools()) {
        assert_eq!(tool.name.as_ref(), descriptor.name);
        assert_eq!(
            tool.description.as_deref(),
            Some(descriptor.description.as_str())
        );
    }
}

#[test]
fn advertisement_is_identical_across_calls() {
    let state = app_state(
        MemoryPlatform::new(50),
        &["--dataflow-query"],
        Transport::Http,
    );
    let server = FabricServer::new(state);

    let first: Vec<String> = server
        .advertised_tools()
        .iter()
        .map(|tool| tool.name.to_string())
        .collect();
    let second: Vec<String> = server
        .advertised_tools()
        .iter()
        .map(|tool| tool.name.to_string())
        .collect();
    assert_eq!(first, second);
}

#[test]
fn gated_tools_appear_only_when_their_flag_is_active() {
    let names = |switches: &[&str], transport| {
        let state = app_state(MemoryPlatform::new(50), switches, transport);
        FabricServer::new(state)
            .advertised_tools()
            .iter()
            .map(|tool| tool.name.to_string())
            .collect::<Vec<_>>()
    };

    let plain = names(&[], Transport::Stdio);
    assert!(!plain.contains(&"list_dataflows".to_owned()));
    assert!(!plain.contains(&"device_code_login".to_owned()));

    let flagged = names(&["--dataflow-query", "--device-code-auth"], Transport::Stdio);
    assert!(flagged.contains(&"list_dataflows".to_owned()));
    assert!(flagged.contains(&"query_dataflow".to_owned()));
    assert!(flagged.contains(&"device_code_login".to_owned()));

    let http = names(&["--dataflow-query", "--device-code-auth"], Transport::Http);
    assert!(http.contains(&"query_dataflow".to_owned()));
    assert!(!http.contains(&"device_code_login".to_owned()));
}

#[test]
fn advertised_schemas_are_object_schemas() {
    let state = app_state(
        MemoryPlatform::new(50),
        &["--dataflow-query", "--device-code-auth"],
        Transport::Stdio,
    );
    let server = FabricServer::new(state);

    for tool in server.advertised_tools() {
        assert_eq!(
            tool.input_schema.get("type").and_then(|v| v.as_str()),
            Some("object"),
            "tool {} schema",
            tool.name
        );
    }
}
