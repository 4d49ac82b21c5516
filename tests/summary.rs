//! Tests for counting, label formatting, and stage resolution.
mod common;
use common::*;
use tiffin_flow::prelude::*;
use tiffin_flow::workflow::NodeConnections;

#[test]
fn test_count_nodes_matches_node_list() {
    let workflow = create_order_workflow();
    assert_eq!(count_nodes(&workflow), 3);
    assert_eq!(count_nodes(&Workflow::default()), 0);
}

#[test]
fn test_count_connections_sums_every_output() {
    let workflow = create_order_workflow();
    assert_eq!(count_connections(&workflow), 3);
}

#[test]
fn test_count_connections_a_bc_d_empty() {
    let mut workflow = Workflow::default();
    workflow.connections.insert(
        "A".to_string(),
        NodeConnections {
            main: vec![Some(vec![target("B"), target("C")])],
        },
    );
    workflow.connections.insert(
        "D".to_string(),
        NodeConnections {
            main: vec![Some(vec![])],
        },
    );
    assert_eq!(count_connections(&workflow), 2);
}

#[test]
fn test_counts_from_json_with_missing_sections() {
    let workflow: Workflow = serde_json::from_str(r#"{ "settings": {} }"#).unwrap();
    assert_eq!(count_nodes(&workflow), 0);
    assert_eq!(count_connections(&workflow), 0);
}

#[test]
fn test_counts_from_null_sections() {
    let asset = WorkflowAsset::from_bytes(br#"{"nodes":null,"connections":null}"#.to_vec())
        .expect("null sections should load");
    assert_eq!(count_nodes(asset.workflow()), 0);
    assert_eq!(count_connections(asset.workflow()), 0);
}

#[test]
fn test_counts_ignore_non_main_connections() {
    let workflow: Workflow = serde_json::from_str(
        r#"{
            "nodes": [],
            "connections": {
                "Agent": {
                    "main": [[{ "node": "Reply", "type": "main", "index": 0 }]],
                    "ai_tool": [[{ "node": "Tool", "type": "ai_tool", "index": 0 }]]
                }
            }
        }"#,
    )
    .unwrap();
    assert_eq!(count_connections(&workflow), 1);
}

#[test]
fn test_format_type_label_examples() {
    assert_eq!(format_type_label("n8n-nodes-base.httpRequest"), "Http Request");
    assert_eq!(format_type_label("n8n-nodes-base.set"), "Set");
    assert_eq!(format_type_label("n8n-nodes-base.emailSend"), "Email Send");
}

#[test]
fn test_stage_view_skips_unknown_and_keeps_order() {
    let workflow = create_order_workflow();
    let showcase = create_showcase();
    let index = NodeIndex::new(&workflow);

    let entries = build_stage_view(&showcase.stages[1], &index, &LabelFormatter::default());
    let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Respond", "Lookup"]);
    assert_eq!(entries[0].type_label, "Respond To Webhook");
    assert_eq!(entries[1].type_label, "Http Request");
}

#[test]
fn test_stage_of_only_unknown_names_is_empty() {
    let workflow = create_order_workflow();
    let index = NodeIndex::new(&workflow);
    let stage = Stage {
        id: "ghosts".to_string(),
        title: "Ghosts".to_string(),
        description: String::new(),
        node_names: vec!["Nope".to_string(), "Also nope".to_string()],
    };
    assert!(build_stage_view(&stage, &index, &LabelFormatter::default()).is_empty());
}

#[test]
fn test_summarize_collects_everything() {
    let workflow = create_order_workflow();
    let showcase = create_showcase();
    let summary = Summarizer::default().summarize(&workflow, &showcase);

    assert_eq!(summary.node_count, 3);
    assert_eq!(summary.connection_count, 3);
    assert_eq!(summary.timezone, "Asia/Kolkata");
    assert_eq!(summary.stages.len(), 2);
    assert_eq!(summary.stages[1].entries.len(), 2);
    assert_eq!(summary.catalog.len(), 3);

    let webhook = &summary.catalog[0];
    assert_eq!(webhook.version, "v2");
    assert_eq!(webhook.type_label, "Webhook");
    let previews: Vec<_> = webhook
        .parameters
        .iter()
        .map(|p| (p.key.as_str(), p.value.as_str()))
        .collect();
    assert_eq!(
        previews,
        vec![("httpMethod", "POST"), ("path", "orders"), ("options", "set")]
    );

    let lookup = &summary.catalog[1];
    assert_eq!(lookup.version, "v4.2");
    assert_eq!(lookup.parameters[0].value, "2");
}

#[test]
fn test_summarize_is_deterministic() {
    let workflow = create_order_workflow();
    let showcase = create_showcase();
    let summarizer = Summarizer::default();

    let first = summarizer.summarize(&workflow, &showcase);
    let second = summarizer.summarize(&workflow, &showcase);
    assert_eq!(first.stages, second.stages);
    assert_eq!(first.catalog, second.catalog);
    assert_eq!(first.connection_count, second.connection_count);
}

#[test]
fn test_summarizer_with_extra_namespace() {
    let mut workflow = create_order_workflow();
    workflow.nodes[2].node_type = "@n8n/n8n-nodes-langchain.agent".to_string();

    let summarizer = Summarizer::builder()
        .with_namespace_prefix("@n8n/n8n-nodes-langchain.")
        .build();
    let catalog = summarizer.node_catalog(&workflow);
    assert_eq!(catalog[2].type_label, "Agent");
}
