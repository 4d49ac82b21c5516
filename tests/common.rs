//! Common test utilities for building workflows and showcase content.
use serde_json::json;
use tiffin_flow::prelude::*;
use tiffin_flow::workflow::{ConnectionTarget, NodeConnections, WorkflowSettings};

#[allow(dead_code)]
pub fn node(id: &str, name: &str, node_type: &str) -> WorkflowNode {
    WorkflowNode {
        id: id.to_string(),
        name: name.to_string(),
        node_type: node_type.to_string(),
        type_version: 1.0,
        parameters: Default::default(),
    }
}

#[allow(dead_code)]
pub fn target(node: &str) -> ConnectionTarget {
    ConnectionTarget {
        node: node.to_string(),
        kind: "main".to_string(),
        index: 0,
    }
}

/// A small order workflow.
///
/// Flow: `Webhook -> (Lookup, Respond)`, `Lookup -> Respond`, `Respond` has an
/// empty output. Three nodes, three connections.
#[allow(dead_code)]
pub fn create_order_workflow() -> Workflow {
    let mut webhook = node("1", "Webhook", "n8n-nodes-base.webhook");
    webhook.type_version = 2.0;
    webhook.parameters.insert("httpMethod".to_string(), json!("POST"));
    webhook.parameters.insert("path".to_string(), json!("orders"));
    webhook.parameters.insert("options".to_string(), json!({}));

    let mut lookup = node("2", "Lookup", "n8n-nodes-base.httpRequest");
    lookup.type_version = 4.2;
    lookup
        .parameters
        .insert("headers".to_string(), json!(["a", "b"]));

    let respond = node("3", "Respond", "n8n-nodes-base.respondToWebhook");

    let mut workflow = Workflow {
        name: Some("Order Flow".to_string()),
        nodes: vec![webhook, lookup, respond],
        settings: Some(WorkflowSettings {
            timezone: Some("Asia/Kolkata".to_string()),
        }),
        ..Default::default()
    };
    workflow.connections.insert(
        "Webhook".to_string(),
        NodeConnections {
            main: vec![Some(vec![target("Lookup"), target("Respond")])],
        },
    );
    workflow.connections.insert(
        "Lookup".to_string(),
        NodeConnections {
            main: vec![Some(vec![target("Respond")]), None],
        },
    );
    workflow.connections.insert(
        "Respond".to_string(),
        NodeConnections {
            main: vec![Some(vec![])],
        },
    );
    workflow
}

/// Showcase content whose second stage names a node the workflow does not have.
#[allow(dead_code)]
pub fn create_showcase() -> Showcase {
    Showcase {
        eyebrow: "Tiffin · n8n".to_string(),
        headline: "Orders <fast>".to_string(),
        intro: "Import & go.".to_string(),
        highlights: vec![Highlight {
            title: "Real time".to_string(),
            body: "Orders arrive instantly.".to_string(),
        }],
        stages: vec![
            Stage {
                id: "intake".to_string(),
                title: "Intake".to_string(),
                description: "Receive orders.".to_string(),
                node_names: vec!["Webhook".to_string()],
            },
            Stage {
                id: "respond".to_string(),
                title: "Respond".to_string(),
                description: "Reply to the caller.".to_string(),
                node_names: vec![
                    "Respond".to_string(),
                    "Ghost Node".to_string(),
                    "Lookup".to_string(),
                ],
            },
        ],
        import_steps: vec!["Import the JSON.".to_string(), "Add credentials.".to_string()],
    }
}
