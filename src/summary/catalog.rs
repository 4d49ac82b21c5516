use super::label::LabelFormatter;
use crate::workflow::WorkflowNode;
use serde::Serialize;
use serde_json::Value;

/// One entry of the node catalog section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeCard {
    pub id: String,
    pub name: String,
    pub type_label: String,
    pub version: String,
    pub parameters: Vec<ParameterPreview>,
}

/// A single `key: value` line shown on a node card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterPreview {
    pub key: String,
    pub value: String,
}

impl NodeCard {
    /// Builds the card for `node`, previewing at most `preview_limit` parameters in
    /// authored order.
    pub fn build(node: &WorkflowNode, labels: &LabelFormatter, preview_limit: usize) -> Self {
        let parameters = node
            .parameters
            .iter()
            .take(preview_limit)
            .map(|(key, value)| ParameterPreview {
                key: key.clone(),
                value: preview_value(value),
            })
            .collect();

        Self {
            id: node.id.clone(),
            name: node.name.clone(),
            type_label: labels.format(&node.node_type),
            version: format_version(node.type_version),
            parameters,
        }
    }
}

/// Short textual form of a parameter value.
///
/// Arrays collapse to their length; objects and `null` only show that something is
/// configured.
pub fn preview_value(value: &Value) -> String {
    match value {
        Value::Array(items) => items.len().to_string(),
        Value::Object(_) | Value::Null => "set".to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        // serde_json prints whole floats as `2.0`; f64's Display prints `2`.
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => f.to_string(),
            _ => n.to_string(),
        },
    }
}

/// Formats a node's type version, e.g. `v1` or `v4.2`.
pub fn format_version(type_version: f64) -> String {
    format!("v{}", type_version)
}
