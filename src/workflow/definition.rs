use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// An n8n workflow export: the nodes, the connections between them, and settings.
///
/// Every collection is defaulted so a partially-authored export still loads; counts
/// over a missing or `null` node list or connection map are simply zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Workflow {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nodes: Vec<WorkflowNode>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub connections: BTreeMap<String, NodeConnections>,
    #[serde(default)]
    pub settings: Option<WorkflowSettings>,
}

/// A single configured step of the workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowNode {
    /// Older exports omit the id or write it as a number; both become a string.
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(rename = "typeVersion", default = "default_type_version")]
    pub type_version: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub parameters: serde_json::Map<String, serde_json::Value>,
}

fn default_type_version() -> f64 {
    1.0
}

/// Reads `null` the same way as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNodeId {
    Text(String),
    Number(serde_json::Number),
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawNodeId>::deserialize(deserializer)? {
        Some(RawNodeId::Text(id)) => id,
        Some(RawNodeId::Number(id)) => id.to_string(),
        None => String::new(),
    })
}

/// The outgoing edges of one source node.
///
/// `main` holds one slot per output handle. n8n writes `null` for an output with
/// nothing attached, which is kept as `None` and counts as zero edges.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeConnections {
    #[serde(default, deserialize_with = "null_as_default")]
    pub main: Vec<Option<Vec<ConnectionTarget>>>,
}

impl NodeConnections {
    /// Number of target edges across every output slot.
    pub fn edge_count(&self) -> usize {
        self.main.iter().flatten().map(Vec::len).sum()
    }
}

/// The receiving end of a connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionTarget {
    pub node: String,
    #[serde(rename = "type", default = "default_connection_kind")]
    pub kind: String,
    #[serde(default)]
    pub index: u32,
}

fn default_connection_kind() -> String {
    "main".to_string()
}

/// Optional workflow-level settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkflowSettings {
    #[serde(default)]
    pub timezone: Option<String>,
}

impl Workflow {
    /// The configured timezone, if the export carries one.
    pub fn timezone(&self) -> Option<&str> {
        self.settings
            .as_ref()
            .and_then(|settings| settings.timezone.as_deref())
    }
}
