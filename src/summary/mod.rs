//! Display-ready aggregates over a workflow export.
//!
//! Everything here is a pure function of the workflow and showcase content: the same
//! inputs always produce the same summary.

use crate::showcase::{Highlight, Showcase, Stage};
use crate::workflow::Workflow;
use serde::Serialize;

pub mod catalog;
pub mod index;
pub mod label;

pub use catalog::{NodeCard, ParameterPreview};
pub use index::NodeIndex;
pub use label::{DEFAULT_NAMESPACE_PREFIX, LabelFormatter, format_type_label};

/// Timezone shown when the workflow settings do not name one.
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Number of parameters previewed on each node card.
pub const DEFAULT_PARAMETER_PREVIEW_LIMIT: usize = 4;

/// Number of nodes in the workflow.
pub fn count_nodes(workflow: &Workflow) -> usize {
    workflow.nodes.len()
}

/// Number of directed edges across every source node's `main` outputs.
pub fn count_connections(workflow: &Workflow) -> usize {
    workflow
        .connections
        .values()
        .map(|outputs| outputs.edge_count())
        .sum()
}

/// A stage member that resolved to a node of the workflow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageEntry {
    pub name: String,
    pub type_label: String,
}

/// A stage with its members resolved against the workflow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub entries: Vec<StageEntry>,
}

/// Resolves a stage's node names in authored order, dropping names the index
/// does not know.
pub fn build_stage_view(
    stage: &Stage,
    index: &NodeIndex<'_>,
    labels: &LabelFormatter,
) -> Vec<StageEntry> {
    stage
        .node_names
        .iter()
        .filter_map(|name| match index.lookup(name) {
            Some(node) => Some(StageEntry {
                name: name.clone(),
                type_label: labels.format(&node.node_type),
            }),
            None => {
                log::debug!(
                    "Stage '{}' references unknown node '{}', skipping",
                    stage.id,
                    name
                );
                None
            }
        })
        .collect()
}

/// Everything the page needs, computed once per render.
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowSummary {
    pub workflow_name: Option<String>,
    pub node_count: usize,
    pub connection_count: usize,
    pub timezone: String,
    pub eyebrow: String,
    pub headline: String,
    pub intro: String,
    pub highlights: Vec<Highlight>,
    pub stages: Vec<StageView>,
    pub catalog: Vec<NodeCard>,
    pub import_steps: Vec<String>,
}

/// Computes [`WorkflowSummary`] values with a fixed label and fallback configuration.
#[derive(Debug, Clone)]
pub struct Summarizer {
    labels: LabelFormatter,
    default_timezone: String,
    parameter_preview_limit: usize,
}

pub struct SummarizerBuilder {
    labels: LabelFormatter,
    default_timezone: String,
    parameter_preview_limit: usize,
}

impl Default for SummarizerBuilder {
    fn default() -> Self {
        Self {
            labels: LabelFormatter::default(),
            default_timezone: DEFAULT_TIMEZONE.to_string(),
            parameter_preview_limit: DEFAULT_PARAMETER_PREVIEW_LIMIT,
        }
    }
}

impl SummarizerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the namespace prefixes stripped from node types.
    pub fn with_labels(mut self, labels: LabelFormatter) -> Self {
        self.labels = labels;
        self
    }

    /// Strips an additional namespace prefix from node types.
    pub fn with_namespace_prefix(mut self, prefix: &str) -> Self {
        self.labels.add_prefix(prefix);
        self
    }

    pub fn with_default_timezone(mut self, timezone: &str) -> Self {
        self.default_timezone = timezone.to_string();
        self
    }

    pub fn with_parameter_preview_limit(mut self, limit: usize) -> Self {
        self.parameter_preview_limit = limit;
        self
    }

    pub fn build(self) -> Summarizer {
        Summarizer {
            labels: self.labels,
            default_timezone: self.default_timezone,
            parameter_preview_limit: self.parameter_preview_limit,
        }
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        SummarizerBuilder::default().build()
    }
}

impl Summarizer {
    pub fn builder() -> SummarizerBuilder {
        SummarizerBuilder::new()
    }

    pub fn labels(&self) -> &LabelFormatter {
        &self.labels
    }

    /// The workflow's timezone, or the configured default when unset.
    pub fn timezone(&self, workflow: &Workflow) -> String {
        workflow
            .timezone()
            .unwrap_or(self.default_timezone.as_str())
            .to_string()
    }

    /// Resolves every stage against the workflow, keeping stage order.
    pub fn stage_views(&self, workflow: &Workflow, stages: &[Stage]) -> Vec<StageView> {
        let index = NodeIndex::new(workflow);
        stages
            .iter()
            .map(|stage| StageView {
                id: stage.id.clone(),
                title: stage.title.clone(),
                description: stage.description.clone(),
                entries: build_stage_view(stage, &index, &self.labels),
            })
            .collect()
    }

    /// One card per node, in document order.
    pub fn node_catalog(&self, workflow: &Workflow) -> Vec<NodeCard> {
        workflow
            .nodes
            .iter()
            .map(|node| NodeCard::build(node, &self.labels, self.parameter_preview_limit))
            .collect()
    }

    pub fn summarize(&self, workflow: &Workflow, showcase: &Showcase) -> WorkflowSummary {
        let summary = WorkflowSummary {
            workflow_name: workflow.name.clone(),
            node_count: count_nodes(workflow),
            connection_count: count_connections(workflow),
            timezone: self.timezone(workflow),
            eyebrow: showcase.eyebrow.clone(),
            headline: showcase.headline.clone(),
            intro: showcase.intro.clone(),
            highlights: showcase.highlights.clone(),
            stages: self.stage_views(workflow, &showcase.stages),
            catalog: self.node_catalog(workflow),
            import_steps: showcase.import_steps.clone(),
        };
        log::debug!(
            "Summarized workflow: {} nodes, {} connections, {} stages",
            summary.node_count,
            summary.connection_count,
            summary.stages.len()
        );
        summary
    }
}
