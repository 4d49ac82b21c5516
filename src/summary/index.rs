use crate::workflow::{Workflow, WorkflowNode};
use ahash::AHashMap;

/// Name-keyed view over a workflow's nodes, built once per summary.
///
/// Node names are unique in a well-formed export. If a name does repeat, the node
/// that appears last in the document wins.
#[derive(Debug)]
pub struct NodeIndex<'a> {
    by_name: AHashMap<&'a str, &'a WorkflowNode>,
}

impl<'a> NodeIndex<'a> {
    pub fn new(workflow: &'a Workflow) -> Self {
        let by_name = workflow
            .nodes
            .iter()
            .map(|node| (node.name.as_str(), node))
            .collect();
        Self { by_name }
    }

    /// Looks a node up by name. A miss is an ordinary outcome, not an error.
    pub fn lookup(&self, name: &str) -> Option<&'a WorkflowNode> {
        self.by_name.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, name: &str) -> WorkflowNode {
        WorkflowNode {
            id: id.to_string(),
            name: name.to_string(),
            node_type: "n8n-nodes-base.noOp".to_string(),
            type_version: 1.0,
            parameters: Default::default(),
        }
    }

    #[test]
    fn lookup_hits_and_misses() {
        let workflow = Workflow {
            nodes: vec![node("1", "Start"), node("2", "End")],
            ..Default::default()
        };
        let index = NodeIndex::new(&workflow);
        assert_eq!(index.lookup("End").map(|n| n.id.as_str()), Some("2"));
        assert!(index.lookup("Missing").is_none());
    }

    #[test]
    fn last_duplicate_wins() {
        let workflow = Workflow {
            nodes: vec![node("1", "Twin"), node("2", "Twin")],
            ..Default::default()
        };
        let index = NodeIndex::new(&workflow);
        assert_eq!(index.lookup("Twin").map(|n| n.id.as_str()), Some("2"));
    }
}
