use crate::summary::WorkflowSummary;
use itertools::Itertools;
use std::fmt::Write;

/// Formats a [`WorkflowSummary`] as a plain-text report for the terminal.
pub struct TextReport;

impl TextReport {
    pub fn format(summary: &WorkflowSummary) -> String {
        let mut output = String::new();
        let name = summary.workflow_name.as_deref().unwrap_or("Untitled workflow");

        writeln!(&mut output, "======== {} ========", name).unwrap();
        writeln!(&mut output, "Nodes:       {}", summary.node_count).unwrap();
        writeln!(&mut output, "Connections: {}", summary.connection_count).unwrap();
        writeln!(&mut output, "Timezone:    {}", summary.timezone).unwrap();

        if !summary.stages.is_empty() {
            writeln!(&mut output, "\n--- STAGES ---").unwrap();
            for stage in &summary.stages {
                writeln!(&mut output, "\n[{}] {}", stage.id, stage.title).unwrap();
                let members = stage
                    .entries
                    .iter()
                    .map(|entry| format!("{} ({})", entry.name, entry.type_label))
                    .join(" -> ");
                if members.is_empty() {
                    writeln!(&mut output, "  (no known nodes)").unwrap();
                } else {
                    writeln!(&mut output, "  {}", members).unwrap();
                }
            }
        }

        if !summary.catalog.is_empty() {
            writeln!(&mut output, "\n--- NODE CATALOG ---").unwrap();
            for card in &summary.catalog {
                writeln!(
                    &mut output,
                    "#{:<4} {:<28} {:<24} {}",
                    card.id, card.name, card.type_label, card.version
                )
                .unwrap();
            }
        }

        output
    }
}
