//! Terminal status table for CI runs.
//!
//! This module uses a bare table style: no box borders, a light dash rule
//! under the header and a colon accent between columns.

use crate::task::{Classification, TaskOutcome};
use comfy_table::{Cell, Color, ContentArrangement, Table, TableComponent};

/// Build the per-task status table for a finished run.
pub fn render_status_table(outcomes: &[TaskOutcome]) -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::NOTHING);
    table.set_style(TableComponent::HeaderLines, '-');
    table.set_style(TableComponent::VerticalLines, ':');
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Task").fg(Color::Cyan),
        Cell::new("Status").fg(Color::Cyan),
        Cell::new("Exit").fg(Color::Cyan),
        Cell::new("Time").fg(Color::Cyan),
    ]);

    for outcome in outcomes {
        let (word, color) = match outcome.classification {
            Classification::Passed => ("passed", Color::Green),
            Classification::Benign => ("passed", Color::Yellow),
            Classification::Failed => ("failed", Color::Red),
        };

        table.add_row(vec![
            Cell::new(&outcome.task),
            Cell::new(word).fg(color),
            Cell::new(outcome.exit_code),
            Cell::new(format!("{}ms", outcome.duration_ms)),
        ]);
    }

    table
}
