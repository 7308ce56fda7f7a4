use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};

use crate::models::InstanceSummary;

/// Missing values are dashed out here, at render time only.
fn cell(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

/// Build the three-column instance table. Row order follows the input; the
/// table does no sorting of its own.
pub fn instance_table(instances: &[InstanceSummary]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w - 4);
    }
    table.set_header(vec!["Instance ID", "Instance Type", "Image ID"]);
    for instance in instances {
        table.add_row(vec![
            cell(&instance.id),
            cell(&instance.instance_type),
            cell(&instance.image_id),
        ]);
    }
    table
}
