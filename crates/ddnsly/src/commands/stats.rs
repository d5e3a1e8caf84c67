//! Roster statistics command.

use ddnsly_core::{ClientRegistry, Statistics};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

fn detail(stats: &Statistics) -> String {
    let mut lines = vec![
        format!("Total clients:    {}", stats.total_clients),
        format!("Equipment types:  {}", stats.unique_equipments),
    ];

    if !stats.equipment_distribution.is_empty() {
        lines.push(String::new());
        lines.push("Distribution:".into());
        for entry in &stats.equipment_distribution {
            lines.push(format!("  {:<12}{}", entry.equipment.label(), entry.count));
        }
    }

    lines.join("\n")
}

// Result-shaped like every other handler, even though rendering can't fail.
#[allow(clippy::unnecessary_wraps)]
pub fn handle(registry: &ClientRegistry, global: &GlobalOpts) -> Result<(), CliError> {
    let stats = registry.statistics();
    let out = output::render_single(&global.output, &stats, detail, |s| {
        s.total_clients.to_string()
    });
    output::print_output(&out, global.quiet);
    Ok(())
}
