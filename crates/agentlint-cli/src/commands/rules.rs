use crate::OutputFormat;
use agentlint_linter::{element_rules, guarded_element_rules, Severity};
use colored::Colorize;

/// Print every registered rule with its default severity and description.
pub fn run(format: OutputFormat) {
    let mut rows: Vec<(&'static str, &'static str, Severity)> = Vec::new();
    for rule in element_rules() {
        rows.push((rule.name(), rule.description(), rule.default_severity()));
    }
    for rule in guarded_element_rules() {
        rows.push((rule.name(), rule.description(), rule.default_severity()));
    }

    match format {
        OutputFormat::Human => {
            for (name, description, severity) in &rows {
                println!(
                    "{}  {}\n    {}",
                    name.bold(),
                    format!("[{severity}]").dimmed(),
                    description
                );
            }
        }
        OutputFormat::Json => {
            let listing: Vec<serde_json::Value> = rows
                .iter()
                .map(|(name, description, severity)| {
                    serde_json::json!({
                        "name": name,
                        "description": description,
                        "default_severity": severity.to_string(),
                    })
                })
                .collect();
            println!("{}", serde_json::json!({ "rules": listing }));
        }
    }
}
