use crate::OutputFormat;
use agentlint_linter::{apply_edits, LintDiagnostic};
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

/// Fixes to apply to a single file
pub struct FileFix {
    /// The file path
    pub path: PathBuf,
    /// All diagnostics with fixes for this file
    pub diagnostics: Vec<LintDiagnostic>,
}

/// Collect the fixable diagnostics from per-file lint results
pub fn collect_file_fixes(results: &[(PathBuf, Vec<LintDiagnostic>)]) -> Vec<FileFix> {
    let mut fixes = Vec::new();
    for (path, diagnostics) in results {
        let fixable: Vec<LintDiagnostic> = diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.has_fix())
            .cloned()
            .collect();
        if !fixable.is_empty() {
            fixes.push(FileFix {
                path: path.clone(),
                diagnostics: fixable,
            });
        }
    }
    fixes
}

/// Display what would be fixed in dry-run mode
pub fn display_dry_run(fixes: &[FileFix], format: OutputFormat) {
    match format {
        OutputFormat::Human => {
            println!();
            println!("{}", "Dry run - would fix the following issues:".cyan());
            println!();

            for file_fix in fixes {
                println!("{}:", file_fix.path.display().to_string().bold());
                for diagnostic in &file_fix.diagnostics {
                    let Some(fix) = &diagnostic.fix else { continue };
                    println!(
                        "  {} {} ({})",
                        "→".green(),
                        fix.label,
                        diagnostic.rule.dimmed()
                    );
                }
                println!();
            }
        }
        OutputFormat::Json => {
            for file_fix in fixes {
                for diagnostic in &file_fix.diagnostics {
                    let Some(fix) = &diagnostic.fix else { continue };
                    println!(
                        "{}",
                        serde_json::json!({
                            "action": "would_fix",
                            "file": file_fix.path.to_string_lossy(),
                            "rule": diagnostic.rule,
                            "fix": fix.label,
                            "offset": fix.edit.offset_range.start,
                        })
                    );
                }
            }
        }
    }
}

/// Apply fixes to files
pub fn apply_fixes(fixes: &[FileFix], format: OutputFormat) -> Result<()> {
    for file_fix in fixes {
        apply_file_fixes(file_fix, format)?;
    }
    Ok(())
}

/// Apply all fixes to a single file
fn apply_file_fixes(file_fix: &FileFix, format: OutputFormat) -> Result<()> {
    let content = std::fs::read_to_string(&file_fix.path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_fix.path.display(), e))?;

    let fixed = apply_edits(&content, &file_fix.diagnostics);

    std::fs::write(&file_fix.path, &fixed)
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", file_fix.path.display(), e))?;

    match format {
        OutputFormat::Human => {
            println!(
                "{} {} ({})",
                "✓".green(),
                file_fix.path.display(),
                format!("{} fix(es)", file_fix.diagnostics.len()).dimmed()
            );
        }
        OutputFormat::Json => {
            for diagnostic in &file_fix.diagnostics {
                let Some(fix) = &diagnostic.fix else { continue };
                println!(
                    "{}",
                    serde_json::json!({
                        "action": "fixed",
                        "file": file_fix.path.to_string_lossy(),
                        "rule": diagnostic.rule,
                        "fix": fix.label,
                    })
                );
            }
        }
    }

    Ok(())
}
