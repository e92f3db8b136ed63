use crate::commands::fix::{apply_fixes, collect_file_fixes, display_dry_run};
use crate::config_file;
use crate::OutputFormat;
use agentlint_linter::{LintDiagnostic, Linter, Severity};
use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// File extensions the walker considers markup sources
const MARKUP_EXTENSIONS: &[&str] = &["jsx", "tsx", "js", "ts"];

pub fn run(
    config_path: Option<PathBuf>,
    paths: &[PathBuf],
    format: OutputFormat,
    fix: bool,
    fix_dry_run: bool,
) -> Result<i32> {
    let start_time = std::time::Instant::now();

    let (config, config_source) = config_file::resolve_config(config_path.as_deref())?;
    if let (Some(path), OutputFormat::Human) = (&config_source, format) {
        println!("{}", format!("Using config {}", path.display()).dimmed());
    }

    let linter = Linter::new(config);
    let files = discover_files(paths);
    if files.is_empty() {
        if matches!(format, OutputFormat::Human) {
            println!("{}", "No markup files found".yellow());
        }
        return Ok(0);
    }
    tracing::debug!(files = files.len(), "Linting files");

    let mut file_results = lint_files(&linter, &files);

    if fix || fix_dry_run {
        let fixes = collect_file_fixes(&file_results);
        if fix_dry_run {
            display_dry_run(&fixes, format);
            report(&file_results, format, start_time);
            return Ok(exit_code(&file_results));
        }
        if !fixes.is_empty() {
            apply_fixes(&fixes, format)?;
            // Re-lint so the report reflects the fixed sources. Fix
            // application is idempotent, so this is safe.
            file_results = lint_files(&linter, &files);
        }
    }

    report(&file_results, format, start_time);
    Ok(exit_code(&file_results))
}

fn lint_files(linter: &Linter, files: &[PathBuf]) -> Vec<(PathBuf, Vec<LintDiagnostic>)> {
    let mut results = Vec::new();
    for path in files {
        let source = match std::fs::read_to_string(path) {
            Ok(source) => source,
            Err(err) => {
                eprintln!("{}: {err}", path.display());
                continue;
            }
        };
        let diagnostics = linter.lint_source(&source, &path.to_string_lossy());
        if !diagnostics.is_empty() {
            results.push((path.clone(), diagnostics));
        }
    }
    results
}

/// Collect markup files from the given paths. Explicit files are taken as
/// given; directories are walked with gitignore rules applied.
fn discover_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            files.push(path.clone());
            continue;
        }
        for entry in ignore::WalkBuilder::new(path).build().flatten() {
            let entry_path = entry.path();
            if entry_path.is_file() && has_markup_extension(entry_path) {
                files.push(entry_path.to_path_buf());
            }
        }
    }
    files.sort();
    files.dedup();
    files
}

fn has_markup_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| MARKUP_EXTENSIONS.contains(&ext))
}

fn exit_code(results: &[(PathBuf, Vec<LintDiagnostic>)]) -> i32 {
    let has_errors = results
        .iter()
        .flat_map(|(_, diagnostics)| diagnostics)
        .any(|diagnostic| diagnostic.severity == Severity::Error);
    i32::from(has_errors)
}

fn report(
    results: &[(PathBuf, Vec<LintDiagnostic>)],
    format: OutputFormat,
    start_time: std::time::Instant,
) {
    let total: usize = results.iter().map(|(_, d)| d.len()).sum();
    let errors: usize = results
        .iter()
        .flat_map(|(_, d)| d)
        .filter(|d| d.severity == Severity::Error)
        .count();
    let warnings = total - errors;

    match format {
        OutputFormat::Human => {
            for (path, diagnostics) in results {
                println!();
                println!("{}", path.display().to_string().bold().underline());
                for diagnostic in diagnostics {
                    let severity = match diagnostic.severity {
                        Severity::Error => "error".red().bold(),
                        Severity::Warning => "warning".yellow().bold(),
                    };
                    let fixable = if diagnostic.has_fix() {
                        " (fixable)".green().to_string()
                    } else {
                        String::new()
                    };
                    println!(
                        "  {}..{}  {severity}  {}  {}{fixable}",
                        diagnostic.span.start,
                        diagnostic.span.end,
                        diagnostic.message,
                        diagnostic.rule.dimmed(),
                    );
                }
            }
            println!();
            let summary = format!(
                "{total} problem(s) ({errors} error(s), {warnings} warning(s))"
            );
            if errors > 0 {
                println!("{}", summary.red().bold());
            } else if warnings > 0 {
                println!("{}", summary.yellow().bold());
            } else {
                println!("{}", "No problems found".green().bold());
            }
            println!(
                "{}",
                format!("Finished in {:.1?}", start_time.elapsed()).dimmed()
            );
        }
        OutputFormat::Json => {
            let diagnostics: Vec<serde_json::Value> = results
                .iter()
                .flat_map(|(path, diagnostics)| {
                    diagnostics.iter().map(move |diagnostic| {
                        serde_json::json!({
                            "file": path.to_string_lossy(),
                            "rule": diagnostic.rule,
                            "message_id": diagnostic.message_id,
                            "message": diagnostic.message,
                            "data": diagnostic.data,
                            "severity": diagnostic.severity.to_string(),
                            "offset_start": diagnostic.span.start,
                            "offset_end": diagnostic.span.end,
                            "fixable": diagnostic.has_fix(),
                        })
                    })
                })
                .collect();
            let output = serde_json::json!({
                "diagnostics": diagnostics,
                "summary": { "total": total, "errors": errors, "warnings": warnings },
            });
            println!("{output}");
        }
    }
}
