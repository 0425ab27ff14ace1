use std::path::PathBuf;

use anyhow::{Context, Result};
use walkdir::WalkDir;

use tagsight_core::output::OutputFormat;
use tagsight_core::report::ScanReport;

use crate::output;

pub fn collect_files(path: &PathBuf) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.clone()]);
    }

    let supported_exts = ["js", "mjs"];
    let mut files = Vec::new();
    for entry in WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let p = entry.path();
        if p.extension()
            .and_then(|e| e.to_str())
            .map(|e| supported_exts.contains(&e))
            .unwrap_or(false)
        {
            files.push(p.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

pub fn parse_format(s: &str) -> Result<OutputFormat> {
    match s {
        "pretty" => Ok(OutputFormat::Pretty),
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => anyhow::bail!("unknown format: {other} (expected pretty, text, or json)"),
    }
}

pub fn format_report(report: &ScanReport, fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => output::format_json(report),
        OutputFormat::Text => output::format_text(report),
        OutputFormat::Pretty => output::format_pretty(report),
    }
}

pub fn run(
    path: &PathBuf,
    format: &str,
    no_cache: bool,
    assert_defined: Option<Vec<String>>,
) -> Result<()> {
    let fmt = parse_format(format)?;

    let files = collect_files(path).context("failed to collect files")?;

    if files.is_empty() {
        anyhow::bail!("no JavaScript source files found in {}", path.display());
    }

    let scan_fn: fn(&std::path::Path) -> Result<ScanReport> = if no_cache {
        tagsight_core::scan_file_no_cache
    } else {
        tagsight_core::scan_file
    };
    let reports: Vec<ScanReport> = files
        .iter()
        .map(|f| scan_fn(f))
        .collect::<Result<Vec<_>>>()
        .context("failed to scan files")?;

    if fmt == OutputFormat::Json && reports.len() > 1 {
        let json = serde_json::to_string_pretty(&reports)?;
        println!("{json}");
    } else {
        for report in &reports {
            println!("{}", format_report(report, fmt));
        }
    }

    if let Some(ref expected) = assert_defined {
        let defined: Vec<&str> = reports
            .iter()
            .flat_map(|r| r.elements.iter())
            .map(|e| e.tag_name.as_str())
            .collect();
        let missing: Vec<&String> = expected
            .iter()
            .filter(|tag| !defined.contains(&tag.as_str()))
            .collect();
        if !missing.is_empty() {
            eprintln!("\n--- TAGSIGHT FAILED ---");
            for tag in &missing {
                eprintln!("  <{}> is not defined anywhere in {}", tag, path.display());
            }
            std::process::exit(1);
        } else {
            eprintln!("\nAll expected custom elements are defined.");
        }
    }

    Ok(())
}
