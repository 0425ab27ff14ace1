use colored::Colorize;
use tagsight_core::report::ScanReport;

/// Format a report with terminal colors.
pub fn format_pretty(report: &ScanReport) -> String {
    let mut out = String::new();

    if let Some(ref path) = report.metadata.file_path {
        out.push_str(&format!("{} {}\n", "File:".bold(), path.display()));
    }
    out.push_str(&format!(
        "{} {} | {} {}\n",
        "Elements:".dimmed(),
        report.metadata.element_count,
        "Lines:".dimmed(),
        report.metadata.lines_of_code,
    ));

    for element in &report.elements {
        out.push('\n');
        let tag = format!("<{}>", element.tag_name);
        out.push_str(&format!("{}", tag.cyan().bold()));
        if let Some(ref class_name) = element.class_name {
            out.push_str(&format!(" {}", class_name.bold()));
        }
        if let Some(ref super_class) = element.super_class {
            out.push_str(&format!(" {} {}", "extends".dimmed(), super_class));
        }
        out.push_str(&format!(
            "  {}\n",
            format!("(line {})", element.source_location.line).dimmed()
        ));

        if let Some(ref description) = element.description {
            out.push_str(&format!("  {description}\n"));
        }
        for attribute in &element.attributes {
            out.push_str(&format!("  {}", format!("[{}]", attribute.name).yellow()));
            if let Some(ref type_name) = attribute.type_name {
                out.push_str(&format!(" {}", type_name.green()));
            }
            if let Some(ref description) = attribute.description {
                out.push_str(&format!(" — {description}"));
            }
            out.push('\n');
        }
    }

    out
}

pub use tagsight_core::output::{format_json, format_text};
