use crate::report::ScanReport;

/// Output format for CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Text,
    Json,
}

/// Format a report as JSON.
pub fn format_json(report: &ScanReport) -> String {
    serde_json::to_string_pretty(report).expect("report should be serializable")
}

/// Format a report as plain text (no colors).
pub fn format_text(report: &ScanReport) -> String {
    let mut out = String::new();

    if let Some(ref path) = report.metadata.file_path {
        out.push_str(&format!("File: {}\n", path.display()));
    }
    out.push_str(&format!(
        "Elements: {} | Lines: {}\n",
        report.metadata.element_count, report.metadata.lines_of_code
    ));

    for element in &report.elements {
        out.push('\n');
        let class_name = element.class_name.as_deref().unwrap_or("(anonymous)");
        out.push_str(&format!("<{}>  {}", element.tag_name, class_name));
        if let Some(ref super_class) = element.super_class {
            out.push_str(&format!(" extends {super_class}"));
        }
        out.push_str(&format!("  (line {})\n", element.source_location.line));

        if let Some(ref description) = element.description {
            out.push_str(&format!("  {description}\n"));
        }
        for attribute in &element.attributes {
            out.push_str(&format!("  [{}]", attribute.name));
            if let Some(ref type_name) = attribute.type_name {
                out.push_str(&format!(" {type_name}"));
            }
            if let Some(ref description) = attribute.description {
                out.push_str(&format!(" — {description}"));
            }
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{AttributeDescriptor, ElementDescriptor, SourceLocation};
    use crate::report::ScanMetadata;
    use std::path::PathBuf;

    fn make_report(with_path: bool, with_attributes: bool) -> ScanReport {
        let attributes = if with_attributes {
            vec![AttributeDescriptor {
                name: "disabled".to_string(),
                type_name: Some("boolean".to_string()),
                description: Some("Disables the element".to_string()),
                source_location: SourceLocation { line: 4, column: 6 },
            }]
        } else {
            vec![]
        };
        ScanReport {
            elements: vec![ElementDescriptor {
                tag_name: "my-element".to_string(),
                class_name: Some("MyElement".to_string()),
                super_class: Some("HTMLElement".to_string()),
                description: Some("A test element.".to_string()),
                attributes,
                source_location: SourceLocation { line: 2, column: 0 },
            }],
            metadata: ScanMetadata {
                file_path: if with_path {
                    Some(PathBuf::from("src/my-element.js"))
                } else {
                    None
                },
                lines_of_code: 12,
                element_count: 1,
            },
        }
    }

    #[test]
    fn format_text_lists_elements() {
        let out = format_text(&make_report(false, false));
        assert!(out.contains("<my-element>"));
        assert!(out.contains("MyElement extends HTMLElement"));
        assert!(out.contains("(line 2)"));
        assert!(out.contains("A test element."));
    }

    #[test]
    fn format_text_with_file_path() {
        let out = format_text(&make_report(true, false));
        assert!(out.contains("File: src/my-element.js"));
    }

    #[test]
    fn format_text_with_attributes() {
        let out = format_text(&make_report(false, true));
        assert!(out.contains("[disabled] boolean"));
        assert!(out.contains("Disables the element"));
    }

    #[test]
    fn format_json_uses_camel_case_fields() {
        let json = format_json(&make_report(false, true));
        assert!(json.contains("\"tagName\""));
        assert!(json.contains("\"superClass\""));
        assert!(json.contains("\"type\""));
        assert!(json.contains("\"sourceLocation\""));
    }

    #[test]
    fn output_format_eq() {
        assert_eq!(OutputFormat::Pretty, OutputFormat::Pretty);
        assert_ne!(OutputFormat::Json, OutputFormat::Text);
    }
}
