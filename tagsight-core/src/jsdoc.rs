//! Minimal JSDoc block parsing.
//!
//! Turns a raw `/** … */` comment into a description plus `@tag` entries.
//! Only the subset the element finder needs is handled; unrecognized tags
//! are carried through untouched for downstream consumers.

/// A parsed documentation comment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Annotation {
    /// Text before the first `@tag`; `None` when empty.
    pub description: Option<String>,
    pub tags: Vec<Tag>,
}

/// One `@title {type} description` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub title: String,
    pub type_name: Option<String>,
    pub description: Option<String>,
}

/// Type tokens recognized in inline attribute comments.
const TYPE_TOKENS: &[&str] = &["boolean", "string", "number"];

/// `true` for `/** … */`-shaped comments.
pub fn is_jsdoc(comment: &str) -> bool {
    comment.trim_start().starts_with("/**")
}

/// Strip comment delimiters and per-line `*` gutters.
pub fn strip_markers(comment: &str) -> String {
    let trimmed = comment.trim();
    let trimmed = trimmed
        .strip_prefix("/**")
        .or_else(|| trimmed.strip_prefix("/*"))
        .or_else(|| trimmed.strip_prefix("//"))
        .unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix("*/").unwrap_or(trimmed);
    trimmed
        .lines()
        .map(|line| {
            let line = line.trim_start();
            line.strip_prefix("* ")
                .or_else(|| line.strip_prefix('*'))
                .unwrap_or(line)
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Parse a comment into a description and its `@tag` entries.
///
/// Lines that do not start a tag extend the previous tag's description, or
/// the overall description when no tag has started yet.
pub fn parse(comment: &str) -> Annotation {
    let cleaned = strip_markers(comment);
    let mut description_lines: Vec<&str> = Vec::new();
    let mut tags: Vec<Tag> = Vec::new();

    for line in cleaned.lines() {
        let trimmed = line.trim();
        if let Some(rest) = trimmed.strip_prefix('@') {
            tags.push(parse_tag(rest));
        } else if let Some(tag) = tags.last_mut() {
            if !trimmed.is_empty() {
                match &mut tag.description {
                    Some(description) => {
                        description.push(' ');
                        description.push_str(trimmed);
                    }
                    None => tag.description = Some(trimmed.to_string()),
                }
            }
        } else {
            description_lines.push(trimmed);
        }
    }

    let description = description_lines.join("\n").trim().to_string();
    Annotation {
        description: if description.is_empty() {
            None
        } else {
            Some(description)
        },
        tags,
    }
}

/// Find a recognized type token mentioned anywhere in a comment.
pub fn infer_type(comment: &str) -> Option<&'static str> {
    let cleaned = strip_markers(comment);
    cleaned
        .split(|c: char| !c.is_ascii_alphanumeric())
        .find_map(|word| TYPE_TOKENS.iter().find(|token| **token == word).copied())
}

fn parse_tag(rest: &str) -> Tag {
    let rest = rest.trim();
    let title_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    let title = rest[..title_end].to_string();
    let mut rest = rest[title_end..].trim_start();

    let mut type_name = None;
    if let Some(after) = rest.strip_prefix('{') {
        if let Some(close) = after.find('}') {
            type_name = Some(after[..close].trim().to_string());
            rest = after[close + 1..].trim_start();
        }
    }

    let description = if rest.is_empty() {
        None
    } else {
        Some(rest.to_string())
    };
    Tag {
        title,
        type_name,
        description,
    }
}
