use serde::{Deserialize, Serialize};

/// A position in the original source text.
///
/// `line` is 1-based and `column` is 0-based, matching the convention most
/// editors and diagnostic tools expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

/// One observed attribute declared by a custom element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDescriptor {
    /// The literal attribute name, e.g. `"disabled"`.
    pub name: String,
    /// Type recognized in the inline comment (`boolean`, `string`, `number`),
    /// `None` when the comment carries no recognizable token.
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    /// Inline comment text attached to the array element.
    pub description: Option<String>,
    /// Position of the string literal itself, not the enclosing array.
    pub source_location: SourceLocation,
}

/// A discovered custom element definition.
///
/// Descriptors are built once per traversal and hold no references back into
/// the syntax tree, so they are safe to retain after the document is dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDescriptor {
    /// The registered tag name (kebab-case), unique per document.
    pub tag_name: String,
    /// Name of the backing class; `None` for anonymous class expressions
    /// passed straight to the registration call.
    pub class_name: Option<String>,
    /// The `extends` target, normally `HTMLElement` or a subclass.
    pub super_class: Option<String>,
    /// Description taken from the nearest preceding JSDoc comment.
    pub description: Option<String>,
    /// Observed attributes in declaration order; empty when the class has no
    /// `observedAttributes` accessor.
    pub attributes: Vec<AttributeDescriptor>,
    /// Position of the defining class node.
    pub source_location: SourceLocation,
}
