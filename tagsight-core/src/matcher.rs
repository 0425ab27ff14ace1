//! Pure structural matchers over syntax-tree nodes.
//!
//! These functions recognize the source shapes that denote a custom element:
//! class declarations/expressions and `customElements.define(…)` calls. They
//! inspect nodes, never mutate, and return `None` for anything they do not
//! understand.

use tree_sitter::Node;

/// Structural facts about a `class` declaration or expression.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDefinition {
    pub name: Option<String>,
    pub super_class: Option<String>,
}

/// How a registration call refers to its class.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassRef {
    /// `customElements.define('x-tag', SomeClass)`; resolved against class
    /// names once traversal completes, so declaration order does not matter.
    Name(String),
    /// An inline class expression, identified by its node id.
    Inline(usize),
}

/// A recognized `customElements.define('tag', …)` call.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub tag_name: String,
    pub target: ClassRef,
}

/// Extract name and superclass from a class declaration or expression.
///
/// Anonymous class expressions borrow the name of the variable they are
/// assigned to, when there is one.
pub fn class_definition(node: Node<'_>, source: &[u8]) -> ClassDefinition {
    let name = node
        .child_by_field_name("name")
        .and_then(|n| n.utf8_text(source).ok())
        .map(str::to_owned)
        .or_else(|| declarator_name(node, source));

    let mut cursor = node.walk();
    let super_class = node
        .named_children(&mut cursor)
        .find(|child| child.kind() == "class_heritage")
        .and_then(|heritage| {
            let mut heritage_cursor = heritage.walk();
            let first = heritage
                .named_children(&mut heritage_cursor)
                .find(|child| child.kind() != "comment");
            first
        })
        .and_then(|expression| expression.utf8_text(source).ok())
        .map(str::to_owned);

    ClassDefinition { name, super_class }
}

/// Match a `customElements.define(tag, class)` call, including the
/// `window.customElements.define(…)` spelling.
///
/// Returns `None` when the callee is not a `define` on a `customElements`
/// receiver, when the tag argument is not a string literal, or when the
/// class argument is neither an identifier nor an inline class.
pub fn registration_call(node: Node<'_>, source: &[u8]) -> Option<Registration> {
    let callee = node.child_by_field_name("function")?;
    if callee.kind() != "member_expression" {
        return None;
    }
    let property = callee.child_by_field_name("property")?;
    if property.utf8_text(source).ok()? != "define" {
        return None;
    }
    let object = callee.child_by_field_name("object")?;
    let receiver = match object.kind() {
        "identifier" => object.utf8_text(source).ok()?,
        "member_expression" => object
            .child_by_field_name("property")?
            .utf8_text(source)
            .ok()?,
        _ => return None,
    };
    if receiver != "customElements" {
        return None;
    }

    let arguments = node.child_by_field_name("arguments")?;
    let mut cursor = arguments.walk();
    let mut expressions = arguments
        .named_children(&mut cursor)
        .filter(|child| child.kind() != "comment");

    let tag_node = expressions.next()?;
    let tag_name = string_value(tag_node, source)?;

    let class_node = expressions.next()?;
    let target = match class_node.kind() {
        "identifier" => ClassRef::Name(class_node.utf8_text(source).ok()?.to_owned()),
        "class" => ClassRef::Inline(class_node.id()),
        _ => return None,
    };

    Some(Registration { tag_name, target })
}

/// The name an assignment gives to its right-hand side: the identifier for
/// `Foo = …`, the final property for `window.Foo = …`.
pub fn assignment_target_name(node: Node<'_>, source: &[u8]) -> Option<String> {
    let left = node.child_by_field_name("left")?;
    let name_node = match left.kind() {
        "identifier" => left,
        "member_expression" => left.child_by_field_name("property")?,
        _ => return None,
    };
    name_node.utf8_text(source).ok().map(str::to_owned)
}

/// The literal value of a `string` node, with quotes removed.
///
/// Returns `None` for non-string nodes and for the empty string, which can
/// never be a usable tag or attribute name.
pub fn string_value(node: Node<'_>, source: &[u8]) -> Option<String> {
    if node.kind() != "string" {
        return None;
    }
    let mut cursor = node.walk();
    let mut value = String::new();
    for part in node.named_children(&mut cursor) {
        if let Ok(text) = part.utf8_text(source) {
            value.push_str(text);
        }
    }
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn declarator_name(node: Node<'_>, source: &[u8]) -> Option<String> {
    let parent = node.parent()?;
    if parent.kind() != "variable_declarator" {
        return None;
    }
    if parent.child_by_field_name("value") != Some(node) {
        return None;
    }
    parent
        .child_by_field_name("name")?
        .utf8_text(source)
        .ok()
        .map(str::to_owned)
}
