//! The element finder: drives one traversal over a parsed document and
//! returns a descriptor for every custom element defined in it.
//!
//! Four authoring idioms are recognized:
//!
//! - `class X extends HTMLElement {}` + `customElements.define('x-tag', X)`
//! - `const X = class extends HTMLElement {}` + a registration by name
//! - an anonymous class passed inline to the registration call
//! - a registration call that textually precedes the class it references
//!
//! Classes and registrations are collected independently during the single
//! pass and joined once traversal completes, so source order never matters.

use std::collections::HashMap;

use tree_sitter::Node;

use crate::descriptor::{AttributeDescriptor, ElementDescriptor, SourceLocation};
use crate::document::JavaScriptDocument;
use crate::jsdoc;
use crate::matcher::{self, ClassRef, Registration};
use crate::visitor::Visitor;

#[derive(Debug, Clone)]
struct ClassEntry {
    name: Option<String>,
    super_class: Option<String>,
    description: Option<String>,
    attributes: Vec<AttributeDescriptor>,
    location: SourceLocation,
}

/// Visitor that accumulates class entries and registration calls.
///
/// Entries are keyed by node id and registrations refer to classes by name
/// or node id, so forward references resolve regardless of which side is
/// visited first. [`ElementVisitor::finish`] performs the join.
#[derive(Default)]
pub struct ElementVisitor {
    classes: Vec<(usize, ClassEntry)>,
    registrations: Vec<Registration>,
    name_hints: HashMap<usize, String>,
}

impl ElementVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    fn record_class(&mut self, document: &JavaScriptDocument, node: Node<'_>) {
        let definition = matcher::class_definition(node, document.source_bytes());
        let description = document
            .leading_comment(node)
            .filter(|comment| jsdoc::is_jsdoc(comment))
            .and_then(|comment| jsdoc::parse(comment).description);
        self.classes.push((
            node.id(),
            ClassEntry {
                name: definition.name,
                super_class: definition.super_class,
                description,
                attributes: observed_attributes(node, document),
                location: document.location_of(node),
            },
        ));
    }

    /// Join registrations to class entries and emit the final descriptors.
    ///
    /// Registrations whose class was never seen are dropped; a tag
    /// registered twice keeps its first position but takes the class of the
    /// last registration.
    pub fn finish(self) -> Vec<ElementDescriptor> {
        let ElementVisitor {
            mut classes,
            registrations,
            name_hints,
        } = self;

        for (id, entry) in &mut classes {
            if entry.name.is_none() {
                entry.name = name_hints.get(id).cloned();
            }
        }

        let mut by_name: HashMap<&str, usize> = HashMap::new();
        let mut by_id: HashMap<usize, usize> = HashMap::new();
        for (index, (id, entry)) in classes.iter().enumerate() {
            if let Some(ref name) = entry.name {
                by_name.insert(name.as_str(), index);
            }
            by_id.insert(*id, index);
        }

        let mut resolved: Vec<(String, usize)> = Vec::new();
        for registration in registrations {
            let index = match &registration.target {
                ClassRef::Name(name) => by_name.get(name.as_str()).copied(),
                ClassRef::Inline(id) => by_id.get(id).copied(),
            };
            let Some(index) = index else { continue };
            match resolved
                .iter()
                .position(|(tag, _)| *tag == registration.tag_name)
            {
                Some(slot) => resolved[slot].1 = index,
                None => resolved.push((registration.tag_name, index)),
            }
        }

        resolved
            .into_iter()
            .map(|(tag_name, index)| {
                let entry = &classes[index].1;
                ElementDescriptor {
                    tag_name,
                    class_name: entry.name.clone(),
                    super_class: entry.super_class.clone(),
                    description: entry.description.clone(),
                    attributes: entry.attributes.clone(),
                    source_location: entry.location,
                }
            })
            .collect()
    }
}

impl Visitor for ElementVisitor {
    fn visit_class_declaration(&mut self, document: &JavaScriptDocument, node: Node<'_>) {
        self.record_class(document, node);
    }

    fn visit_class_expression(&mut self, document: &JavaScriptDocument, node: Node<'_>) {
        self.record_class(document, node);
    }

    fn visit_call_expression(&mut self, document: &JavaScriptDocument, node: Node<'_>) {
        if let Some(registration) = matcher::registration_call(node, document.source_bytes()) {
            self.registrations.push(registration);
        }
    }

    fn visit_assignment_expression(&mut self, document: &JavaScriptDocument, node: Node<'_>) {
        // `Foo = class … {}` gives an otherwise-anonymous expression a name.
        let Some(right) = node.child_by_field_name("right") else {
            return;
        };
        if right.kind() != "class" {
            return;
        }
        if let Some(name) = matcher::assignment_target_name(node, document.source_bytes()) {
            self.name_hints.insert(right.id(), name);
        }
    }
}

/// Finds custom element definitions in a parsed document.
#[derive(Debug, Default)]
pub struct ElementFinder;

impl ElementFinder {
    pub fn new() -> Self {
        Self
    }

    /// Run a fresh [`ElementVisitor`] through the supplied traversal
    /// capability and collect the resulting descriptors.
    ///
    /// Malformed or unrecognized source shapes never fail the traversal;
    /// they simply contribute no descriptor.
    pub fn find_entities<F>(&self, visit: F) -> Vec<ElementDescriptor>
    where
        F: FnOnce(&mut dyn Visitor),
    {
        let mut visitor = ElementVisitor::new();
        visit(&mut visitor);
        visitor.finish()
    }

    /// Convenience wrapper: one full traversal of `document`.
    pub fn find_elements(&self, document: &JavaScriptDocument) -> Vec<ElementDescriptor> {
        self.find_entities(|visitor| document.visit(&mut [visitor]))
    }
}

/// Pull attribute descriptors out of a class body's `observedAttributes`
/// accessor, either a static getter or a static field initialized with an
/// array literal.
fn observed_attributes(
    class_node: Node<'_>,
    document: &JavaScriptDocument,
) -> Vec<AttributeDescriptor> {
    let Some(body) = class_node.child_by_field_name("body") else {
        return Vec::new();
    };
    let mut cursor = body.walk();
    for member in body.named_children(&mut cursor) {
        let array = match member.kind() {
            "method_definition" if is_static_getter(member, document) => {
                getter_return_array(member)
            }
            "field_definition" if is_static_field(member, document) => member
                .child_by_field_name("value")
                .filter(|value| value.kind() == "array"),
            _ => None,
        };
        if let Some(array) = array {
            return extract_attributes(array, document);
        }
    }
    Vec::new()
}

fn is_static_getter(member: Node<'_>, document: &JavaScriptDocument) -> bool {
    let name_matches = member
        .child_by_field_name("name")
        .map(|name| document.node_text(name) == "observedAttributes")
        .unwrap_or(false);
    if !name_matches {
        return false;
    }
    let mut cursor = member.walk();
    let mut is_static = false;
    let mut is_getter = false;
    for child in member.children(&mut cursor) {
        match child.kind() {
            "static" => is_static = true,
            "get" => is_getter = true,
            _ => {}
        }
    }
    is_static && is_getter
}

fn is_static_field(member: Node<'_>, document: &JavaScriptDocument) -> bool {
    let name_matches = member
        .child_by_field_name("property")
        .map(|name| document.node_text(name) == "observedAttributes")
        .unwrap_or(false);
    if !name_matches {
        return false;
    }
    let mut cursor = member.walk();
    let is_static = member
        .children(&mut cursor)
        .any(|child| child.kind() == "static");
    is_static
}

fn getter_return_array(member: Node<'_>) -> Option<Node<'_>> {
    let body = member.child_by_field_name("body")?;
    let mut cursor = body.walk();
    let return_statement = body
        .named_children(&mut cursor)
        .find(|statement| statement.kind() == "return_statement")?;
    let mut return_cursor = return_statement.walk();
    let array = return_statement
        .named_children(&mut return_cursor)
        .find(|child| child.kind() == "array");
    array
}

/// Walk the array literal, pairing each string element with the comment
/// that immediately precedes it.
///
/// Non-string elements are skipped and also swallow any pending comment so
/// it cannot leak onto the next attribute.
fn extract_attributes(array: Node<'_>, document: &JavaScriptDocument) -> Vec<AttributeDescriptor> {
    let mut attributes = Vec::new();
    let mut pending_comment: Option<Node<'_>> = None;
    let mut cursor = array.walk();
    for child in array.children(&mut cursor) {
        match child.kind() {
            "comment" => pending_comment = Some(child),
            "string" => {
                let comment = pending_comment.take().map(|node| document.node_text(node));
                if let Some(name) = matcher::string_value(child, document.source_bytes()) {
                    let (type_name, description) =
                        comment.map(attribute_metadata).unwrap_or((None, None));
                    attributes.push(AttributeDescriptor {
                        name,
                        type_name,
                        description,
                        source_location: document.location_of(child),
                    });
                }
            }
            "[" | "]" | "," => {}
            _ => pending_comment = None,
        }
    }
    attributes
}

/// Type and description carried by an attribute's inline comment.
///
/// An explicit `@type {…}` tag wins; otherwise the comment text is scanned
/// for a bare `boolean`/`string`/`number` token.
fn attribute_metadata(comment: &str) -> (Option<String>, Option<String>) {
    let annotation = jsdoc::parse(comment);
    if let Some(tag) = annotation.tags.iter().find(|tag| tag.title == "type") {
        let type_name = tag
            .type_name
            .clone()
            .or_else(|| jsdoc::infer_type(comment).map(str::to_owned));
        let description = tag.description.clone().or(annotation.description);
        return (type_name, description);
    }
    (
        jsdoc::infer_type(comment).map(str::to_owned),
        annotation.description,
    )
}
