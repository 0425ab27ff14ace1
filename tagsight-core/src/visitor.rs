use tree_sitter::Node;

use crate::document::JavaScriptDocument;

/// Callbacks for the syntax-tree node kinds the finders care about.
///
/// [`JavaScriptDocument::visit`] performs one document-order traversal and
/// invokes the matching callback once per node. Every callback defaults to a
/// no-op so implementors opt into only the kinds they need.
pub trait Visitor {
    /// `class Foo extends Bar { … }` at statement level.
    fn visit_class_declaration(&mut self, _document: &JavaScriptDocument, _node: Node<'_>) {}

    /// A `class` expression, named or anonymous, in any expression position.
    fn visit_class_expression(&mut self, _document: &JavaScriptDocument, _node: Node<'_>) {}

    fn visit_call_expression(&mut self, _document: &JavaScriptDocument, _node: Node<'_>) {}

    fn visit_assignment_expression(&mut self, _document: &JavaScriptDocument, _node: Node<'_>) {}
}
