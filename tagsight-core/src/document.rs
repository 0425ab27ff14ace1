use tree_sitter::{Node, Parser, Tree};

use crate::descriptor::SourceLocation;
use crate::visitor::Visitor;

/// A parsed JavaScript source file.
///
/// Owns the source text and its concrete syntax tree, and provides the three
/// lookups the finders depend on: node text, node position, and the comment
/// token immediately preceding a node.
pub struct JavaScriptDocument {
    source: String,
    tree: Tree,
}

impl JavaScriptDocument {
    pub fn parse(source: impl Into<String>) -> anyhow::Result<Self> {
        let source = source.into();
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_javascript::LANGUAGE.into())
            .map_err(|e| anyhow::anyhow!("tree-sitter language error: {e}"))?;
        let tree = parser
            .parse(source.as_bytes(), None)
            .ok_or_else(|| anyhow::anyhow!("failed to parse source"))?;
        Ok(Self { source, tree })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn source_bytes(&self) -> &[u8] {
        self.source.as_bytes()
    }

    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Walk the whole tree once, in document order, dispatching each node to
    /// every registered visitor by kind.
    ///
    /// Traversal order is deterministic, so repeated visits over the same
    /// document produce identical callback sequences.
    pub fn visit(&self, visitors: &mut [&mut dyn Visitor]) {
        let mut stack = vec![self.root()];
        while let Some(node) = stack.pop() {
            if node.is_named() {
                match node.kind() {
                    "class_declaration" => {
                        for visitor in visitors.iter_mut() {
                            visitor.visit_class_declaration(self, node);
                        }
                    }
                    // The bare `class` keyword token shares this kind string,
                    // hence the is_named guard above.
                    "class" => {
                        for visitor in visitors.iter_mut() {
                            visitor.visit_class_expression(self, node);
                        }
                    }
                    "call_expression" => {
                        for visitor in visitors.iter_mut() {
                            visitor.visit_call_expression(self, node);
                        }
                    }
                    "assignment_expression" => {
                        for visitor in visitors.iter_mut() {
                            visitor.visit_assignment_expression(self, node);
                        }
                    }
                    _ => {}
                }
            }
            let mut cursor = node.walk();
            let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
            for child in children.into_iter().rev() {
                stack.push(child);
            }
        }
    }

    /// Text of `node` in the original source.
    pub fn node_text(&self, node: Node<'_>) -> &str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }

    /// Position of `node`: 1-based line, 0-based column.
    pub fn location_of(&self, node: Node<'_>) -> SourceLocation {
        let position = node.start_position();
        SourceLocation {
            line: position.row + 1,
            column: position.column,
        }
    }

    /// The comment token immediately preceding `node`, if any.
    ///
    /// Climbs to the nearest statement-level ancestor first, so a comment
    /// written above `const X = class …` or `export class …` attaches to the
    /// class it documents.
    pub fn leading_comment(&self, node: Node<'_>) -> Option<&str> {
        let mut current = node;
        while let Some(parent) = current.parent() {
            if matches!(parent.kind(), "program" | "statement_block" | "class_body") {
                break;
            }
            current = parent;
        }
        let previous = current.prev_sibling()?;
        if previous.kind() != "comment" {
            return None;
        }
        previous.utf8_text(self.source.as_bytes()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingVisitor {
        kinds: Vec<&'static str>,
        names: Vec<String>,
    }

    impl Visitor for RecordingVisitor {
        fn visit_class_declaration(&mut self, document: &JavaScriptDocument, node: Node<'_>) {
            self.kinds.push("class_declaration");
            if let Some(name) = node.child_by_field_name("name") {
                self.names.push(document.node_text(name).to_string());
            }
        }

        fn visit_class_expression(&mut self, _document: &JavaScriptDocument, _node: Node<'_>) {
            self.kinds.push("class_expression");
        }

        fn visit_call_expression(&mut self, _document: &JavaScriptDocument, _node: Node<'_>) {
            self.kinds.push("call_expression");
        }

        fn visit_assignment_expression(&mut self, _document: &JavaScriptDocument, _node: Node<'_>) {
            self.kinds.push("assignment_expression");
        }
    }

    fn visit_source(source: &str) -> RecordingVisitor {
        let document = JavaScriptDocument::parse(source).unwrap();
        let mut visitor = RecordingVisitor::default();
        document.visit(&mut [&mut visitor]);
        visitor
    }

    #[test]
    fn dispatches_each_node_kind_once() {
        let visitor = visit_source(
            "class A extends HTMLElement {}\n\
             const B = class {};\n\
             B = class {};\n\
             register(A);\n",
        );
        assert_eq!(
            visitor.kinds.iter().filter(|k| **k == "class_declaration").count(),
            1
        );
        assert_eq!(
            visitor.kinds.iter().filter(|k| **k == "class_expression").count(),
            2
        );
        assert_eq!(
            visitor.kinds.iter().filter(|k| **k == "call_expression").count(),
            1
        );
        assert_eq!(
            visitor.kinds.iter().filter(|k| **k == "assignment_expression").count(),
            1
        );
    }

    #[test]
    fn traversal_is_document_order() {
        let visitor = visit_source("class First {}\nclass Second {}\nclass Third {}\n");
        assert_eq!(visitor.names, ["First", "Second", "Third"]);
    }

    #[test]
    fn leading_comment_above_class_declaration() {
        let document =
            JavaScriptDocument::parse("/** Documented. */\nclass A extends HTMLElement {}\n")
                .unwrap();
        let class_node = find_named(document.root(), "class_declaration").unwrap();
        let comment = document.leading_comment(class_node).unwrap();
        assert!(comment.contains("Documented."));
    }

    #[test]
    fn leading_comment_climbs_out_of_declarators() {
        let document = JavaScriptDocument::parse(
            "/** Docs for B. */\nconst B = class extends HTMLElement {};\n",
        )
        .unwrap();
        let class_node = find_named(document.root(), "class").unwrap();
        let comment = document.leading_comment(class_node).unwrap();
        assert!(comment.contains("Docs for B."));
    }

    #[test]
    fn leading_comment_absent() {
        let document = JavaScriptDocument::parse("class A {}\nclass B {}\n").unwrap();
        let second = {
            let mut found = None;
            let mut cursor = document.root().walk();
            for child in document.root().children(&mut cursor) {
                if child.kind() == "class_declaration" {
                    found = Some(child);
                }
            }
            found.unwrap()
        };
        assert!(document.leading_comment(second).is_none());
    }

    #[test]
    fn location_is_one_based_line_zero_based_column() {
        let document = JavaScriptDocument::parse("\n  class A {}\n").unwrap();
        let class_node = find_named(document.root(), "class_declaration").unwrap();
        let location = document.location_of(class_node);
        assert_eq!(location.line, 2);
        assert_eq!(location.column, 2);
    }

    fn find_named<'tree>(root: Node<'tree>, kind: &str) -> Option<Node<'tree>> {
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            if node.is_named() && node.kind() == kind {
                return Some(node);
            }
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                stack.push(child);
            }
        }
        None
    }
}
