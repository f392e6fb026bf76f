//! Tree-sitter parser integration for Go
//!
//! Parses source text with the tree-sitter Go grammar and lowers the
//! declaration-level parts of the tree into [`SourceFile`].

use super::ast::{Decl, Field, FuncType, InterfaceType, SourceFile, TypeExpr, TypeSpec};
use crate::errors::{MockgenError, Result};
use std::fmt;
use std::path::Path;
use tree_sitter::{Node, Parser, Tree};

/// Position and description of the first syntax error in a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.message)
    }
}

/// Parse Go source text into a tree-sitter tree, rejecting trees with errors.
pub fn parse_tree(content: &str) -> std::result::Result<Tree, SyntaxError> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .map_err(|e| SyntaxError {
            line: 0,
            column: 0,
            message: format!("Failed to set Go language: {e}"),
        })?;

    let tree = parser.parse(content, None).ok_or_else(|| SyntaxError {
        line: 0,
        column: 0,
        message: "Failed to parse Go source".to_string(),
    })?;

    if has_parse_errors(&tree) {
        return Err(first_error(tree.root_node(), content).unwrap_or(SyntaxError {
            line: 1,
            column: 1,
            message: "syntax error".to_string(),
        }));
    }

    Ok(tree)
}

/// Check that `content` is syntactically valid Go.
pub fn check_syntax(content: &str) -> std::result::Result<(), SyntaxError> {
    parse_tree(content).map(|_| ())
}

/// Parse a Go source file into its declaration model.
pub fn parse_source(content: &str, path: &Path) -> Result<SourceFile> {
    let tree = parse_tree(content).map_err(|e| MockgenError::Parse {
        path: path.to_path_buf(),
        line: e.line,
        column: e.column,
        message: e.message,
    })?;

    Ok(Lowering { source: content }.source_file(tree.root_node()))
}

/// Check if a parse tree has errors
pub fn has_parse_errors(tree: &Tree) -> bool {
    tree.root_node().has_error()
}

/// Get text for a tree-sitter node
pub fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    &source[node.start_byte()..node.end_byte()]
}

/// Get the line number for a tree-sitter node (1-indexed)
pub fn node_line(node: &Node) -> usize {
    node.start_position().row + 1
}

fn first_error(node: Node, source: &str) -> Option<SyntaxError> {
    if node.is_error() || node.is_missing() {
        let message = if node.is_missing() {
            format!("missing `{}`", node.kind())
        } else {
            let text = node_text(&node, source);
            let text = text.lines().next().unwrap_or_default().trim();
            format!("unexpected `{text}`")
        };
        return Some(SyntaxError {
            line: node_line(&node),
            column: node.start_position().column + 1,
            message,
        });
    }

    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .find_map(|child| first_error(child, source));
    found
}

/// Lowers tree-sitter nodes into the typed model.
struct Lowering<'a> {
    source: &'a str,
}

impl<'a> Lowering<'a> {
    fn text(&self, node: &Node) -> &'a str {
        node_text(node, self.source)
    }

    fn source_file(&self, root: Node) -> SourceFile {
        let mut file = SourceFile::default();

        for child in named_children(root) {
            match child.kind() {
                "package_clause" => {
                    file.package = named_children(child)
                        .into_iter()
                        .find(|n| n.kind() == "package_identifier")
                        .map(|n| self.text(&n).to_string());
                }
                "type_declaration" => {
                    for spec in named_children(child) {
                        if let Some(spec) = self.type_spec(spec) {
                            file.decls.push(Decl::Type(spec));
                        }
                    }
                }
                "comment" => {}
                kind => file.decls.push(Decl::Other {
                    kind: kind.to_string(),
                    line: node_line(&child),
                }),
            }
        }

        file
    }

    fn type_spec(&self, node: Node) -> Option<TypeSpec> {
        let is_alias = match node.kind() {
            "type_spec" => false,
            "type_alias" => true,
            _ => return None,
        };
        let name = node.child_by_field_name("name")?;
        let ty = node.child_by_field_name("type")?;

        Some(TypeSpec {
            name: self.text(&name).to_string(),
            type_params: node
                .child_by_field_name("type_parameters")
                .map(|n| self.text(&n).to_string()),
            ty: self.type_expr(ty),
            is_alias,
            line: node_line(&node),
        })
    }

    fn type_expr(&self, node: Node) -> TypeExpr {
        match node.kind() {
            "type_identifier" | "identifier" => TypeExpr::Named(self.text(&node).to_string()),
            "qualified_type" => match (
                node.child_by_field_name("package"),
                node.child_by_field_name("name"),
            ) {
                (Some(package), Some(name)) => TypeExpr::Qualified {
                    package: self.text(&package).to_string(),
                    name: self.text(&name).to_string(),
                },
                _ => self.other(node),
            },
            "pointer_type" => match first_named_child(node) {
                Some(inner) => TypeExpr::Pointer(Box::new(self.type_expr(inner))),
                None => self.other(node),
            },
            "slice_type" => match node.child_by_field_name("element") {
                Some(elem) => TypeExpr::Slice(Box::new(self.type_expr(elem))),
                None => self.other(node),
            },
            "array_type" => match (
                node.child_by_field_name("length"),
                node.child_by_field_name("element"),
            ) {
                (Some(len), Some(elem)) => TypeExpr::Array {
                    len: self.text(&len).to_string(),
                    elem: Box::new(self.type_expr(elem)),
                },
                _ => self.other(node),
            },
            "map_type" => match (
                node.child_by_field_name("key"),
                node.child_by_field_name("value"),
            ) {
                (Some(key), Some(value)) => TypeExpr::Map {
                    key: Box::new(self.type_expr(key)),
                    value: Box::new(self.type_expr(value)),
                },
                _ => self.other(node),
            },
            "channel_type" => match node.child_by_field_name("value") {
                Some(elem) => {
                    let text = self.text(&node);
                    let dir = text[..elem.start_byte() - node.start_byte()].trim();
                    TypeExpr::Chan {
                        dir: dir.split_whitespace().collect::<Vec<_>>().join(""),
                        elem: Box::new(self.type_expr(elem)),
                    }
                }
                None => self.other(node),
            },
            "function_type" => TypeExpr::Func(self.func_type(
                node.child_by_field_name("parameters"),
                node.child_by_field_name("result"),
            )),
            "interface_type" => TypeExpr::Interface(self.interface_type(node)),
            "generic_type" => match (
                node.child_by_field_name("type"),
                node.child_by_field_name("type_arguments"),
            ) {
                (Some(base), Some(args)) => TypeExpr::Generic {
                    base: self.text(&base).to_string(),
                    args: self.text(&args).to_string(),
                },
                _ => self.other(node),
            },
            _ => self.other(node),
        }
    }

    fn other(&self, node: Node) -> TypeExpr {
        TypeExpr::Other {
            kind: node.kind().to_string(),
            text: self.text(&node).to_string(),
        }
    }

    fn func_type(&self, params: Option<Node>, result: Option<Node>) -> FuncType {
        FuncType {
            params: params.map(|p| self.parameter_list(p)).unwrap_or_default(),
            results: match result {
                Some(r) if r.kind() == "parameter_list" => self.parameter_list(r),
                Some(r) => vec![Field::anonymous(self.type_expr(r), node_line(&r))],
                None => Vec::new(),
            },
        }
    }

    fn parameter_list(&self, node: Node) -> Vec<Field> {
        named_children(node)
            .into_iter()
            .filter_map(|decl| {
                let ty = decl.child_by_field_name("type")?;
                let mut ty = self.type_expr(ty);
                match decl.kind() {
                    "parameter_declaration" => {}
                    "variadic_parameter_declaration" => ty = TypeExpr::Variadic(Box::new(ty)),
                    _ => return None,
                }
                Some(Field::new(self.field_names(decl), ty, node_line(&decl)))
            })
            .collect()
    }

    fn interface_type(&self, node: Node) -> InterfaceType {
        let elements = named_children(node)
            .into_iter()
            .filter_map(|elem| match elem.kind() {
                "method_elem" | "method_spec" => {
                    let func = self.func_type(
                        elem.child_by_field_name("parameters"),
                        elem.child_by_field_name("result"),
                    );
                    Some(Field::new(
                        self.field_names(elem),
                        TypeExpr::Func(func),
                        node_line(&elem),
                    ))
                }
                "type_elem" | "constraint_elem" => {
                    let types = named_children(elem);
                    let ty = match types.as_slice() {
                        [single] => self.type_expr(*single),
                        _ => TypeExpr::Other {
                            kind: "type union".to_string(),
                            text: self.text(&elem).to_string(),
                        },
                    };
                    Some(Field::anonymous(ty, node_line(&elem)))
                }
                "comment" => None,
                _ => Some(Field::anonymous(self.type_expr(elem), node_line(&elem))),
            })
            .collect();

        InterfaceType { elements }
    }

    fn field_names(&self, node: Node) -> Vec<String> {
        let mut cursor = node.walk();
        let names = node
            .children_by_field_name("name", &mut cursor)
            .map(|n| self.text(&n).to_string())
            .collect();
        names
    }
}

fn named_children(node: Node) -> Vec<Node> {
    let mut cursor = node.walk();
    let children = node
        .named_children(&mut cursor)
        .filter(|c| c.kind() != "comment")
        .collect();
    children
}

fn first_named_child(node: Node) -> Option<Node> {
    named_children(node).into_iter().next()
}
