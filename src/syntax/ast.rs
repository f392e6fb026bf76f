//! Typed declaration model for Go source files.
//!
//! The tree-sitter concrete syntax tree is lowered into these types so the
//! rest of the pipeline can pattern match over closed enums instead of
//! comparing node kind strings. Only declaration-level structure is kept;
//! function bodies and expressions are never looked at.

use std::fmt;

/// A parsed Go source file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceFile {
    /// Name from the `package` clause, if the file has one
    pub package: Option<String>,
    /// Top-level declarations in source order
    pub decls: Vec<Decl>,
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    /// One `type` spec. Grouped `type ( ... )` declarations yield one entry per spec.
    Type(TypeSpec),
    /// Anything else (imports, functions, methods, vars, consts).
    Other { kind: String, line: usize },
}

/// `type Name[Params] Type` or `type Name = Type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpec {
    pub name: String,
    /// Raw text of the type parameter list, when present
    pub type_params: Option<String>,
    pub ty: TypeExpr,
    pub is_alias: bool,
    /// 1-indexed line of the spec
    pub line: usize,
}

/// One entry of a parameter list, result list or interface body.
///
/// Mirrors Go's own AST: a field may carry any number of names sharing one
/// type. Interface method elements carry the method name and a
/// [`TypeExpr::Func`]; embedded elements carry no names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub names: Vec<String>,
    pub ty: TypeExpr,
    pub line: usize,
}

impl Field {
    pub fn new(names: Vec<String>, ty: TypeExpr, line: usize) -> Self {
        Self { names, ty, line }
    }

    pub fn anonymous(ty: TypeExpr, line: usize) -> Self {
        Self::new(Vec::new(), ty, line)
    }
}

/// Function signature without a receiver.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FuncType {
    pub params: Vec<Field>,
    pub results: Vec<Field>,
}

/// Body of an `interface { ... }` type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InterfaceType {
    pub elements: Vec<Field>,
}

/// Shape of a type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// Bare identifier: `int`, `error`, `Widget`
    Named(String),
    /// `pkg.Name`
    Qualified { package: String, name: String },
    /// `*T`
    Pointer(Box<TypeExpr>),
    /// `[]T`
    Slice(Box<TypeExpr>),
    /// `[N]T`
    Array { len: String, elem: Box<TypeExpr> },
    /// `map[K]V`
    Map {
        key: Box<TypeExpr>,
        value: Box<TypeExpr>,
    },
    /// `chan T`, `<-chan T`, `chan<- T`
    Chan { dir: String, elem: Box<TypeExpr> },
    /// `func(...) ...`
    Func(FuncType),
    /// `interface { ... }`
    Interface(InterfaceType),
    /// `...T` in the last parameter position
    Variadic(Box<TypeExpr>),
    /// `Name[Args]`
    Generic { base: String, args: String },
    /// Any other shape (struct types, unions, parenthesized types, ...)
    Other { kind: String, text: String },
}

impl TypeExpr {
    /// Human readable name of the shape, used in diagnostics.
    pub fn shape(&self) -> &str {
        match self {
            Self::Named(_) => "named type",
            Self::Qualified { .. } => "qualified type",
            Self::Pointer(_) => "pointer type",
            Self::Slice(_) => "slice type",
            Self::Array { .. } => "array type",
            Self::Map { .. } => "map type",
            Self::Chan { .. } => "channel type",
            Self::Func(_) => "function type",
            Self::Interface(_) => "interface type",
            Self::Variadic(_) => "variadic parameter",
            Self::Generic { .. } => "generic instantiation",
            Self::Other { kind, .. } => kind,
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Qualified { package, name } => write!(f, "{package}.{name}"),
            Self::Pointer(inner) => write!(f, "*{inner}"),
            Self::Slice(elem) => write!(f, "[]{elem}"),
            Self::Array { len, elem } => write!(f, "[{len}]{elem}"),
            Self::Map { key, value } => write!(f, "map[{key}]{value}"),
            Self::Chan { dir, elem } => write!(f, "{dir} {elem}"),
            Self::Func(func) => {
                f.write_str("func(")?;
                write_fields(f, &func.params)?;
                f.write_str(")")?;
                match func.results.as_slice() {
                    [] => Ok(()),
                    [single] if single.names.is_empty() => write!(f, " {}", single.ty),
                    results => {
                        f.write_str(" (")?;
                        write_fields(f, results)?;
                        f.write_str(")")
                    }
                }
            }
            Self::Interface(iface) if iface.elements.is_empty() => f.write_str("interface{}"),
            Self::Interface(_) => f.write_str("interface{ ... }"),
            Self::Variadic(elem) => write!(f, "...{elem}"),
            Self::Generic { base, args } => write!(f, "{base}{args}"),
            Self::Other { text, .. } => f.write_str(text),
        }
    }
}

fn write_fields(f: &mut fmt::Formatter<'_>, fields: &[Field]) -> fmt::Result {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        if !field.names.is_empty() {
            write!(f, "{} ", field.names.join(", "))?;
        }
        write!(f, "{}", field.ty)?;
    }
    Ok(())
}
