//! Signature extraction.
//!
//! Walks the top-level type declarations of a [`SourceFile`] and builds a
//! [`SignatureTable`] from every interface it finds. Only interfaces whose
//! methods use bare named types are accepted; anything else aborts the run.

use crate::errors::{MockgenError, Result};
use crate::syntax::{Decl, Field, FuncType, InterfaceType, SourceFile, TypeExpr, TypeSpec};
use crate::table::{Item, Method, SignatureTable};
use tracing::debug;

/// Build the signature table for every interface declared in `file`.
pub fn extract(file: &SourceFile) -> Result<SignatureTable> {
    let mut table = SignatureTable::new();

    for decl in &file.decls {
        match decl {
            Decl::Type(spec) => match &spec.ty {
                TypeExpr::Interface(iface) => extract_interface(spec, iface, &mut table)?,
                _ => debug!(name = %spec.name, shape = spec.ty.shape(), "Skipping non-interface type"),
            },
            Decl::Other { .. } => {}
        }
    }

    Ok(table)
}

fn extract_interface(
    spec: &TypeSpec,
    iface: &InterfaceType,
    table: &mut SignatureTable,
) -> Result<()> {
    if let Some(params) = &spec.type_params {
        return Err(MockgenError::UnsupportedType {
            location: format!("interface {}", spec.name),
            line: spec.line,
            ty: format!("{}{}", spec.name, params),
            shape: "generic interface".to_string(),
        });
    }

    debug!(
        name = %spec.name,
        elements = iface.elements.len(),
        "Found an interface"
    );

    // Created before the elements are checked so zero-method interfaces still get an entry.
    table.entry(&spec.name);

    for element in &iface.elements {
        let method = extract_method(&spec.name, element)?;
        table.entry(&spec.name).methods.push(method);
    }

    Ok(())
}

fn extract_method(interface: &str, element: &Field) -> Result<Method> {
    let func = match &element.ty {
        TypeExpr::Func(func) => func,
        other => {
            return Err(MockgenError::UnsupportedElement {
                interface: interface.to_string(),
                line: element.line,
                element: other.to_string(),
            })
        }
    };

    let name = match element.names.as_slice() {
        [name] => name,
        names => {
            return Err(MockgenError::MalformedMethod {
                interface: interface.to_string(),
                line: element.line,
                names: names.to_vec(),
            })
        }
    };

    let location = format!("{interface}.{name}");
    let FuncType { params, results } = func;

    Ok(Method {
        name: name.clone(),
        inputs: expand_fields(&location, params)?,
        outputs: expand_fields(&location, results)?,
    })
}

/// Expand parameter groups into one [`Item`] per bound name.
///
/// A group without names becomes a single anonymous item.
fn expand_fields(location: &str, fields: &[Field]) -> Result<Vec<Item>> {
    let mut items = Vec::new();

    for field in fields {
        let ty = bare_type_name(location, field)?;
        if field.names.is_empty() {
            items.push(Item::anonymous(ty));
        } else {
            items.extend(field.names.iter().map(|name| Item::named(name, ty)));
        }
    }

    Ok(items)
}

fn bare_type_name<'a>(location: &str, field: &'a Field) -> Result<&'a str> {
    match &field.ty {
        TypeExpr::Named(name) => Ok(name),
        other => Err(MockgenError::UnsupportedType {
            location: location.to_string(),
            line: field.line,
            ty: other.to_string(),
            shape: other.shape().to_string(),
        }),
    }
}
