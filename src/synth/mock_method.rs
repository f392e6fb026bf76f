use std::collections::HashSet;
use std::fmt;

use crate::table::{Item, Method};

use super::accessor::Accessor;

/// Forwarding implementation of one interface method on the mock type.
///
/// ```go
/// func (m *FooMock) Bar(x int) (string, error) {
/// 	args := m.Called(x)
/// 	return args.String(0), args.Error(1)
/// }
/// ```
pub(crate) struct MockMethod<'a> {
    method: &'a Method,
    mock_name: &'a str,
    receiver: String,
    args: String,
    params: Vec<String>,
    results: Vec<Option<String>>,
}

impl<'a> MockMethod<'a> {
    pub(crate) fn new(method: &'a Method, mock_name: &'a str) -> Self {
        // Types named in `.(*T)` casts must not be shadowed inside the body.
        let cast_types: HashSet<&str> = method
            .outputs
            .iter()
            .filter_map(|item| match Accessor::for_type(&item.ty) {
                Accessor::Generic(ty) => Some(ty),
                _ => None,
            })
            .collect();
        let usable = |item: &'a Item| usable_name(item).filter(|name| !cast_types.contains(name));

        let mut scope = Scope::default();
        for ty in &cast_types {
            scope.reserve(ty);
        }
        for item in method.inputs.iter().chain(&method.outputs) {
            if let Some(name) = usable(item) {
                scope.reserve(name);
            }
        }

        let params = method
            .inputs
            .iter()
            .enumerate()
            .map(|(i, item)| match usable(item) {
                Some(name) => name.to_string(),
                None => scope.fresh(&format!("arg{i}")),
            })
            .collect();

        let results = method
            .outputs
            .iter()
            .map(|item| match (&item.name, usable(item)) {
                (None, _) => None,
                (Some(_), Some(name)) => Some(name.to_string()),
                (Some(name), None) if name == "_" => Some(name.clone()),
                (Some(name), None) => Some(scope.fresh(name)),
            })
            .collect();

        let receiver = scope.fresh("m");
        let args = scope.fresh("args");

        Self {
            method,
            mock_name,
            receiver,
            args,
            params,
            results,
        }
    }

    fn write_results(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outputs = &self.method.outputs;
        match self.results.as_slice() {
            [] => Ok(()),
            [None] => write!(f, " {}", outputs[0].ty),
            results => {
                f.write_str(" (")?;
                for (i, (name, item)) in results.iter().zip(outputs).enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    match name {
                        Some(name) => write!(f, "{name} {}", item.ty)?,
                        None => f.write_str(&item.ty)?,
                    }
                }
                f.write_str(")")
            }
        }
    }
}

impl fmt::Display for MockMethod<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            method,
            mock_name,
            receiver,
            args,
            params,
            ..
        } = self;

        let signature = params
            .iter()
            .zip(&method.inputs)
            .map(|(name, item)| format!("{name} {}", item.ty))
            .collect::<Vec<_>>()
            .join(", ");
        let call = format!("{receiver}.Called({})", params.join(", "));

        write!(f, "func ({receiver} *{mock_name}) {}({signature})", method.name)?;
        self.write_results(f)?;
        f.write_str(" {\n")?;

        if method.outputs.is_empty() {
            writeln!(f, "\t{call}")?;
        } else {
            let results = method
                .outputs
                .iter()
                .enumerate()
                .map(|(i, item)| Accessor::for_type(&item.ty).call(args, i).to_string())
                .collect::<Vec<_>>()
                .join(", ");

            writeln!(f, "\t{args} := {call}")?;
            writeln!(f, "\treturn {results}")?;
        }

        f.write_str("}\n")
    }
}

/// Identifiers visible inside the generated method body.
#[derive(Default)]
struct Scope {
    taken: HashSet<String>,
}

impl Scope {
    fn reserve(&mut self, name: &str) {
        self.taken.insert(name.to_string());
    }

    /// Claim `base`, prefixing underscores until it does not clash.
    fn fresh(&mut self, base: &str) -> String {
        let mut name = base.to_string();
        while self.taken.contains(&name) {
            name.insert(0, '_');
        }
        self.taken.insert(name.clone());
        name
    }
}

/// Name an input can be referenced by, if any. `_` cannot be.
fn usable_name(item: &Item) -> Option<&str> {
    item.name.as_deref().filter(|name| *name != "_")
}
