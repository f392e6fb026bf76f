//! Signature table: interface name to ordered method signatures.

/// A parameter or result slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// `None` when the source declared the slot without a name
    pub name: Option<String>,
    /// Declared type, always a bare identifier
    pub ty: String,
}

impl Item {
    pub fn named(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ty: ty.into(),
        }
    }

    pub fn anonymous(ty: impl Into<String>) -> Self {
        Self {
            name: None,
            ty: ty.into(),
        }
    }
}

/// One interface method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    pub inputs: Vec<Item>,
    pub outputs: Vec<Item>,
}

/// An interface and its methods in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    pub name: String,
    pub methods: Vec<Method>,
}

/// Ordered mapping from interface name to its methods.
///
/// Entries keep the order in which interfaces were first seen, so every
/// consumer iterates them deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignatureTable {
    interfaces: Vec<Interface>,
}

impl SignatureTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the entry for `name`, creating an empty one on first sight.
    pub fn entry(&mut self, name: &str) -> &mut Interface {
        let index = match self.interfaces.iter().position(|i| i.name == name) {
            Some(index) => index,
            None => {
                self.interfaces.push(Interface {
                    name: name.to_string(),
                    methods: Vec::new(),
                });
                self.interfaces.len() - 1
            }
        };
        &mut self.interfaces[index]
    }

    pub fn get(&self, name: &str) -> Option<&Interface> {
        self.interfaces.iter().find(|i| i.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Interface> {
        self.interfaces.iter()
    }

    pub fn len(&self) -> usize {
        self.interfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }

    /// Total number of methods across all interfaces.
    pub fn method_count(&self) -> usize {
        self.interfaces.iter().map(|i| i.methods.len()).sum()
    }
}

impl<'a> IntoIterator for &'a SignatureTable {
    type Item = &'a Interface;
    type IntoIter = std::slice::Iter<'a, Interface>;

    fn into_iter(self) -> Self::IntoIter {
        self.interfaces.iter()
    }
}
