//! Type-directed result retrieval.
//!
//! testify's `mock.Arguments` exposes typed getters for a few well known
//! types and an untyped `Get` for everything else. The accessor for a result
//! is picked from its declared type alone.

use std::fmt;

/// Accessor used to fetch one programmed result from `mock.Arguments`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessor<'a> {
    /// `args.Error(i)`
    Error,
    /// `args.Int(i)`
    Int,
    /// `args.String(i)`
    String,
    /// `args.Get(i).(*T)`
    ///
    /// Assumes the caller programs a `*T`. Results declared as a value type
    /// `T` do not type-check against this cast.
    Generic(&'a str),
}

impl<'a> Accessor<'a> {
    pub fn for_type(ty: &'a str) -> Self {
        match ty {
            "error" => Self::Error,
            "int" => Self::Int,
            "string" => Self::String,
            other => Self::Generic(other),
        }
    }

    /// Expression retrieving result `index` from the arguments variable `args`.
    pub fn call(self, args: &'a str, index: usize) -> AccessorCall<'a> {
        AccessorCall {
            accessor: self,
            args,
            index,
        }
    }
}

/// A rendered accessor invocation, e.g. `args.Error(1)`.
#[derive(Debug, Clone, Copy)]
pub struct AccessorCall<'a> {
    accessor: Accessor<'a>,
    args: &'a str,
    index: usize,
}

impl fmt::Display for AccessorCall<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { accessor, args, index } = self;
        match accessor {
            Accessor::Error => write!(f, "{args}.Error({index})"),
            Accessor::Int => write!(f, "{args}.Int({index})"),
            Accessor::String => write!(f, "{args}.String({index})"),
            Accessor::Generic(ty) => write!(f, "{args}.Get({index}).(*{ty})"),
        }
    }
}
