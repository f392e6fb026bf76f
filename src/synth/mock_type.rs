use std::fmt;

use crate::table::Interface;

use super::mock_method::MockMethod;

/// Mock declarations for one interface: the satisfaction assertion, the mock
/// struct embedding the recorder, and one forwarding method per interface
/// method.
pub(crate) struct MockType<'a> {
    pub(crate) interface: &'a Interface,
    pub(crate) mock_name: String,
    /// Qualified recorder base type, e.g. `mock.Mock`
    pub(crate) base_type: String,
}

impl fmt::Display for MockType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            interface,
            mock_name,
            base_type,
        } = self;
        let name = &interface.name;

        writeln!(f, "var _ {name} = (*{mock_name})(nil)")?;
        writeln!(f)?;
        writeln!(f, "// {mock_name} is a mock implementation of {name}.")?;
        writeln!(f, "type {mock_name} struct {{")?;
        writeln!(f, "\t{base_type}")?;
        writeln!(f, "}}")?;

        for method in &interface.methods {
            writeln!(f)?;
            write!(f, "{}", MockMethod::new(method, mock_name))?;
        }

        Ok(())
    }
}
