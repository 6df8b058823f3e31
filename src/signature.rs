use std::fmt;

/// A method as far as exception checking cares: name, parameter types and
/// the declared `throws` list in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct MethodSignature {
    name: String,
    parameters: Vec<String>,
    throws: Vec<String>,
}

impl MethodSignature {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            throws: Vec::new(),
        }
    }

    pub fn with_parameters<I, S>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameters = parameters.into_iter().map(Into::into).collect();
        self
    }

    pub fn throwing<I, S>(mut self, throws: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.throws = throws.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    pub fn throws(&self) -> &[String] {
        &self.throws
    }
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.parameters.join(", "))?;
        if !self.throws.is_empty() {
            write!(f, " throws {}", self.throws.join(", "))?;
        }
        Ok(())
    }
}

/// A parent method and the candidate that overrides it, checked together
#[derive(Debug, Clone, Copy)]
pub struct OverridePair<'a> {
    parent: &'a MethodSignature,
    child: &'a MethodSignature,
}

impl<'a> OverridePair<'a> {
    pub fn new(parent: &'a MethodSignature, child: &'a MethodSignature) -> Self {
        Self { parent, child }
    }

    pub fn parent(&self) -> &'a MethodSignature {
        self.parent
    }

    pub fn child(&self) -> &'a MethodSignature {
        self.child
    }
}
