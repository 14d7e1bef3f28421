//! Minimal Java code-model elements that accept Javadoc lines.
//!
//! These stand in for the generator's own element types. Anything that can
//! store comment lines only needs to implement [`JavaElement`].

/// An element that collects Javadoc lines in the order they are written.
pub trait JavaElement {
    fn add_javadoc_line(&mut self, line: String);
}

macro_rules! javadoc_element {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name {
            name: String,
            javadoc_lines: Vec<String>,
        }

        impl $name {
            pub fn new(name: impl Into<String>) -> Self {
                Self {
                    name: name.into(),
                    javadoc_lines: Vec::new(),
                }
            }

            pub fn name(&self) -> &str {
                &self.name
            }

            pub fn javadoc_lines(&self) -> &[String] {
                &self.javadoc_lines
            }
        }

        impl JavaElement for $name {
            fn add_javadoc_line(&mut self, line: String) {
                self.javadoc_lines.push(line);
            }
        }
    };
}

javadoc_element!(
    /// A generated field.
    Field
);
javadoc_element!(
    /// A generated top-level class, typically the model class for a table.
    TopLevelClass
);
javadoc_element!(
    /// A class nested inside another generated class.
    InnerClass
);
javadoc_element!(
    /// An enum nested inside a generated class.
    InnerEnum
);

/// A declared method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub type_name: String,
}

impl Parameter {
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// A generated method.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Method {
    name: String,
    parameters: Vec<Parameter>,
    javadoc_lines: Vec<String>,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn add_parameter(&mut self, parameter: Parameter) {
        self.parameters.push(parameter);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn javadoc_lines(&self) -> &[String] {
        &self.javadoc_lines
    }
}

impl JavaElement for Method {
    fn add_javadoc_line(&mut self, line: String) {
        self.javadoc_lines.push(line);
    }
}

/// A generated Java source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompilationUnit {
    pub file_comment_lines: Vec<String>,
}

/// An element of a generated XML mapper file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    pub comment_lines: Vec<String>,
}
