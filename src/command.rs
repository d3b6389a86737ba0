use std::error::Error;
use std::fmt;
use std::io::Write;

pub mod help;

/// The error type callbacks may fail with.
///
/// Anything implementing [`std::error::Error`] (and `anyhow::Error`) converts into it with `?`.
pub type CallbackError = Box<dyn Error + Send + Sync>;

type Callback = Box<dyn Fn(&mut dyn Write, &str) -> Result<(), CallbackError>>;

/// The kinds of arguments a [`Command`] can describe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// A named switch carrying no value (e.g. `-verbose`)
    Flag,
    /// A positional argument without a `-` or `/` prefix
    Path,
    /// A named option bound to the argument that follows it (e.g. `-output out.txt`)
    Property,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Flag => write!(f, "flag"),
            Kind::Path => write!(f, "path"),
            Kind::Property => write!(f, "property"),
        }
    }
}

/// A blueprint for one recognized command line argument, along with what to do when it shows up.
///
/// Commands are created through [`Command::flag`], [`Command::path`] and [`Command::property`],
/// and cannot be modified afterwards.
pub struct Command {
    kind: Kind,
    name: String,
    default_value: String,
    description: String,
    callback: Callback,
}

impl Command {
    /// Defines a new flag. The callback receives an empty value.
    pub fn flag<F>(name: impl Into<String>, callback: F, description: impl Into<String>) -> Self
    where
        F: Fn(&mut dyn Write, &str) -> Result<(), CallbackError> + 'static,
    {
        Command {
            kind: Kind::Flag,
            name: name.into(),
            default_value: String::new(),
            description: description.into(),
            callback: Box::new(callback),
        }
    }

    /// Defines a positional argument. The callback receives the argument verbatim.
    pub fn path<F>(callback: F, description: impl Into<String>) -> Self
    where
        F: Fn(&mut dyn Write, &str) -> Result<(), CallbackError> + 'static,
    {
        Command {
            kind: Kind::Path,
            name: String::new(),
            default_value: String::new(),
            description: description.into(),
            callback: Box::new(callback),
        }
    }

    /// Defines a new property. The callback receives the argument following the property name.
    ///
    /// If `default_value` is not blank and the property never appears on the command line, the
    /// callback is invoked with `default_value` once every argument has been scanned.
    pub fn property<F>(
        name: impl Into<String>,
        callback: F,
        description: impl Into<String>,
        default_value: impl Into<String>,
    ) -> Self
    where
        F: Fn(&mut dyn Write, &str) -> Result<(), CallbackError> + 'static,
    {
        Command {
            kind: Kind::Property,
            name: name.into(),
            default_value: default_value.into(),
            description: description.into(),
            callback: Box::new(callback),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the name matched against `-name` and `/name`. Empty for paths.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default_value(&self) -> &str {
        &self.default_value
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns true if this is a property whose default should be applied when it is absent
    pub fn has_default(&self) -> bool {
        self.kind == Kind::Property && !self.default_value.trim().is_empty()
    }

    pub(crate) fn invoke(&self, out: &mut dyn Write, value: &str) -> Result<(), CallbackError> {
        (self.callback)(out, value)
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("default_value", &self.default_value)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
