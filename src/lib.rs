//! A callback-driven matcher for command line arguments
//!
//! Applications declare an ordered list of [`Command`]s and hand it to a [`Parser`] along with the
//! raw arguments:
//! ```text
//! tool -verbose /output result.txt data.csv
//! ```
//!
//! Argument | Matched by
//! -|-
//! `-name` or `/name`|A [`Kind::Flag`] called `name`
//! `-name value` or `/name value`|A [`Kind::Property`] called `name`, bound to `value`
//! Anything else|A [`Kind::Path`], which receives the argument verbatim
//!
//!
//! # Matching
//!
//! - Each argument is handed to the first declared command that matches it. Blank arguments are
//! skipped.
//! - A property always consumes the argument after its name as its value, whatever it looks like.
//! - Properties declared with a default value that never show up on the command line are invoked
//! with their default after the last argument.
//! - `-help`, `/help`, `-?` and `/?` print the list of flags and properties, unless a declared
//! command claims them first.
//!
//! ```
//! use std::io::Write;
//! use switchscan::{Command, Parser};
//!
//! let commands = vec![
//!     Command::flag("v", |out, _| Ok(writeln!(out, "verbose")?), "Be loud"),
//!     Command::property("o", |out, v| Ok(writeln!(out, "output: {v}")?), "Output file", "out.txt"),
//!     Command::path(|out, v| Ok(writeln!(out, "input: {v}")?), "Input file"),
//! ];
//!
//! let mut parser = Parser::with_output(commands, vec![]);
//! parser.check(["-v", "data.csv"])?;
//!
//! let output = String::from_utf8(parser.into_output())?;
//! assert_eq!(output, "verbose\ninput: data.csv\noutput: out.txt\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod command;
mod parser;

pub use command::{CallbackError, Command, Kind};
pub use parser::{Parser, ScanError};
