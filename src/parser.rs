use crate::command::{help, CallbackError, Command, Kind};
use std::io::{self, stdout, Stdout, Write};
use tracing::{debug, trace, warn};

/// A variant of this enum is returned when a scan could not run to completion
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("property '{name}' expects a value but none was given")]
    MissingValue { name: String },
    #[error("the {kind} callback{} failed", label(.name))]
    Callback {
        kind: Kind,
        name: String,
        source: CallbackError,
    },
    #[error("could not write help text")]
    Output(#[from] io::Error),
}

fn label(name: &str) -> String {
    if name.is_empty() {
        String::new()
    } else {
        format!(" for '{name}'")
    }
}

/// Matches command line arguments against an ordered list of [`Command`]s
pub struct Parser<W = Stdout> {
    commands: Vec<Command>,
    out: W,
}

impl Parser<Stdout> {
    /// Creates a parser that writes help and callback output to standard output
    pub fn new(commands: Vec<Command>) -> Self {
        Self::with_output(commands, stdout())
    }
}

impl<W: Write> Parser<W> {
    /// Creates a parser that writes help and callback output to `out`
    pub fn with_output(commands: Vec<Command>, out: W) -> Self {
        Parser { commands, out }
    }

    /// Declares one more command. It has the lowest priority of all commands declared so far.
    pub fn add(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Writes the list of available flags and properties
    pub fn display_help(&mut self) -> io::Result<()> {
        help::write_help(&mut self.out, &self.commands)
    }

    /// Scans `args` (without the executable name) and invokes the callback of every command they
    /// match.
    ///
    /// Each argument is handled by the first declared command it matches. Properties with a
    /// default that never appeared are resolved after the last argument. An unmatched `-help`,
    /// `/help`, `-?` or `/?` prints the help text.
    ///
    /// The scan stops at the first failing callback, or when the last argument names a property
    /// and leaves it without a value. Defaults are not applied in either case.
    pub fn check<I, T>(&mut self, args: I) -> Result<(), ScanError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut args = args.into_iter().map(|s| s.into());

        // Indices of properties whose defaults still need applying, in declaration order
        let mut pending = self
            .commands
            .iter()
            .enumerate()
            .filter(|(_, c)| c.has_default())
            .map(|(idx, _)| idx)
            .collect::<Vec<_>>();

        while let Some(arg) = args.next() {
            if arg.trim().is_empty() {
                trace!("skipping blank argument");
                continue;
            }

            let option = option_name(&arg);
            let mut hit = false;

            for (idx, cmd) in self.commands.iter().enumerate() {
                match (cmd.kind(), option) {
                    (Kind::Flag, Some(name)) if name == cmd.name() => {
                        debug!(flag = name, "matched flag");
                        dispatch(cmd, &mut self.out, "")?;
                    }
                    (Kind::Path, None) => {
                        debug!(path = %arg, "matched path");
                        dispatch(cmd, &mut self.out, &arg)?;
                    }
                    (Kind::Property, Some(name)) if name == cmd.name() => {
                        // The value is taken as-is, even if it looks like another option
                        let Some(value) = args.next() else {
                            return Err(ScanError::MissingValue {
                                name: name.to_string(),
                            });
                        };
                        pending.retain(|&p| p != idx);
                        debug!(property = name, value = %value, "matched property");
                        dispatch(cmd, &mut self.out, &value)?;
                    }
                    _ => continue,
                }
                hit = true;
                break;
            }

            if hit {
                continue;
            }

            match option {
                Some(name) if help::requested_help(name) => self.display_help()?,
                Some(name) => warn!(option = name, "ignoring unrecognized option"),
                None => debug!(argument = %arg, "no command accepts positional arguments"),
            }
        }

        for idx in pending {
            let cmd = &self.commands[idx];
            debug!(property = cmd.name(), value = cmd.default_value(), "applying default");
            dispatch(cmd, &mut self.out, cmd.default_value())?;
        }

        Ok(())
    }
}

// `-name` and `/name` are options, anything else is positional
fn option_name(arg: &str) -> Option<&str> {
    arg.strip_prefix('-').or_else(|| arg.strip_prefix('/'))
}

fn dispatch(cmd: &Command, out: &mut dyn Write, value: &str) -> Result<(), ScanError> {
    cmd.invoke(out, value).map_err(|source| ScanError::Callback {
        kind: cmd.kind(),
        name: cmd.name().to_string(),
        source,
    })
}
