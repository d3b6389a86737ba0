use std::env::args;
use std::io::Write;
use switchscan::{Command, Parser};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut app = Parser::new(vec![
        Command::flag(
            "verbose",
            |out, _| Ok(writeln!(out, "verbose output enabled")?),
            "If to be loud",
        ),
        Command::property(
            "log-level",
            |out, level| Ok(writeln!(out, "log level: {level}")?),
            "The log level to use",
            "info",
        ),
        Command::property(
            "name",
            |out, name| Ok(writeln!(out, "hello, {name}")?),
            "Who to greet",
            "",
        ),
        Command::path(
            |out, path| Ok(writeln!(out, "input: {path}")?),
            "Files to read",
        ),
    ]);

    app.check(args().skip(1))?;
    Ok(())
}
