use super::{Command, Kind};
use std::io::{self, Write};

const HELP_NAMES: [&str; 2] = ["help", "?"];

/// Returns true if an otherwise unmatched option name asks for help
pub fn requested_help(name: &str) -> bool {
    HELP_NAMES.contains(&name)
}

pub fn write_help(mut w: impl Write, commands: &[Command]) -> io::Result<()> {
    writeln!(&mut w, "Available flags:")?;
    for name in HELP_NAMES {
        writeln!(&mut w, "\t{name}\tDisplays this help text")?;
    }

    for flag in commands.iter().filter(|c| c.kind == Kind::Flag) {
        writeln!(&mut w, "\t{}\t{}", flag.name, flag.description)?;
    }

    writeln!(&mut w, "Available Properties:")?;
    for prop in commands.iter().filter(|c| c.kind == Kind::Property) {
        if prop.has_default() {
            writeln!(
                &mut w,
                "\t{}(={})\t{}",
                prop.name, prop.default_value, prop.description
            )?;
        } else {
            writeln!(&mut w, "\t{}\t{}", prop.name, prop.description)?;
        }
    }

    w.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_: &mut dyn Write, _: &str) -> Result<(), crate::CallbackError> {
        Ok(())
    }

    #[test]
    fn help_names() {
        assert!(requested_help("help"));
        assert!(requested_help("?"));
        assert!(!requested_help("Help"));
        assert!(!requested_help("h"));
        assert!(!requested_help(""));
    }

    #[test]
    fn help_text() {
        let commands = [
            Command::flag("v", noop, "verbose"),
            Command::path(noop, "input file"),
            Command::property("o", noop, "output", "out.txt"),
            Command::flag("q", noop, ""),
            Command::property("level", noop, "log level", ""),
        ];

        let mut buf = vec![];
        write_help(&mut buf, &commands).unwrap();
        let result = String::from_utf8(buf).unwrap();

        assert_eq!(
            result,
            concat!(
                "Available flags:\n",
                "\thelp\tDisplays this help text\n",
                "\t?\tDisplays this help text\n",
                "\tv\tverbose\n",
                "\tq\t\n",
                "Available Properties:\n",
                "\to(=out.txt)\toutput\n",
                "\tlevel\tlog level\n",
            )
        );
    }

    #[test]
    fn help_text_without_commands() {
        let mut buf = vec![];
        write_help(&mut buf, &[]).unwrap();
        let result = String::from_utf8(buf).unwrap();

        assert_eq!(
            result,
            concat!(
                "Available flags:\n",
                "\thelp\tDisplays this help text\n",
                "\t?\tDisplays this help text\n",
                "Available Properties:\n",
            )
        );
    }

    #[test]
    fn whitespace_default_is_listed_without_default() {
        let commands = [Command::property("p", noop, "desc", "  ")];
        let mut buf = vec![];
        write_help(&mut buf, &commands).unwrap();
        let result = String::from_utf8(buf).unwrap();
        assert!(result.ends_with("Available Properties:\n\tp\tdesc\n"));
    }
}
