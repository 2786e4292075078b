//! Process-level handling of parse results: printing and exit statuses.

use std::io::Write;

use crate::dest::Destination;
use crate::parser::ArgumentParser;
use crate::Error;

/// Status for a bad command line.
pub const EXIT_USAGE: i32 = 2;
/// Status for a parser that was set up wrongly.
pub const EXIT_CONFIGURATION: i32 = 1;

/// Exit status a program should end with after `err`.
pub fn exit_status(err: &Error) -> i32 {
    match err {
        Error::HelpRequested => 0,
        Error::Configuration(_) => EXIT_CONFIGURATION,
        _ => EXIT_USAGE,
    }
}

impl ArgumentParser {
    /// Write what the user should see for `err` to `out`.
    ///
    /// Help requests get the full help text; input errors get the usage
    /// line, a pointer to `--help` and the message.
    pub fn write_error<W: Write>(&self, out: &mut W, err: &Error) -> std::io::Result<()> {
        match err {
            Error::HelpRequested => self.write_help(out),
            Error::Configuration(_) => writeln!(out, "{}: {}", self.prog_name(), err),
            _ => {
                self.write_usage(out)?;
                writeln!(
                    out,
                    "\nTry {} --help for help\n\n*** {}",
                    self.prog_name(),
                    err
                )
            }
        }
    }

    /// Parse the process arguments, or print and exit.
    ///
    /// Help goes to stdout with status 0; errors go to stderr with
    /// [`exit_status`].
    pub fn parse_or_exit<D: Destination + ?Sized>(&self, dest: &mut D) -> Vec<String> {
        match self.parse(dest) {
            Ok(rest) => rest,
            Err(err) => {
                let status = exit_status(&err);
                log::debug!("parse failed: {} (exit {})", err, status);
                let _ = if status == 0 {
                    self.write_error(&mut std::io::stdout().lock(), &err)
                } else {
                    self.write_error(&mut std::io::stderr().lock(), &err)
                };
                std::process::exit(status);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NArgs, Opt, Store};

    #[derive(Default)]
    struct Pargs {
        by: String,
    }

    crate::destination!(Pargs { by });

    fn parser() -> ArgumentParser {
        let mut p = ArgumentParser::new("").prog("pouet");
        p.option(
            Opt::new("by")
                .short('b')
                .dest("by")
                .nargs(NArgs::Exact(1))
                .action(Store),
        );
        p
    }

    fn render(p: &ArgumentParser, err: &Error) -> String {
        let mut buf = Vec::new();
        p.write_error(&mut buf, err).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn statuses() {
        assert_eq!(exit_status(&Error::HelpRequested), 0);
        assert_eq!(exit_status(&Error::UnknownOption("-t".into())), 2);
        assert_eq!(exit_status(&Error::ExhaustedInput), 2);
        assert_eq!(exit_status(&Error::Configuration("x".into())), 1);
    }

    #[test]
    fn user_error_output() {
        let p = parser();
        let err = p.parse_args(&mut Pargs::default(), ["--truc"]).unwrap_err();
        assert_eq!(
            render(&p, &err),
            "usage: pouet (options)\n\nTry pouet --help for help\n\n*** no such option --truc\n"
        );
    }

    #[test]
    fn help_output_is_the_help_text() {
        let p = parser();
        let err = p.parse_args(&mut Pargs::default(), ["-h"]).unwrap_err();
        assert_eq!(render(&p, &err), p.help());
    }

    #[test]
    fn configuration_output() {
        let p = parser();
        let err = Error::Configuration("invalid destination field: nope".into());
        assert_eq!(
            render(&p, &err),
            "pouet: configuration error: invalid destination field: nope\n"
        );
    }
}
