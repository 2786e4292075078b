//! Descriptors, the parser that holds them, and the dispatch loop.

use log::debug;

use crate::action::{Action, Help, Store, StoreConst};
use crate::arity::{self, NArgs};
use crate::cursor::Cursor;
use crate::dest::{Destination, Slot};
use crate::{Error, Result};

/// Token after which everything is positional.
pub const END_OF_OPTIONS: &str = "--";

const DEFAULT_WRAP_WIDTH: usize = 80;

// ============================================================================
// Opt — optional argument descriptor
// ============================================================================

pub struct Opt {
    pub(crate) short_name: Option<char>,
    pub(crate) long_name: String,
    pub(crate) dest: String,
    pub(crate) nargs: NArgs,
    pub(crate) action: Box<dyn Action>,
    pub(crate) metavar: Option<String>,
    pub(crate) help: String,
}

impl Opt {
    /// An option called `--name`; an empty name means short-only.
    ///
    /// Until told otherwise it is a flag: no values, storing `true`.
    pub fn new(name: &str) -> Self {
        Opt {
            short_name: None,
            long_name: name.to_string(),
            dest: String::new(),
            nargs: NArgs::Exact(0),
            action: Box::new(StoreConst::new(true)),
            metavar: None,
            help: String::new(),
        }
    }

    pub fn short(mut self, c: char) -> Self {
        self.short_name = Some(c);
        self
    }

    /// Name of the record field this option writes.
    pub fn dest(mut self, field: &str) -> Self {
        self.dest = field.to_string();
        self
    }

    pub fn nargs(mut self, nargs: NArgs) -> Self {
        self.nargs = nargs;
        self
    }

    pub fn action<A: Action + 'static>(mut self, action: A) -> Self {
        self.action = Box::new(action);
        self
    }

    pub fn metavar(mut self, metavar: &str) -> Self {
        self.metavar = Some(metavar.to_string());
        self
    }

    pub fn help(mut self, text: &str) -> Self {
        self.help = text.to_string();
        self
    }

    pub fn short_name(&self) -> Option<char> {
        self.short_name
    }

    pub fn long_name(&self) -> &str {
        &self.long_name
    }

    /// Display name of the values, empty for options that take none.
    pub fn display_metavar(&self) -> String {
        if let Some(ref m) = self.metavar {
            return m.clone();
        }
        if self.nargs == NArgs::Exact(0) {
            return String::new();
        }
        if self.long_name.is_empty() {
            return "VALUE".to_string();
        }
        self.long_name.to_uppercase()
    }
}

// ============================================================================
// Arg — positional argument descriptor
// ============================================================================

pub struct Arg {
    pub(crate) dest: String,
    pub(crate) nargs: NArgs,
    pub(crate) action: Box<dyn Action>,
    pub(crate) metavar: Option<String>,
    pub(crate) help: String,
}

impl Arg {
    /// A positional written to field `dest`, taking one token by default.
    pub fn new(dest: &str) -> Self {
        Arg {
            dest: dest.to_string(),
            nargs: NArgs::Exact(1),
            action: Box::new(Store),
            metavar: None,
            help: String::new(),
        }
    }

    pub fn nargs(mut self, nargs: NArgs) -> Self {
        self.nargs = nargs;
        self
    }

    pub fn action<A: Action + 'static>(mut self, action: A) -> Self {
        self.action = Box::new(action);
        self
    }

    pub fn metavar(mut self, metavar: &str) -> Self {
        self.metavar = Some(metavar.to_string());
        self
    }

    pub fn help(mut self, text: &str) -> Self {
        self.help = text.to_string();
        self
    }

    pub fn display_metavar(&self) -> String {
        match self.metavar {
            Some(ref m) => m.clone(),
            None => self.dest.to_uppercase(),
        }
    }
}

// ============================================================================
// ArgumentParser
// ============================================================================

pub struct ArgumentParser {
    pub(crate) description: String,
    pub(crate) prog: Option<String>,
    pub(crate) word_wrap_width: usize,
    pub(crate) options: Vec<Opt>,
    pub(crate) arguments: Vec<Arg>,
}

impl ArgumentParser {
    /// A parser with `-h`/`--help` already registered.
    pub fn new(description: &str) -> Self {
        let mut parser = ArgumentParser {
            description: description.to_string(),
            prog: None,
            word_wrap_width: DEFAULT_WRAP_WIDTH,
            options: Vec::new(),
            arguments: Vec::new(),
        };
        parser.option(
            Opt::new("help")
                .short('h')
                .action(Help)
                .help("Shows this help message before exiting."),
        );
        parser
    }

    /// Program name used in usage text. Defaults to the basename of argv[0].
    pub fn prog(mut self, name: &str) -> Self {
        self.prog = Some(name.to_string());
        self
    }

    pub fn word_wrap_width(mut self, width: usize) -> Self {
        self.word_wrap_width = width;
        self
    }

    pub fn option(&mut self, opt: Opt) -> &mut Self {
        self.options.push(opt);
        self
    }

    /// Positionals are matched in the order they are added.
    pub fn argument(&mut self, arg: Arg) -> &mut Self {
        self.arguments.push(arg);
        self
    }

    pub fn options(&self) -> &[Opt] {
        &self.options
    }

    pub fn arguments(&self) -> &[Arg] {
        &self.arguments
    }

    pub fn prog_name(&self) -> String {
        if let Some(ref p) = self.prog {
            return p.clone();
        }
        std::env::args()
            .next()
            .as_deref()
            .map(std::path::Path::new)
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "program".to_string())
    }

    /// Parse the process arguments, argv[0] excluded.
    pub fn parse<D: Destination + ?Sized>(&self, dest: &mut D) -> Result<Vec<String>> {
        self.parse_args(dest, std::env::args().skip(1))
    }

    /// Parse `args` into `dest`.
    ///
    /// Returns the positional tokens no positional descriptor claimed.
    pub fn parse_args<D, I, S>(&self, dest: &mut D, args: I) -> Result<Vec<String>>
    where
        D: Destination + ?Sized,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = args.into_iter().map(Into::into).collect();
        let mut args = Cursor::new(&tokens);
        let mut positionals = Vec::new();

        while !args.is_exhausted() {
            let token = args.next()?;

            if token == END_OF_OPTIONS {
                debug!("end of options");
                while !args.is_exhausted() {
                    positionals.push(args.next()?);
                }
                break;
            }

            if let Some(body) = token.strip_prefix("--") {
                self.parse_long_option(body, &mut args, dest)?;
            } else if arity::looks_like_option(&token) {
                self.parse_short_options(&token[1..], &mut args, dest)?;
            } else {
                positionals.push(token);
            }
        }

        debug!("matching positionals {:?}", positionals);
        let mut rest = Cursor::new(&positionals);
        for arg in &self.arguments {
            bind(&arg.dest, arg.nargs, arg.action.as_ref(), &mut rest, dest)?;
        }

        Ok(rest.into_remaining())
    }

    fn parse_long_option<D: Destination + ?Sized>(
        &self,
        body: &str,
        args: &mut Cursor<'_>,
        dest: &mut D,
    ) -> Result<()> {
        let (name, inline) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (body, None),
        };

        let opt = self
            .options
            .iter()
            .find(|o| !o.long_name.is_empty() && o.long_name == name)
            .ok_or_else(|| Error::UnknownOption(format!("--{}", name)))?;
        debug!("long option --{} (nargs {})", name, opt.nargs);

        if let Some(value) = inline {
            args.push(value.to_string());
        }
        bind(&opt.dest, opt.nargs, opt.action.as_ref(), args, dest)?;

        let Some(value) = args.take_pushed() else {
            return Ok(());
        };
        let option = format!("--{}", name);
        if opt.nargs != NArgs::Exact(0) && arity::looks_like_option(&value) {
            Err(Error::OptionLikeValue { option, value })
        } else {
            Err(Error::UnwantedValue { option, value })
        }
    }

    fn parse_short_options<D: Destination + ?Sized>(
        &self,
        cluster: &str,
        args: &mut Cursor<'_>,
        dest: &mut D,
    ) -> Result<()> {
        for c in cluster.chars() {
            let opt = self
                .options
                .iter()
                .find(|o| o.short_name == Some(c))
                .ok_or_else(|| Error::UnknownOption(format!("-{}", c)))?;
            debug!("short option -{} (nargs {})", c, opt.nargs);
            bind(&opt.dest, opt.nargs, opt.action.as_ref(), args, dest)?;
        }
        Ok(())
    }
}

/// Resolve the destination field, pull the descriptor's tokens and run its
/// action.
fn bind<D: Destination + ?Sized>(
    field: &str,
    nargs: NArgs,
    action: &dyn Action,
    args: &mut Cursor<'_>,
    dest: &mut D,
) -> Result<()> {
    let slot: Option<Slot<'_>> = if field.is_empty() {
        None
    } else {
        let slot = dest
            .slot(field)
            .ok_or_else(|| Error::Configuration(format!("invalid destination field: {}", field)))?;
        Some(slot)
    };

    let values = arity::resolve(nargs, args)?;
    action.apply(nargs, &values, slot)
}
