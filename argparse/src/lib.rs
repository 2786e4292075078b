//! Command-line parsing into the typed fields of a caller's record.
//!
//! POSIX/GNU style conventions:
//! - short flags, clustered (`-abc`) or not
//! - long flags, with the value joined (`--by=x`) or separate (`--by x`)
//! - `--` ends option processing
//! - fixed and variable arity (`?`, `+`, `*`) for options and positionals
//!
//! ```
//! use argparse::{destination, AppendConst, Arg, ArgumentParser, NArgs, Opt, Store};
//!
//! #[derive(Default)]
//! struct Args {
//!     by: String,
//!     flags: Vec<String>,
//!     files: Vec<String>,
//! }
//!
//! destination!(Args { by, flags, files });
//!
//! let mut parser = ArgumentParser::new("Demo program.");
//! parser
//!     .option(Opt::new("by").short('b').dest("by").nargs(NArgs::Exact(1)).action(Store))
//!     .option(Opt::new("").short('a').dest("flags").action(AppendConst::new("aflag")))
//!     .argument(Arg::new("files").nargs(NArgs::ZeroOrMore));
//!
//! let mut args = Args::default();
//! parser.parse_args(&mut args, ["-a", "--by=x", "one", "two"]).unwrap();
//! assert_eq!(args.by, "x");
//! assert_eq!(args.flags, vec!["aflag"]);
//! assert_eq!(args.files, vec!["one", "two"]);
//! ```

mod action;
mod arity;
mod cli;
mod cursor;
mod dest;
mod error;
mod help;
mod parser;
mod value;

pub use action::{Action, Append, AppendConst, Choice, Help, Store, StoreConst};
pub use arity::{looks_like_option, resolve, NArgs};
pub use cli::{exit_status, EXIT_CONFIGURATION, EXIT_USAGE};
pub use cursor::Cursor;
pub use dest::{Destination, Field, ScalarField, SequenceField, Slot};
pub use error::{Error, Result};
pub use help::word_wrap;
pub use parser::{Arg, ArgumentParser, Opt, END_OF_OPTIONS};
pub use value::{Kind, Primitive, Value};
