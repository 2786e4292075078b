//! How many tokens a descriptor consumes.

use std::fmt;

use log::trace;

use crate::cursor::Cursor;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NArgs {
    /// Exactly this many tokens.
    Exact(usize),
    /// Zero or one token.
    Optional,
    OneOrMore,
    ZeroOrMore,
}

impl fmt::Display for NArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NArgs::Exact(n) => write!(f, "{}", n),
            NArgs::Optional => f.write_str("?"),
            NArgs::OneOrMore => f.write_str("+"),
            NArgs::ZeroOrMore => f.write_str("*"),
        }
    }
}

/// True when `token` starts a short or long option.
///
/// Any token of two or more characters with a leading `-` counts, so a
/// negative number such as `-5` also ends a variable-length run.
pub fn looks_like_option(token: &str) -> bool {
    token.len() >= 2 && token.starts_with('-')
}

/// Pull the tokens that belong to a descriptor with arity `nargs`.
pub fn resolve(nargs: NArgs, args: &mut Cursor<'_>) -> Result<Vec<String>> {
    let mut taken = Vec::new();

    match nargs {
        NArgs::Exact(n) => {
            for _ in 0..n {
                taken.push(args.next()?);
            }
        }
        NArgs::Optional => {
            taken.extend(args.next_unless(looks_like_option));
        }
        NArgs::OneOrMore => {
            taken.push(args.next()?);
            while let Some(token) = args.next_unless(looks_like_option) {
                taken.push(token);
            }
        }
        NArgs::ZeroOrMore => {
            while let Some(token) = args.next_unless(looks_like_option) {
                taken.push(token);
            }
        }
    }

    trace!("nargs {} took {:?}", nargs, taken);
    Ok(taken)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn tokens(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn predicate() {
        assert!(looks_like_option("-x"));
        assert!(looks_like_option("--long"));
        assert!(looks_like_option("-5"));
        assert!(!looks_like_option("-"));
        assert!(!looks_like_option(""));
        assert!(!looks_like_option("file.txt"));
    }

    #[test]
    fn exact_takes_n_or_fails() {
        for n in 0..4 {
            let items = tokens(&["a", "-b", "c", "d", "e"][..n + 1]);
            let mut c = Cursor::new(&items);
            assert_eq!(resolve(NArgs::Exact(n), &mut c).unwrap().len(), n);
            assert_eq!(c.into_remaining().len(), 1);

            let short = tokens(&["a", "b", "c"][..n.saturating_sub(1)]);
            let mut c = Cursor::new(&short);
            if n > 0 {
                assert!(matches!(
                    resolve(NArgs::Exact(n), &mut c),
                    Err(Error::ExhaustedInput)
                ));
            }
        }
    }

    #[test]
    fn exact_ignores_option_shape() {
        let items = tokens(&["-x", "--y"]);
        let mut c = Cursor::new(&items);
        assert_eq!(resolve(NArgs::Exact(2), &mut c).unwrap(), items);
    }

    #[test]
    fn optional() {
        let items = tokens(&["-x"]);
        let mut c = Cursor::new(&items);
        assert!(resolve(NArgs::Optional, &mut c).unwrap().is_empty());
        assert_eq!(c.peek(), Some("-x"));

        let items = tokens(&["file.txt", "more"]);
        let mut c = Cursor::new(&items);
        assert_eq!(resolve(NArgs::Optional, &mut c).unwrap(), tokens(&["file.txt"]));

        let items: Vec<String> = Vec::new();
        let mut c = Cursor::new(&items);
        assert!(resolve(NArgs::Optional, &mut c).unwrap().is_empty());
    }

    #[test]
    fn optional_takes_a_single_dash() {
        let items = tokens(&["-"]);
        let mut c = Cursor::new(&items);
        assert_eq!(resolve(NArgs::Optional, &mut c).unwrap(), tokens(&["-"]));
    }

    #[test]
    fn one_or_more() {
        let items = tokens(&["a", "b", "-c", "d"]);
        let mut c = Cursor::new(&items);
        assert_eq!(resolve(NArgs::OneOrMore, &mut c).unwrap(), tokens(&["a", "b"]));
        assert_eq!(c.peek(), Some("-c"));

        // the first token is taken whatever it looks like
        let items = tokens(&["-a", "b"]);
        let mut c = Cursor::new(&items);
        assert_eq!(resolve(NArgs::OneOrMore, &mut c).unwrap(), tokens(&["-a", "b"]));

        let items: Vec<String> = Vec::new();
        let mut c = Cursor::new(&items);
        assert!(matches!(
            resolve(NArgs::OneOrMore, &mut c),
            Err(Error::ExhaustedInput)
        ));
    }

    #[test]
    fn zero_or_more() {
        let items = tokens(&["--x", "a"]);
        let mut c = Cursor::new(&items);
        assert!(resolve(NArgs::ZeroOrMore, &mut c).unwrap().is_empty());

        let items = tokens(&["a", "b", "c"]);
        let mut c = Cursor::new(&items);
        assert_eq!(resolve(NArgs::ZeroOrMore, &mut c).unwrap(), items);
        assert!(c.is_exhausted());
    }

    #[test]
    fn pushed_value_is_seen_first() {
        let items = tokens(&["b", "-c"]);
        let mut c = Cursor::new(&items);
        c.push("a".to_string());
        assert_eq!(resolve(NArgs::OneOrMore, &mut c).unwrap(), tokens(&["a", "b"]));
    }

    #[test]
    fn empty_pushed_value_counts_as_operand() {
        let items: Vec<String> = Vec::new();
        let mut c = Cursor::new(&items);
        c.push(String::new());
        assert_eq!(resolve(NArgs::Optional, &mut c).unwrap(), tokens(&[""]));
    }
}
