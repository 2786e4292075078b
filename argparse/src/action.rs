//! What happens to the tokens a descriptor consumed.

use crate::arity::NArgs;
use crate::dest::Slot;
use crate::value::{Kind, Value};
use crate::{Error, Result};

/// Behavior run once the arity of a descriptor has been resolved.
///
/// `dest` is `None` for descriptors bound to no field; built-in actions
/// then do nothing. Any `Fn(NArgs, &[String], Option<Slot>) -> Result<()>`
/// closure is an action too.
pub trait Action: Send + Sync {
    fn apply(&self, nargs: NArgs, args: &[String], dest: Option<Slot<'_>>) -> Result<()>;
}

impl<F> Action for F
where
    F: Fn(NArgs, &[String], Option<Slot<'_>>) -> Result<()> + Send + Sync,
{
    fn apply(&self, nargs: NArgs, args: &[String], dest: Option<Slot<'_>>) -> Result<()> {
        self(nargs, args, dest)
    }
}

fn invalid_kind(action: &str, slot: &Slot<'_>) -> Error {
    Error::Configuration(format!(
        "invalid kind for {} destination: {}",
        action,
        slot.describe()
    ))
}

fn parse_all(kind: Kind, args: &[String]) -> Result<Vec<Value>> {
    args.iter().map(|a| Value::parse(kind, a)).collect()
}

/// Coerce the consumed tokens and store them.
///
/// With arity 1 or `Optional` a single value goes into a scalar field, and
/// an `Optional` that found nothing leaves the field alone. Any other arity
/// needs a sequence field, whose contents are replaced.
#[derive(Debug, Clone, Copy)]
pub struct Store;

impl Action for Store {
    fn apply(&self, nargs: NArgs, args: &[String], dest: Option<Slot<'_>>) -> Result<()> {
        let Some(slot) = dest else {
            return Ok(());
        };

        match nargs {
            NArgs::Exact(1) | NArgs::Optional => {
                let Some(token) = args.first() else {
                    return Ok(());
                };
                match slot {
                    Slot::Scalar(field) => field.set(Value::parse(field.kind(), token)?),
                    other => Err(invalid_kind("element", &other)),
                }
            }
            _ => match slot {
                Slot::Sequence(seq) => {
                    let values = parse_all(seq.elem_kind(), args)?;
                    seq.replace(values)
                }
                other => Err(invalid_kind("Store", &other)),
            },
        }
    }
}

/// Coerce each consumed token and append it to a sequence field, keeping
/// whatever earlier occurrences put there.
#[derive(Debug, Clone, Copy)]
pub struct Append;

impl Action for Append {
    fn apply(&self, _nargs: NArgs, args: &[String], dest: Option<Slot<'_>>) -> Result<()> {
        match dest {
            None => Ok(()),
            Some(Slot::Sequence(seq)) => {
                for value in parse_all(seq.elem_kind(), args)? {
                    seq.push(value)?;
                }
                Ok(())
            }
            Some(other) => Err(invalid_kind("Append", &other)),
        }
    }
}

/// Store a fixed value, ignoring any consumed tokens. A sequence field ends
/// up holding just that value.
#[derive(Debug, Clone)]
pub struct StoreConst(pub Value);

impl StoreConst {
    pub fn new(value: impl Into<Value>) -> Self {
        StoreConst(value.into())
    }
}

impl Action for StoreConst {
    fn apply(&self, _nargs: NArgs, _args: &[String], dest: Option<Slot<'_>>) -> Result<()> {
        match dest {
            None => Ok(()),
            Some(Slot::Scalar(field)) => field.set(self.0.clone()),
            Some(Slot::Sequence(seq)) => seq.replace(vec![self.0.clone()]),
            Some(other) => Err(invalid_kind("StoreConst", &other)),
        }
    }
}

/// Append a fixed value to a sequence field, ignoring any consumed tokens.
#[derive(Debug, Clone)]
pub struct AppendConst(pub Value);

impl AppendConst {
    pub fn new(value: impl Into<Value>) -> Self {
        AppendConst(value.into())
    }
}

impl Action for AppendConst {
    fn apply(&self, _nargs: NArgs, _args: &[String], dest: Option<Slot<'_>>) -> Result<()> {
        match dest {
            None => Ok(()),
            Some(Slot::Sequence(seq)) => seq.push(self.0.clone()),
            Some(other) => Err(invalid_kind("AppendConst", &other)),
        }
    }
}

/// Check every consumed token against a fixed set, then hand over to the
/// wrapped action.
pub struct Choice {
    inner: Box<dyn Action>,
    choices: Vec<String>,
}

impl Choice {
    pub fn new<A: Action + 'static>(inner: A, choices: &[&str]) -> Self {
        Choice {
            inner: Box::new(inner),
            choices: choices.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }
}

impl Action for Choice {
    fn apply(&self, nargs: NArgs, args: &[String], dest: Option<Slot<'_>>) -> Result<()> {
        if let Some(bad) = args.iter().find(|a| !self.choices.contains(a)) {
            return Err(Error::ValueFormat {
                token: bad.clone(),
                expected: format!("one of {}", self.choices.join(", ")),
            });
        }
        self.inner.apply(nargs, args, dest)
    }
}

/// Stop parsing and ask for the help text.
#[derive(Debug, Clone, Copy)]
pub struct Help;

impl Action for Help {
    fn apply(&self, _nargs: NArgs, _args: &[String], _dest: Option<Slot<'_>>) -> Result<()> {
        Err(Error::HelpRequested)
    }
}
