//! Writable handles onto the fields of a caller's record.
//!
//! A record implements [`Destination`] to hand out a [`Slot`] for each field
//! name it declares. The [`destination!`](crate::destination) macro writes
//! that mapping for a plain struct:
//!
//! ```
//! use argparse::destination;
//!
//! #[derive(Default)]
//! struct Args {
//!     verbose: bool,
//!     level: Option<u8>,
//!     files: Vec<String>,
//! }
//!
//! destination!(Args { verbose, level, files });
//! ```

use crate::value::{Kind, Primitive, Value};
use crate::{Error, Result};

/// A single typed field.
pub trait ScalarField {
    fn kind(&self) -> Kind;
    fn set(&mut self, value: Value) -> Result<()>;
}

/// A growable list of typed elements.
pub trait SequenceField {
    fn elem_kind(&self) -> Kind;
    /// Replace the whole contents.
    fn replace(&mut self, values: Vec<Value>) -> Result<()>;
    fn push(&mut self, value: Value) -> Result<()>;
}

/// Mutable access to one field, by shape.
pub enum Slot<'a> {
    Scalar(&'a mut dyn ScalarField),
    Sequence(&'a mut dyn SequenceField),
    /// A field the parser cannot write, named by its type.
    Unsupported(&'static str),
}

impl Slot<'_> {
    /// Short type description used in configuration errors.
    pub fn describe(&self) -> String {
        match self {
            Slot::Scalar(f) => f.kind().name().to_string(),
            Slot::Sequence(s) => format!("sequence of {}", s.elem_kind()),
            Slot::Unsupported(name) => name.to_string(),
        }
    }
}

/// Anything that can be exposed as a [`Slot`].
pub trait Field {
    fn slot(&mut self) -> Slot<'_>;
}

/// A record whose fields are looked up by name.
pub trait Destination {
    /// `None` when the record has no field called `field`.
    fn slot(&mut self, field: &str) -> Option<Slot<'_>>;
}

fn mismatch(value: &Value, kind: Kind) -> Error {
    Error::Configuration(format!(
        "cannot store {} value {:?} in a {} field",
        value.kind(),
        value.to_string(),
        kind
    ))
}

fn convert<T: Primitive>(value: Value) -> Result<T> {
    let err = mismatch(&value, T::KIND);
    T::from_value(value).ok_or(err)
}

macro_rules! scalar_field {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ScalarField for $ty {
                fn kind(&self) -> Kind {
                    <$ty as Primitive>::KIND
                }

                fn set(&mut self, value: Value) -> Result<()> {
                    *self = convert(value)?;
                    Ok(())
                }
            }

            impl ScalarField for Option<$ty> {
                fn kind(&self) -> Kind {
                    <$ty as Primitive>::KIND
                }

                fn set(&mut self, value: Value) -> Result<()> {
                    *self = Some(convert(value)?);
                    Ok(())
                }
            }

            impl Field for $ty {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::Scalar(self)
                }
            }

            impl Field for Option<$ty> {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::Scalar(self)
                }
            }
        )*
    };
}

scalar_field!(bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, String);

impl<T: Primitive> SequenceField for Vec<T> {
    fn elem_kind(&self) -> Kind {
        T::KIND
    }

    fn replace(&mut self, values: Vec<Value>) -> Result<()> {
        let converted = values
            .into_iter()
            .map(convert::<T>)
            .collect::<Result<Vec<T>>>()?;
        *self = converted;
        Ok(())
    }

    fn push(&mut self, value: Value) -> Result<()> {
        Vec::push(self, convert(value)?);
        Ok(())
    }
}

impl<T: Primitive> Field for Vec<T> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Sequence(self)
    }
}

/// Implement [`Destination`] for a struct by listing the fields the parser
/// may write. Each listed field must implement [`Field`].
#[macro_export]
macro_rules! destination {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::Destination for $ty {
            fn slot(&mut self, field: &str) -> ::std::option::Option<$crate::Slot<'_>> {
                match field {
                    $(stringify!($field) => ::std::option::Option::Some($crate::Field::slot(&mut self.$field)),)*
                    _ => ::std::option::Option::None,
                }
            }
        }
    };
}
