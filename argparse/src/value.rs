//! Typed values and the textual coercion rules for command-line tokens.

use std::fmt;

use crate::{Error, Result};

// ============================================================================
// Kind — primitive type of a destination field
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
    Str,
}

impl Kind {
    pub fn name(self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::I8 => "i8",
            Kind::I16 => "i16",
            Kind::I32 => "i32",
            Kind::I64 => "i64",
            Kind::Isize => "isize",
            Kind::U8 => "u8",
            Kind::U16 => "u16",
            Kind::U32 => "u32",
            Kind::U64 => "u64",
            Kind::Usize => "usize",
            Kind::F32 => "f32",
            Kind::F64 => "f64",
            Kind::Str => "string",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Value — a parsed token or a caller-supplied constant
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    Str(String),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Bool(_) => Kind::Bool,
            Value::I8(_) => Kind::I8,
            Value::I16(_) => Kind::I16,
            Value::I32(_) => Kind::I32,
            Value::I64(_) => Kind::I64,
            Value::Isize(_) => Kind::Isize,
            Value::U8(_) => Kind::U8,
            Value::U16(_) => Kind::U16,
            Value::U32(_) => Kind::U32,
            Value::U64(_) => Kind::U64,
            Value::Usize(_) => Kind::Usize,
            Value::F32(_) => Kind::F32,
            Value::F64(_) => Kind::F64,
            Value::Str(_) => Kind::Str,
        }
    }

    /// Convert a token into a value of the given kind.
    ///
    /// Integers take an optional `0x`, `0b`, `0o` or leading-`0` (octal)
    /// prefix; signed kinds also take a leading `+` or `-`.
    pub fn parse(kind: Kind, s: &str) -> Result<Value> {
        let bad = || Error::ValueFormat {
            token: s.to_string(),
            expected: kind.name().to_string(),
        };
        let value = match kind {
            Kind::Bool => Value::Bool(parse_bool(s).ok_or_else(bad)?),
            Kind::I8 => Value::I8(signed(s).ok_or_else(bad)?),
            Kind::I16 => Value::I16(signed(s).ok_or_else(bad)?),
            Kind::I32 => Value::I32(signed(s).ok_or_else(bad)?),
            Kind::I64 => Value::I64(signed(s).ok_or_else(bad)?),
            Kind::Isize => Value::Isize(signed(s).ok_or_else(bad)?),
            Kind::U8 => Value::U8(unsigned(s).ok_or_else(bad)?),
            Kind::U16 => Value::U16(unsigned(s).ok_or_else(bad)?),
            Kind::U32 => Value::U32(unsigned(s).ok_or_else(bad)?),
            Kind::U64 => Value::U64(unsigned(s).ok_or_else(bad)?),
            Kind::Usize => Value::Usize(unsigned(s).ok_or_else(bad)?),
            Kind::F32 => Value::F32(s.parse().map_err(|_| bad())?),
            Kind::F64 => Value::F64(s.parse().map_err(|_| bad())?),
            Kind::Str => Value::Str(s.to_string()),
        };
        Ok(value)
    }
}

/// Canonical textual form; parsing it back with the same kind gives the
/// same value.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{}", v),
            Value::I8(v) => write!(f, "{}", v),
            Value::I16(v) => write!(f, "{}", v),
            Value::I32(v) => write!(f, "{}", v),
            Value::I64(v) => write!(f, "{}", v),
            Value::Isize(v) => write!(f, "{}", v),
            Value::U8(v) => write!(f, "{}", v),
            Value::U16(v) => write!(f, "{}", v),
            Value::U32(v) => write!(f, "{}", v),
            Value::U64(v) => write!(f, "{}", v),
            Value::Usize(v) => write!(f, "{}", v),
            Value::F32(v) => write!(f, "{}", v),
            Value::F64(v) => write!(f, "{}", v),
            Value::Str(v) => f.write_str(v),
        }
    }
}

// ============================================================================
// Primitive — Rust types that map onto a Kind
// ============================================================================

pub trait Primitive: Sized {
    const KIND: Kind;
    fn from_value(v: Value) -> Option<Self>;
    fn into_value(self) -> Value;
}

macro_rules! primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Primitive for $ty {
                const KIND: Kind = Kind::$variant;

                fn from_value(v: Value) -> Option<Self> {
                    match v {
                        Value::$variant(x) => Some(x),
                        _ => None,
                    }
                }

                fn into_value(self) -> Value {
                    Value::$variant(self)
                }
            }

            impl From<$ty> for Value {
                fn from(v: $ty) -> Value {
                    Value::$variant(v)
                }
            }
        )*
    };
}

primitive!(
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    String => Str,
);

impl From<&str> for Value {
    fn from(v: &str) -> Value {
        Value::Str(v.to_string())
    }
}

// ============================================================================
// Token parsing helpers
// ============================================================================

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Split off a base prefix. A bare leading `0` before more digits means octal.
fn split_radix(s: &str) -> (u32, &str) {
    let prefixes: [(&str, u32); 6] = [
        ("0x", 16),
        ("0X", 16),
        ("0b", 2),
        ("0B", 2),
        ("0o", 8),
        ("0O", 8),
    ];
    for (prefix, radix) in prefixes {
        if let Some(rest) = s.strip_prefix(prefix) {
            return (radix, rest);
        }
    }
    if s.len() > 1 && s.starts_with('0') {
        return (8, &s[1..]);
    }
    (10, s)
}

fn magnitude(s: &str) -> Option<u128> {
    let (radix, digits) = split_radix(s);
    // from_str_radix accepts a sign of its own
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }
    u128::from_str_radix(digits, radix).ok()
}

fn unsigned<T: TryFrom<u128>>(s: &str) -> Option<T> {
    T::try_from(magnitude(s)?).ok()
}

fn signed<T: TryFrom<i128>>(s: &str) -> Option<T> {
    let (negative, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let n = i128::try_from(magnitude(body)?).ok()?;
    T::try_from(if negative { -n } else { n }).ok()
}
