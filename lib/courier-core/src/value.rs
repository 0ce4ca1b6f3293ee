//! Runtime value model for the encoder subsystem.
//!
//! [`Value`] stands in for a reflected field value: the walker inspects it,
//! the encoders stringify it. Host values convert through [`ToValue`], which
//! `#[derive(Params)]` wires up per field.

use std::fmt;

use crate::FieldTag;

/// One row of a struct's field-descriptor table.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Raw tag metadata, e.g. `"user_id,omitempty"`. Empty means no override.
    pub tag: &'static str,
    /// The declared field identifier, used when the tag has no name override.
    pub name: &'static str,
    /// The field's value.
    pub value: Value,
}

impl Field {
    /// Create a descriptor row.
    #[must_use]
    pub const fn new(tag: &'static str, name: &'static str, value: Value) -> Self {
        Self { tag, name, value }
    }
}

/// A field value as seen by the encoder.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value (`Option::None`).
    Null,
    /// Boolean.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    Uint(u64),
    /// Floating point number.
    Float(f64),
    /// String.
    Str(String),
    /// Sequence of values.
    Seq(Vec<Value>),
    /// A nested struct's own descriptor table.
    Struct(Vec<Field>),
}

impl Value {
    /// Returns `true` when the value equals its type's zero value.
    ///
    /// Composite values compare structurally: an empty sequence is zero, and
    /// a struct is zero when every field value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(b) => !b,
            Self::Int(n) => *n == 0,
            Self::Uint(n) => *n == 0,
            Self::Float(x) => *x == 0.0,
            Self::Str(s) => s.is_empty(),
            Self::Seq(items) => items.is_empty(),
            Self::Struct(fields) => fields.iter().all(|f| f.value.is_zero()),
        }
    }

    /// Short name of the value's kind, for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::Seq(_) => "sequence",
            Self::Struct(_) => "struct",
        }
    }
}

/// The canonical "print value as string" conversion used by the encoders.
///
/// Sequences join their elements with `,`; structs render their resolved
/// wire names as `k=v` pairs joined with `&`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Uint(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => f.write_str(s),
            Self::Seq(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Self::Struct(fields) => {
                let mut first = true;
                for field in fields {
                    let tag = FieldTag::parse(field.tag, field.name);
                    if tag.is_skipped() {
                        continue;
                    }
                    if !first {
                        f.write_str("&")?;
                    }
                    first = false;
                    write!(f, "{}={}", tag.name(), field.value)?;
                }
                Ok(())
            }
        }
    }
}

/// Conversion from host values into the encoder's [`Value`] model.
///
/// Implemented for primitives, strings, `Option<T>`, `Vec<T>`, and by
/// `#[derive(Params)]` for descriptor-backed structs.
pub trait ToValue {
    /// Convert to a [`Value`].
    fn to_value(&self) -> Value;
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

macro_rules! int_to_value {
    ($($ty:ty),*) => {
        $(impl ToValue for $ty {
            fn to_value(&self) -> Value {
                Value::Int(i64::from(*self))
            }
        })*
    };
}

macro_rules! uint_to_value {
    ($($ty:ty),*) => {
        $(impl ToValue for $ty {
            fn to_value(&self) -> Value {
                Value::Uint(u64::from(*self))
            }
        })*
    };
}

int_to_value!(i8, i16, i32, i64);
uint_to_value!(u8, u16, u32, u64);

impl ToValue for isize {
    fn to_value(&self) -> Value {
        // Saturating conversion on exotic platforms
        Value::Int(i64::try_from(*self).unwrap_or(i64::MAX))
    }
}

impl ToValue for usize {
    fn to_value(&self) -> Value {
        // Saturating conversion on exotic platforms
        Value::Uint(u64::try_from(*self).unwrap_or(u64::MAX))
    }
}

impl ToValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::Str(self.to_string())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::Str(self.clone())
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(inner) => inner.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::Seq(self.iter().map(ToValue::to_value).collect())
    }
}
