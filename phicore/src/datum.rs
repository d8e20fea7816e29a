//! Terminal primitive data.
//!
//! Every value the language can bottom out in is one of the shapes below.
//! A [`Datum`] never references back into the object graph; once extracted
//! it is plain data the surrounding system can print, compare, or serialize.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{EnumIs, IntoStaticStr};

use crate::error::PhiError;

/// A terminal primitive value.
#[derive(Clone, Debug, PartialEq, EnumIs, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Datum {
    Bytes(Vec<u8>),
    Text(String),
    Bool(bool),
    Int(i64),
    Float(f64),
}

impl Datum {
    /// Static name of this datum's shape, used in shape-mismatch messages.
    pub fn shape(&self) -> &'static str {
        self.into()
    }
}

/// Canonical rendering, shared by terms and the dataization trace.
///
/// Bytes render as dash-joined hex pairs (`74-65-73`), the empty sequence
/// as `--`. Text renders quoted with escapes.
impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Datum::Bytes(raw) => {
                if raw.is_empty() {
                    return write!(f, "--");
                }
                for (idx, byte) in raw.iter().enumerate() {
                    if idx > 0 {
                        write!(f, "-")?;
                    }
                    write!(f, "{byte:02X}")?;
                }
                Ok(())
            }
            Datum::Text(text) => write!(f, "{text:?}"),
            Datum::Bool(value) => write!(f, "{value}"),
            Datum::Int(value) => write!(f, "{value}"),
            Datum::Float(value) => write!(f, "{value}"),
        }
    }
}

macro_rules! datum_shape {
    ($target:ty, $variant:ident, $shape:literal) => {
        impl From<$target> for Datum {
            fn from(value: $target) -> Self {
                Datum::$variant(value)
            }
        }

        impl TryFrom<Datum> for $target {
            type Error = PhiError;

            fn try_from(datum: Datum) -> Result<Self, Self::Error> {
                match datum {
                    Datum::$variant(value) => Ok(value),
                    other => Err(PhiError::ShapeMismatch {
                        expected: $shape,
                        found: other.shape(),
                    }),
                }
            }
        }
    };
}

datum_shape!(Vec<u8>, Bytes, "bytes");
datum_shape!(String, Text, "text");
datum_shape!(bool, Bool, "bool");
datum_shape!(i64, Int, "int");
datum_shape!(f64, Float, "float");

impl From<&str> for Datum {
    fn from(value: &str) -> Self {
        Datum::Text(value.to_string())
    }
}

impl From<&[u8]> for Datum {
    fn from(value: &[u8]) -> Self {
        Datum::Bytes(value.to_vec())
    }
}
