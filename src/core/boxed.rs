use crate::domain::model::OperatingSystem;
use crate::utils::error::{CollectionsError, Result};
use std::fmt;

/// A value stored without its static type. Reading it back requires naming
/// the expected type, and a mismatch is an error rather than a conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum BoxedValue {
    Bool(bool),
    Int(i32),
    Long(i64),
    Double(f64),
    Object(OperatingSystem),
}

impl BoxedValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => bool::TYPE_NAME,
            Self::Int(_) => i32::TYPE_NAME,
            Self::Long(_) => i64::TYPE_NAME,
            Self::Double(_) => f64::TYPE_NAME,
            Self::Object(_) => OperatingSystem::TYPE_NAME,
        }
    }

    pub fn unbox<T: Unbox>(&self) -> Result<T> {
        T::unbox(self).ok_or(CollectionsError::InvalidCast {
            expected: T::TYPE_NAME,
            found: self.type_name(),
        })
    }
}

impl fmt::Display for BoxedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{}", v),
            Self::Int(v) => write!(f, "{}", v),
            Self::Long(v) => write!(f, "{}", v),
            Self::Double(v) => write!(f, "{}", v),
            Self::Object(v) => write!(f, "{}", v),
        }
    }
}

/// Exact-variant extraction out of a [`BoxedValue`].
pub trait Unbox: Sized {
    const TYPE_NAME: &'static str;

    fn unbox(value: &BoxedValue) -> Option<Self>;
}

macro_rules! impl_boxing {
    ($ty:ty, $variant:ident, $name:literal) => {
        impl From<$ty> for BoxedValue {
            fn from(value: $ty) -> Self {
                BoxedValue::$variant(value)
            }
        }

        impl Unbox for $ty {
            const TYPE_NAME: &'static str = $name;

            fn unbox(value: &BoxedValue) -> Option<Self> {
                match value {
                    BoxedValue::$variant(inner) => Some(inner.clone()),
                    _ => None,
                }
            }
        }
    };
}

impl_boxing!(bool, Bool, "bool");
impl_boxing!(i32, Int, "i32");
impl_boxing!(i64, Long, "i64");
impl_boxing!(f64, Double, "f64");
impl_boxing!(OperatingSystem, Object, "OperatingSystem");
