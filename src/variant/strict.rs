// Author: Dustin Pilgrim
// License: MIT

//! Strict extraction: succeeds only when the Variant already holds the
//! requested kind. Numbers widen into `f32`/`f64` from any numeric kind;
//! nothing else is coerced. Use `convert`/`to_*` for coercion.

use indexmap::IndexMap;

use super::Variant;
use crate::value::Value;
use crate::VariantError;

impl TryFrom<Variant> for String {
    type Error = VariantError;

    fn try_from(variant: Variant) -> Result<Self, Self::Error> {
        match variant {
            Variant::Value(Value::String(s)) => Ok(s),
            other => Err(VariantError::type_error("string", other.get_type(), 401)),
        }
    }
}

impl TryFrom<Variant> for f64 {
    type Error = VariantError;

    fn try_from(variant: Variant) -> Result<Self, Self::Error> {
        match variant {
            Variant::Value(Value::Double(d)) => Ok(d),
            Variant::Value(Value::Float(f)) => Ok(f64::from(f)),
            Variant::Value(Value::Int(i)) => Ok(i as f64),
            other => Err(VariantError::type_error("number", other.get_type(), 402)),
        }
    }
}

impl TryFrom<Variant> for f32 {
    type Error = VariantError;

    fn try_from(variant: Variant) -> Result<Self, Self::Error> {
        match variant {
            Variant::Value(Value::Float(f)) => Ok(f),
            Variant::Value(Value::Double(d)) => Ok(d as f32),
            Variant::Value(Value::Int(i)) => Ok(i as f32),
            other => Err(VariantError::type_error("number", other.get_type(), 402)),
        }
    }
}

impl TryFrom<Variant> for i64 {
    type Error = VariantError;

    fn try_from(variant: Variant) -> Result<Self, Self::Error> {
        match variant {
            Variant::Value(Value::Int(i)) => Ok(i),
            other => Err(VariantError::type_error("integer", other.get_type(), 402)),
        }
    }
}

macro_rules! impl_try_from_int {
    ($($ty:ty => $code:expr),* $(,)?) => {
        $(
            impl TryFrom<Variant> for $ty {
                type Error = VariantError;

                fn try_from(variant: Variant) -> Result<Self, Self::Error> {
                    let i = i64::try_from(variant)?;
                    <$ty>::try_from(i).map_err(|_| VariantError::TypeError {
                        message: format!("Integer {} out of range for {}", i, stringify!($ty)),
                        found: crate::TypeTag::Integer,
                        hint: Some(format!(
                            "Use an integer between {} and {}",
                            <$ty>::MIN,
                            <$ty>::MAX
                        )),
                        code: Some($code),
                    })
                }
            }
        )*
    };
}

impl_try_from_int! {
    i32 => 403,
    u8 => 407,
    u16 => 403,
    u32 => 408,
    u64 => 406,
    usize => 409,
}

impl TryFrom<Variant> for bool {
    type Error = VariantError;

    fn try_from(variant: Variant) -> Result<Self, Self::Error> {
        match variant {
            Variant::Value(Value::Bool(b)) => Ok(b),
            Variant::Value(Value::String(ref s))
                if s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("false") =>
            {
                Err(VariantError::TypeError {
                    message: format!("Expected boolean, got the string '{}'", s),
                    found: variant.get_type(),
                    hint: Some("Use to_bool() to coerce text; strict access wants a real boolean".into()),
                    code: Some(404),
                })
            }
            other => Err(VariantError::type_error("boolean", other.get_type(), 404)),
        }
    }
}

impl<T> TryFrom<Variant> for Vec<T>
where
    T: TryFrom<Variant, Error = VariantError>,
{
    type Error = VariantError;

    fn try_from(variant: Variant) -> Result<Self, Self::Error> {
        match variant {
            Variant::List(list) => list.into_iter().map(T::try_from).collect(),
            other => Err(VariantError::type_error("list", other.get_type(), 405)),
        }
    }
}

impl<T> TryFrom<Variant> for Option<T>
where
    T: TryFrom<Variant, Error = VariantError>,
{
    type Error = VariantError;

    fn try_from(variant: Variant) -> Result<Self, Self::Error> {
        match variant {
            Variant::Value(Value::Null) => Ok(None),
            v => Ok(Some(T::try_from(v)?)),
        }
    }
}

impl<T> TryFrom<Variant> for IndexMap<String, T>
where
    T: TryFrom<Variant, Error = VariantError>,
{
    type Error = VariantError;

    fn try_from(variant: Variant) -> Result<Self, Self::Error> {
        match variant {
            Variant::Map(map) => map
                .into_iter()
                .map(|(key, value)| Ok((key, T::try_from(value)?)))
                .collect(),
            other => Err(VariantError::type_error("map", other.get_type(), 410)),
        }
    }
}

impl TryFrom<Variant> for Value {
    type Error = VariantError;

    /// Always succeeds; unboxes the whole tree.
    fn try_from(variant: Variant) -> Result<Self, Self::Error> {
        Ok(variant.into_data())
    }
}
