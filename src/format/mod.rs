//! JSON interchange format with a selectable layout per geometry type.
//!
//! Layouts (`⟨p⟩` is a point encoded with the configured point style):
//!
//! | Type | Array | Object | Compound |
//! |---|---|---|---|
//! | Point, Vector | `[x,y]` | `{"x":x,"y":y}` | as Array |
//! | Segment, Box | `[x1,y1,x2,y2]` | `{"0":⟨p⟩,"1":⟨p⟩}` | `[⟨p⟩,⟨p⟩]` |
//! | Circle | `[x,y,r]` | `{"c":⟨p⟩,"r":r}` | `[⟨p⟩,r]` |

mod codec;
mod number;

pub use number::{format_float, MinimalFormatter};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{FormatError, Result};

/// JSON layout for one geometry type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Bare numeric tuple.
    #[default]
    Array,
    /// Named fields.
    Object,
    /// Array of the component points, each in its own configured style.
    /// Point and Vector have no components and fall back to [`Style::Array`].
    Compound,
}

/// Per-type layout selection for the JSON format.
///
/// Passed explicitly to every encode and decode call. Deserializes from
/// JSON such as `{"point": "object", "box": "compound"}`; missing entries
/// default to [`Style::Array`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    pub point: Style,
    pub vector: Style,
    pub segment: Style,
    #[serde(rename = "box")]
    pub aabb: Style,
    pub circle: Style,
}

impl FormatOptions {
    /// Uses the same style for every type.
    #[must_use]
    pub fn uniform(style: Style) -> Self {
        Self {
            point: style,
            vector: style,
            segment: style,
            aabb: style,
            circle: style,
        }
    }

    /// Loads options from a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON or names an
    /// unknown style.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| FormatError::Json(e).into())
    }

    /// Encodes a value as compact JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn encode<T: JsonCodec>(&self, value: &T) -> Result<String> {
        let mut out = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, MinimalFormatter);
        value
            .to_json(self)
            .serialize(&mut serializer)
            .map_err(FormatError::Json)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    /// Decodes a value from JSON text written in the configured layout.
    ///
    /// Object layouts read only the keys they need; extra keys such as a
    /// `"z"` next to `"x"` and `"y"` are ignored. Arrays must have exactly
    /// the expected length.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not JSON or does not match the layout.
    pub fn decode<T: JsonCodec>(&self, text: &str) -> Result<T> {
        let value: Value = serde_json::from_str(text).map_err(FormatError::Json)?;
        T::from_json(&value, self).inspect_err(|e| {
            tracing::debug!(target_type = T::NAME, error = %e, "rejecting JSON geometry");
        })
    }
}

/// Conversion between a geometry value and its JSON tree.
pub trait JsonCodec: Sized {
    /// Type name used in error messages.
    const NAME: &'static str;

    /// Builds the JSON tree for this value.
    fn to_json(&self, options: &FormatOptions) -> Value;

    /// Rebuilds a value from its JSON tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the tree does not match the configured layout.
    fn from_json(value: &Value, options: &FormatOptions) -> Result<Self>;
}

/// Name of the JSON kind, for error messages.
fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn number(value: &Value, target: &'static str) -> Result<f64> {
    value.as_f64().ok_or_else(|| {
        FormatError::TypeMismatch {
            target,
            expected: "number",
            found: kind_of(value),
        }
        .into()
    })
}

fn array<'a>(value: &'a Value, target: &'static str, expected: usize) -> Result<&'a [Value]> {
    let Some(items) = value.as_array() else {
        return Err(FormatError::TypeMismatch {
            target,
            expected: "array",
            found: kind_of(value),
        }
        .into());
    };
    if items.len() != expected {
        return Err(FormatError::Arity {
            target,
            expected,
            actual: items.len(),
        }
        .into());
    }
    Ok(items)
}

fn numbers<const N: usize>(value: &Value, target: &'static str) -> Result<[f64; N]> {
    let items = array(value, target, N)?;
    let mut out = [0.0; N];
    for (slot, item) in out.iter_mut().zip(items) {
        *slot = number(item, target)?;
    }
    Ok(out)
}

fn object<'a>(value: &'a Value, target: &'static str) -> Result<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| {
        FormatError::TypeMismatch {
            target,
            expected: "object",
            found: kind_of(value),
        }
        .into()
    })
}

fn field<'a>(
    map: &'a Map<String, Value>,
    target: &'static str,
    field: &'static str,
) -> Result<&'a Value> {
    map.get(field)
        .ok_or_else(|| FormatError::MissingField { target, field }.into())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_is_array_everywhere() {
        assert_eq!(FormatOptions::default(), FormatOptions::uniform(Style::Array));
    }

    #[test]
    fn options_from_json() {
        let options =
            FormatOptions::from_json_str(r#"{"point":"object","box":"compound"}"#).unwrap();
        assert_eq!(options.point, Style::Object);
        assert_eq!(options.aabb, Style::Compound);
        assert_eq!(options.vector, Style::Array);
        assert_eq!(options.segment, Style::Array);
        assert_eq!(options.circle, Style::Array);
    }

    #[test]
    fn options_reject_unknown_style() {
        assert!(FormatOptions::from_json_str(r#"{"point":"table"}"#).is_err());
    }

    #[test]
    fn options_serialize_with_box_key() {
        let text = serde_json::to_string(&FormatOptions::uniform(Style::Object)).unwrap();
        assert_eq!(
            text,
            r#"{"point":"object","vector":"object","segment":"object","box":"object","circle":"object"}"#
        );
    }

    #[test]
    fn numbers_checks_arity_and_kind() {
        let value: Value = serde_json::from_str("[1,2,3]").unwrap();
        assert!(matches!(
            numbers::<4>(&value, "Box"),
            Err(crate::PlanarError::Format(FormatError::Arity {
                expected: 4,
                actual: 3,
                ..
            }))
        ));

        let value: Value = serde_json::from_str(r#"[1,"2"]"#).unwrap();
        assert!(matches!(
            numbers::<2>(&value, "Point"),
            Err(crate::PlanarError::Format(FormatError::TypeMismatch {
                found: "string",
                ..
            }))
        ));
    }
}
