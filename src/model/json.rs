//! Conversion from JSON documents and value literals

use super::constructor::Builtin;
use super::object::ObjectBuilder;
use super::value::Value;
use crate::error::{CheckError, Result};
use serde_json::Value as JsonValue;

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Boolean(b),
            JsonValue::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(items) => Value::array(items),
            JsonValue::Object(fields) => fields
                .into_iter()
                .fold(ObjectBuilder::new(), |builder, (key, value)| {
                    builder.property(key, Value::from(value))
                })
                .build(),
        }
    }
}

impl Value {
    /// Parse a JSON document, or one of the bare literals JSON cannot spell:
    /// `undefined`, `NaN`, `Infinity`, `-Infinity` and the global name of a
    /// built-in constructor such as `Date`
    pub fn parse_literal(input: &str) -> Result<Value> {
        match input.trim() {
            "undefined" => Ok(Value::Undefined),
            "NaN" => Ok(Value::Number(f64::NAN)),
            "Infinity" => Ok(Value::Number(f64::INFINITY)),
            "-Infinity" => Ok(Value::Number(f64::NEG_INFINITY)),
            text => match Builtin::from_name(text) {
                Some(builtin) => Ok(builtin.into()),
                None => serde_json::from_str::<JsonValue>(text)
                    .map(Value::from)
                    .map_err(|e| CheckError::InvalidLiteral {
                        input: input.to_string(),
                        message: e.to_string(),
                    }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TypeTag, get_type};

    #[test]
    fn test_json_shapes() {
        let value = Value::from(serde_json::json!({
            "name": "x",
            "tags": ["a", "b"],
            "missing": null
        }));
        assert_eq!(get_type(&value), TypeTag::Object);
        assert_eq!(get_type(&value.get("tags")), TypeTag::Array);
        assert_eq!(value.get("tags").length(), Some(2.0));
        assert_eq!(value.get("missing"), Value::Null);
        assert_eq!(value.get("absent"), Value::Undefined);
    }

    #[test]
    fn test_bare_literals() {
        assert_eq!(Value::parse_literal("undefined"), Ok(Value::Undefined));
        assert_eq!(
            Value::parse_literal(" Infinity "),
            Ok(Value::Number(f64::INFINITY))
        );
        assert!(matches!(
            Value::parse_literal("NaN"),
            Ok(Value::Number(n)) if n.is_nan()
        ));
        assert_eq!(Value::parse_literal("\"\""), Ok(Value::from("")));
    }

    #[test]
    fn test_constructor_names() {
        let date = Value::parse_literal("Date").unwrap();
        assert_eq!(date.as_constructor(), Some(&Builtin::Date.into()));
        assert_eq!(get_type(&date), TypeTag::Function);
        assert_eq!(
            Value::parse_literal("\"Date\""),
            Ok(Value::from("Date"))
        );
    }

    #[test]
    fn test_invalid_literal() {
        let err = Value::parse_literal("{nope").unwrap_err();
        assert!(matches!(err, CheckError::InvalidLiteral { ref input, .. } if input == "{nope"));
    }
}
