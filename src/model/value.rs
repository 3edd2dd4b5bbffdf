//! Core value type
//!
//! [`Value`] mirrors the values of a prototype based scripting runtime:
//! the two absence sentinels, three primitives and shared heap objects.
//! Every probe here is total: reading a property of `Undefined` or `Null`
//! yields `Undefined` instead of failing.

use super::constructor::{Builtin, Constructor};
use super::object::{ErrorData, Function, JsObject, ObjectBuilder, ObjectKind, Primitive};
use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::Arc;

/// A runtime value
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// The "no value yet" sentinel
    #[default]
    Undefined,
    /// The explicit "no value" sentinel
    Null,
    /// Boolean primitive
    Boolean(bool),
    /// IEEE 754 number primitive
    Number(f64),
    /// String primitive
    String(String),
    /// Shared heap object
    Object(Arc<JsObject>),
}

impl Value {
    /// Array of the given elements
    pub fn array<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let items = items.into_iter().map(Into::into).collect();
        ObjectBuilder::with_kind(ObjectKind::Array(items)).build()
    }

    /// Map of the given entries; a repeated key overwrites the earlier value
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        let mut unique: Vec<(Value, Value)> = Vec::new();
        for (key, value) in entries {
            let (key, value) = (key.into(), value.into());
            match unique.iter_mut().find(|(k, _)| k.same_value_zero(&key)) {
                Some(entry) => entry.1 = value,
                None => unique.push((key, value)),
            }
        }
        ObjectBuilder::with_kind(ObjectKind::Map(unique)).build()
    }

    /// Set of the given members; duplicates are dropped
    pub fn set<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let mut unique: Vec<Value> = Vec::new();
        for item in items.into_iter().map(Into::into) {
            if !unique.iter().any(|existing| existing.same_value_zero(&item)) {
                unique.push(item);
            }
        }
        ObjectBuilder::with_kind(ObjectKind::Set(unique)).build()
    }

    /// Date object
    pub fn date(at: DateTime<Utc>) -> Self {
        ObjectBuilder::with_kind(ObjectKind::Date(at)).build()
    }

    /// Regular expression object
    pub fn regexp(pattern: Regex) -> Self {
        ObjectBuilder::with_kind(ObjectKind::RegExp(pattern)).build()
    }

    /// `Error` object with the given message
    pub fn error(message: impl Into<String>) -> Self {
        ObjectBuilder::with_kind(ObjectKind::Error(ErrorData::new("Error", message))).build()
    }

    /// Boxed primitive, as produced by `new String("a")`
    pub fn boxed(primitive: Primitive) -> Self {
        ObjectBuilder::with_kind(ObjectKind::Boxed(primitive)).build()
    }

    /// Empty `WeakMap`
    pub fn weak_map() -> Self {
        ObjectBuilder::with_kind(ObjectKind::WeakMap).build()
    }

    /// Empty `WeakSet`
    pub fn weak_set() -> Self {
        ObjectBuilder::with_kind(ObjectKind::WeakSet).build()
    }

    /// Generator object, as returned by calling a generator function
    pub fn generator() -> Self {
        ObjectBuilder::with_kind(ObjectKind::Generator).build()
    }

    /// Start building a plain object
    pub fn object() -> ObjectBuilder {
        ObjectBuilder::new()
    }

    /// Check if this is `Undefined` or `Null`
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// Boolean coercion: the absence sentinels, `false`, `0`, `-0`, `NaN`
    /// and `""` are falsy; every object is truthy
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Number(n) => !(*n == 0.0 || n.is_nan()),
            Value::String(s) => !s.is_empty(),
            Value::Object(_) => true,
        }
    }

    /// Heap object behind the value
    pub fn as_object(&self) -> Option<&JsObject> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Mutable access to the heap object, cloning it if shared
    pub fn object_mut(&mut self) -> Option<&mut JsObject> {
        match self {
            Value::Object(object) => Some(Arc::make_mut(object)),
            _ => None,
        }
    }

    /// Function payload, if the value is callable
    pub fn as_function(&self) -> Option<&Function> {
        match self.as_object()?.kind() {
            ObjectKind::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Constructor the value refers to, if it is a constructor reference
    pub fn as_constructor(&self) -> Option<&Constructor> {
        self.as_function()?.constructs()
    }

    /// Constructor that produced the value; primitives report their wrapper
    pub fn constructor(&self) -> Option<Constructor> {
        match self {
            Value::Undefined | Value::Null => None,
            Value::Boolean(_) => Some(Builtin::Boolean.into()),
            Value::Number(_) => Some(Builtin::Number.into()),
            Value::String(_) => Some(Builtin::String.into()),
            Value::Object(object) => Some(object.constructor().clone()),
        }
    }

    /// Property read, total over every value
    pub fn get(&self, key: &str) -> Value {
        match (self, key) {
            (Value::Undefined | Value::Null, _) => Value::Undefined,
            (Value::String(s), "length") => Value::Number(s.encode_utf16().count() as f64),
            (Value::Object(object), _) => object.get(key),
            (primitive, "constructor") => primitive
                .constructor()
                .map(Value::from)
                .unwrap_or_default(),
            _ => Value::Undefined,
        }
    }

    /// The `length` member when it is a number
    pub fn length(&self) -> Option<f64> {
        match self.get("length") {
            Value::Number(length) => Some(length),
            _ => None,
        }
    }

    /// Iteration protocol member, `Undefined` when absent
    pub fn iterator_member(&self) -> Value {
        match self {
            Value::String(_) => Function::arrow("values", 0).into(),
            Value::Object(object) => object.iterator_member().unwrap_or_default(),
            _ => Value::Undefined,
        }
    }

    /// SameValueZero: like `==` below, except that `NaN` equals itself
    pub fn same_value_zero(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            _ => self == other,
        }
    }
}

/// Strict equality: primitives by value, objects by identity
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::array(items)
    }
}

impl From<Primitive> for Value {
    fn from(primitive: Primitive) -> Self {
        Value::boxed(primitive)
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        ObjectBuilder::with_kind(ObjectKind::Function(function)).build()
    }
}

impl From<Constructor> for Value {
    fn from(constructor: Constructor) -> Self {
        Function::constructor(constructor).into()
    }
}

impl From<Builtin> for Value {
    fn from(builtin: Builtin) -> Self {
        Constructor::Builtin(builtin).into()
    }
}

impl From<Arc<JsObject>> for Value {
    fn from(object: Arc<JsObject>) -> Self {
        Value::Object(object)
    }
}

impl From<ObjectBuilder> for Value {
    fn from(builder: ObjectBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        for falsy in [
            Value::Undefined,
            Value::Null,
            Value::from(false),
            Value::from(0.0),
            Value::from(-0.0),
            Value::from(f64::NAN),
            Value::from(""),
        ] {
            assert!(!falsy.is_truthy(), "{falsy:?} should be falsy");
        }
        for truthy in [
            Value::from(true),
            Value::from(-1),
            Value::from(f64::INFINITY),
            Value::from(" "),
            Value::object().build(),
            Value::boxed(Primitive::Boolean(false)),
        ] {
            assert!(truthy.is_truthy(), "{truthy:?} should be truthy");
        }
    }

    #[test]
    fn test_get_is_total_on_absent_values() {
        assert_eq!(Value::Undefined.get("length"), Value::Undefined);
        assert_eq!(Value::Null.get("length"), Value::Undefined);
        assert_eq!(Value::Null.length(), None);
    }

    #[test]
    fn test_string_length_counts_utf16_units() {
        assert_eq!(Value::from("abc").length(), Some(3.0));
        assert_eq!(Value::from("😀").length(), Some(2.0));
    }

    #[test]
    fn test_primitive_constructors() {
        assert_eq!(
            Value::from(1).constructor(),
            Some(Constructor::Builtin(Builtin::Number))
        );
        assert_eq!(
            Value::from(1).get("constructor").as_constructor(),
            Some(&Constructor::Builtin(Builtin::Number))
        );
        assert_eq!(Value::Null.constructor(), None);
    }

    #[test]
    fn test_strict_equality() {
        let object = Value::object().build();
        assert_eq!(object, object.clone());
        assert_ne!(object, Value::object().build());
        assert_ne!(Value::from(f64::NAN), Value::from(f64::NAN));
        assert!(Value::from(f64::NAN).same_value_zero(&Value::from(f64::NAN)));
        assert_eq!(Value::from(0.0), Value::from(-0.0));
    }

    #[test]
    fn test_collections_deduplicate() {
        let set = Value::set([1.0, 1.0, f64::NAN, f64::NAN]);
        assert_eq!(set.as_object().and_then(JsObject::size), Some(2));

        let map = Value::map([("a", 1), ("a", 2)]);
        let Some(ObjectKind::Map(entries)) = map.as_object().map(JsObject::kind) else {
            panic!("expected map");
        };
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].1, Value::from(2));
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<f64>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }
}
