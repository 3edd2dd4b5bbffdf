// Copyright 2024 OctoFHIR Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Heap objects and their payloads

use super::constructor::{Builtin, Constructor};
use super::types::TypeTag;
use super::value::Value;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// Accessor invoked with the object the property was read from
pub type Getter = Arc<dyn Fn(&JsObject) -> Value + Send + Sync>;

/// Storage behind a property
#[derive(Clone)]
pub enum Slot {
    /// Plain stored value
    Data(Value),
    /// Computed on every read
    Accessor(Getter),
}

/// A named property of an object or class prototype
#[derive(Clone)]
pub struct Property {
    slot: Slot,
    enumerable: bool,
}

impl Property {
    /// Enumerable data property
    pub fn data(value: impl Into<Value>) -> Self {
        Self {
            slot: Slot::Data(value.into()),
            enumerable: true,
        }
    }

    /// Enumerable accessor property, like `get length() {}` in a literal
    pub fn accessor(getter: Getter) -> Self {
        Self {
            slot: Slot::Accessor(getter),
            enumerable: true,
        }
    }

    /// Make the property non-enumerable
    pub fn hidden(mut self) -> Self {
        self.enumerable = false;
        self
    }

    /// Whether `for..in` style enumeration sees the property
    pub fn is_enumerable(&self) -> bool {
        self.enumerable
    }

    /// Read the property on behalf of `this`
    pub fn read(&self, this: &JsObject) -> Value {
        match &self.slot {
            Slot::Data(value) => value.clone(),
            Slot::Accessor(getter) => getter(this),
        }
    }
}

impl fmt::Debug for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Property");
        match &self.slot {
            Slot::Data(value) => debug.field("value", value),
            Slot::Accessor(_) => debug.field("value", &"<getter>"),
        };
        debug.field("enumerable", &self.enumerable).finish()
    }
}

/// Primitive wrapped in an object, as produced by `new Number(5)`
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Boxed boolean
    Boolean(bool),
    /// Boxed number
    Number(f64),
    /// Boxed string
    String(String),
}

impl Primitive {
    /// Tag shared with the unboxed primitive
    pub fn tag(&self) -> TypeTag {
        match self {
            Primitive::Boolean(_) => TypeTag::Boolean,
            Primitive::Number(_) => TypeTag::Number,
            Primitive::String(_) => TypeTag::String,
        }
    }

    /// Wrapper constructor
    pub fn constructor(&self) -> Builtin {
        match self {
            Primitive::Boolean(_) => Builtin::Boolean,
            Primitive::Number(_) => Builtin::Number,
            Primitive::String(_) => Builtin::String,
        }
    }
}

/// Payload of an error object
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorData {
    /// Error name, e.g. `TypeError`
    pub name: String,
    /// Human readable message
    pub message: String,
}

impl ErrorData {
    /// Create error data
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// How a function value behaves when called or constructed
#[derive(Debug, Clone)]
pub enum FunctionKind {
    /// Not constructible: arrow functions, methods, most native functions
    Arrow,
    /// `function*`; calling it yields a generator object
    Generator,
    /// A constructor reference such as `Date` or a class
    Constructor(Constructor),
}

/// A callable value
#[derive(Debug, Clone)]
pub struct Function {
    name: String,
    params: usize,
    kind: FunctionKind,
}

impl Function {
    /// Non-constructible function
    pub fn arrow(name: impl Into<String>, params: usize) -> Self {
        Self {
            name: name.into(),
            params,
            kind: FunctionKind::Arrow,
        }
    }

    /// Generator function
    pub fn generator(name: impl Into<String>, params: usize) -> Self {
        Self {
            name: name.into(),
            params,
            kind: FunctionKind::Generator,
        }
    }

    /// Reference to a constructor
    pub fn constructor(constructor: Constructor) -> Self {
        Self {
            name: constructor.name().to_string(),
            params: constructor.arity(),
            kind: FunctionKind::Constructor(constructor),
        }
    }

    /// Function name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared parameter count, exposed as `length`
    pub fn params(&self) -> usize {
        self.params
    }

    /// Function kind
    pub fn kind(&self) -> &FunctionKind {
        &self.kind
    }

    /// The constructor this function stands for, if any
    pub fn constructs(&self) -> Option<&Constructor> {
        match &self.kind {
            FunctionKind::Constructor(constructor) => Some(constructor),
            _ => None,
        }
    }

    /// Constructor of the function object itself
    pub fn own_constructor(&self) -> Builtin {
        match self.kind {
            FunctionKind::Generator => Builtin::GeneratorFunction,
            _ => Builtin::Function,
        }
    }
}

/// Internal layout of an object
#[derive(Debug, Clone)]
pub enum ObjectKind {
    /// Ordinary key-value record
    Plain,
    /// Boxed primitive
    Boxed(Primitive),
    /// Array elements
    Array(Vec<Value>),
    /// Function
    Function(Function),
    /// Point in time
    Date(DateTime<Utc>),
    /// Compiled regular expression
    RegExp(Regex),
    /// Error
    Error(ErrorData),
    /// Map entries in insertion order, keys unique under SameValueZero
    Map(Vec<(Value, Value)>),
    /// Set members in insertion order, unique under SameValueZero
    Set(Vec<Value>),
    /// Weak keyed collection; contents are not observable
    WeakMap,
    /// Weak set; contents are not observable
    WeakSet,
    /// Suspended generator
    Generator,
}

/// A heap object
#[derive(Debug, Clone)]
pub struct JsObject {
    kind: ObjectKind,
    constructor: Constructor,
    properties: IndexMap<String, Property>,
    prototype: Option<Arc<JsObject>>,
    iterator: Option<Value>,
}

impl JsObject {
    /// Internal layout
    pub fn kind(&self) -> &ObjectKind {
        &self.kind
    }

    /// Constructor that created the object
    pub fn constructor(&self) -> &Constructor {
        &self.constructor
    }

    /// Object supplying inherited properties, if any
    pub fn prototype(&self) -> Option<&Arc<JsObject>> {
        self.prototype.as_ref()
    }

    /// Own property by name
    pub fn own_property(&self, key: &str) -> Option<&Property> {
        self.properties.get(key)
    }

    /// Names of own enumerable properties, in insertion order
    pub fn own_enumerable_keys(&self) -> impl Iterator<Item = &str> {
        self.properties
            .iter()
            .filter(|(_, property)| property.is_enumerable())
            .map(|(key, _)| key.as_str())
    }

    /// Set an own data property
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.properties.insert(key.into(), Property::data(value));
    }

    /// Define an own property
    pub fn define(&mut self, key: impl Into<String>, property: Property) {
        self.properties.insert(key.into(), property);
    }

    /// Delete an own property, returning whether it existed
    pub fn delete(&mut self, key: &str) -> bool {
        self.properties.shift_remove(key).is_some()
    }

    /// Number of entries of a map or set
    pub fn size(&self) -> Option<usize> {
        match &self.kind {
            ObjectKind::Map(entries) => Some(entries.len()),
            ObjectKind::Set(items) => Some(items.len()),
            _ => None,
        }
    }

    /// Read a property: own, intrinsic, prototype chain, then class members
    pub fn get(&self, key: &str) -> Value {
        self.lookup(key, self).unwrap_or_default()
    }

    /// Objects this one inherits from, nearest first
    pub fn prototypes(&self) -> impl Iterator<Item = &JsObject> {
        std::iter::successors(self.prototype.as_deref(), |&proto| proto.prototype.as_deref())
    }

    /// Iteration protocol member: own slot, prototype chain, then constructor chain
    pub fn iterator_member(&self) -> Option<Value> {
        if let Some(member) = &self.iterator {
            return Some(member.clone());
        }
        if matches!(self.kind, ObjectKind::Generator) {
            return Some(Function::arrow("[Symbol.iterator]", 0).into());
        }
        self.prototype
            .as_deref()
            .and_then(JsObject::iterator_member)
            .or_else(|| self.constructor.iterator_member())
    }

    fn lookup(&self, key: &str, receiver: &JsObject) -> Option<Value> {
        if let Some(property) = self.properties.get(key) {
            return Some(property.read(receiver));
        }
        if let Some(value) = self.intrinsic(key) {
            return Some(value);
        }
        if let Some(value) = self
            .prototype
            .as_deref()
            .and_then(|proto| proto.lookup(key, receiver))
        {
            return Some(value);
        }
        self.constructor.member(key, receiver)
    }

    fn intrinsic(&self, key: &str) -> Option<Value> {
        match (&self.kind, key) {
            (_, "constructor") => Some(Value::from(self.constructor.clone())),
            (ObjectKind::Array(items), "length") => Some(Value::Number(items.len() as f64)),
            (ObjectKind::Array(items), index) => index
                .parse::<usize>()
                .ok()
                .filter(|i| i.to_string() == index)
                .and_then(|i| items.get(i).cloned()),
            (ObjectKind::Boxed(Primitive::String(s)), "length") => {
                Some(Value::Number(s.encode_utf16().count() as f64))
            }
            (ObjectKind::Function(function), "length") => {
                Some(Value::Number(function.params() as f64))
            }
            (ObjectKind::Function(function), "name") => Some(Value::from(function.name())),
            (ObjectKind::Map(_) | ObjectKind::Set(_), "size") => {
                self.size().map(|size| Value::Number(size as f64))
            }
            (ObjectKind::Error(error), "name") => Some(Value::from(error.name.as_str())),
            (ObjectKind::Error(error), "message") => Some(Value::from(error.message.as_str())),
            _ => None,
        }
    }
}

/// Builder for objects of any layout
#[derive(Debug)]
pub struct ObjectBuilder {
    object: JsObject,
}

impl ObjectBuilder {
    /// Plain object created by `Object`
    pub fn new() -> Self {
        Self::with_kind(ObjectKind::Plain)
    }

    /// Object with the given layout; the constructor defaults to the
    /// built-in matching the layout
    pub fn with_kind(kind: ObjectKind) -> Self {
        let constructor = Constructor::Builtin(default_constructor(&kind));
        Self {
            object: JsObject {
                kind,
                constructor,
                properties: IndexMap::new(),
                prototype: None,
                iterator: None,
            },
        }
    }

    /// Override the constructor, like `Object.create(Ctor.prototype)`
    pub fn constructor(mut self, constructor: impl Into<Constructor>) -> Self {
        self.object.constructor = constructor.into();
        self
    }

    /// Add an enumerable data property
    pub fn property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.object.set(key, value);
        self
    }

    /// Add a property with explicit attributes
    pub fn define(mut self, key: impl Into<String>, property: Property) -> Self {
        self.object.define(key, property);
        self
    }

    /// Add an enumerable getter
    pub fn getter<F>(self, key: impl Into<String>, getter: F) -> Self
    where
        F: Fn(&JsObject) -> Value + Send + Sync + 'static,
    {
        self.define(key, Property::accessor(Arc::new(getter)))
    }

    /// Inherit from another object, like `Object.create(proto)`
    ///
    /// The object takes over the constructor of its prototype; a later call
    /// to [`ObjectBuilder::constructor`] overrides it.
    pub fn prototype(mut self, prototype: Arc<JsObject>) -> Self {
        self.object.constructor = prototype.constructor.clone();
        self.object.prototype = Some(prototype);
        self
    }

    /// Set the own iteration protocol member
    pub fn iterator(mut self, member: impl Into<Value>) -> Self {
        self.object.iterator = Some(member.into());
        self
    }

    /// Finish into a shared object
    pub fn build_object(self) -> Arc<JsObject> {
        Arc::new(self.object)
    }

    /// Finish into a value
    pub fn build(self) -> Value {
        Value::Object(self.build_object())
    }
}

impl Default for ObjectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn default_constructor(kind: &ObjectKind) -> Builtin {
    match kind {
        ObjectKind::Plain | ObjectKind::Generator => Builtin::Object,
        ObjectKind::Boxed(primitive) => primitive.constructor(),
        ObjectKind::Array(_) => Builtin::Array,
        ObjectKind::Function(function) => function.own_constructor(),
        ObjectKind::Date(_) => Builtin::Date,
        ObjectKind::RegExp(_) => Builtin::RegExp,
        ObjectKind::Error(_) => Builtin::Error,
        ObjectKind::Map(_) => Builtin::Map,
        ObjectKind::Set(_) => Builtin::Set,
        ObjectKind::WeakMap => Builtin::WeakMap,
        ObjectKind::WeakSet => Builtin::WeakSet,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(value: &Value) -> &JsObject {
        value.as_object().expect("object value")
    }

    #[test]
    fn test_own_enumerable_keys_skip_hidden() {
        let value = ObjectBuilder::new()
            .property("a", 1.0)
            .define("secret", Property::data(2.0).hidden())
            .build();
        let keys: Vec<_> = object(&value).own_enumerable_keys().collect();
        assert_eq!(keys, vec!["a"]);
    }

    #[test]
    fn test_getter_receives_the_receiver() {
        let value = ObjectBuilder::new()
            .property("items", Value::array([1.0, 2.0, 3.0]))
            .getter("count", |this| this.get("items").get("length"))
            .build();
        assert_eq!(value.get("count"), Value::Number(3.0));
    }

    #[test]
    fn test_prototype_chain_lookup() {
        let base = ObjectBuilder::new().property("greeting", "hi").build_object();
        let value = ObjectBuilder::new().prototype(base).build();
        assert_eq!(value.get("greeting"), Value::from("hi"));
        assert_eq!(object(&value).own_enumerable_keys().count(), 0);
    }

    #[test]
    fn test_delete_removes_own_property() {
        let mut value = ObjectBuilder::new().property("a", 1.0).build();
        let object = value.object_mut().expect("object value");
        assert!(object.delete("a"));
        assert!(!object.delete("a"));
        assert_eq!(object.own_enumerable_keys().count(), 0);
    }

    #[test]
    fn test_intrinsics() {
        let array = Value::array(["x", "y"]);
        assert_eq!(array.get("length"), Value::Number(2.0));
        assert_eq!(array.get("1"), Value::from("y"));
        assert_eq!(array.get("2"), Value::Undefined);

        let function = Value::from(Function::arrow("add", 2));
        assert_eq!(function.get("length"), Value::Number(2.0));
        assert_eq!(function.get("name"), Value::from("add"));

        let map = Value::map([(Value::Null, Value::Null)]);
        assert_eq!(map.get("size"), Value::Number(1.0));
    }

    #[test]
    fn test_default_constructor_follows_layout() {
        let date = ObjectBuilder::with_kind(ObjectKind::Date(Utc::now())).build();
        assert_eq!(
            object(&date).constructor(),
            &Constructor::Builtin(Builtin::Date)
        );
        let generator_fn = Value::from(Function::generator("gen", 0));
        assert_eq!(
            object(&generator_fn).constructor(),
            &Constructor::Builtin(Builtin::GeneratorFunction)
        );
    }

    #[test]
    fn test_array_index_must_be_canonical() {
        let array = Value::array(["x", "y"]);
        assert_eq!(array.get("1"), Value::from("y"));
        assert_eq!(array.get("+1"), Value::Undefined);
        assert_eq!(array.get("01"), Value::Undefined);
        assert_eq!(array.get("0"), Value::from("x"));
    }

    #[test]
    fn test_prototype_intrinsics_are_inherited() {
        // Object.create([1, 2])
        let Value::Object(proto) = Value::array([1.0, 2.0]) else {
            panic!("expected object");
        };
        let value = ObjectBuilder::new().prototype(proto).build();
        assert_eq!(value.get("length"), Value::Number(2.0));
        assert_eq!(value.get("0"), Value::Number(1.0));
        assert_eq!(
            object(&value).constructor(),
            &Constructor::Builtin(Builtin::Array)
        );
        assert!(object(&value).iterator_member().is_some());
        assert_eq!(object(&value).prototypes().count(), 1);
    }

    #[test]
    fn test_prototype_getters_see_the_receiver() {
        let proto = ObjectBuilder::new()
            .getter("twice", |this| match this.get("n") {
                Value::Number(n) => Value::Number(n * 2.0),
                _ => Value::Undefined,
            })
            .build_object();
        let value = ObjectBuilder::new().prototype(proto).property("n", 4.0).build();
        assert_eq!(value.get("twice"), Value::Number(8.0));
    }
}
