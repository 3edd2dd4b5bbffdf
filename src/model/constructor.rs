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

//! Constructors: built-in and user defined classes
//!
//! Every object remembers the constructor that created it. Constructors form
//! single inheritance chains that always end at [`Builtin::Object`], which is
//! what `instanceof` walks and what decides the type tag of class instances.

use super::object::{
    ErrorData, Function, Getter, JsObject, ObjectBuilder, ObjectKind, Primitive, Property,
};
use super::types::TypeTag;
use super::value::Value;
use chrono::Utc;
use indexmap::IndexMap;
use regex::Regex;
use std::fmt;
use std::sync::{Arc, LazyLock};

static EMPTY_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new("(?:)"));

/// Constructors provided by the host runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    /// `Object`
    Object,
    /// `Function`
    Function,
    /// `GeneratorFunction`
    GeneratorFunction,
    /// `Array`
    Array,
    /// `Boolean`
    Boolean,
    /// `Number`
    Number,
    /// `String`
    String,
    /// `Date`
    Date,
    /// `RegExp`
    RegExp,
    /// `Error`
    Error,
    /// `TypeError`
    TypeError,
    /// `RangeError`
    RangeError,
    /// `Map`
    Map,
    /// `Set`
    Set,
    /// `WeakMap`
    WeakMap,
    /// `WeakSet`
    WeakSet,
}

impl Builtin {
    /// Every built-in constructor
    pub const ALL: [Builtin; 16] = [
        Builtin::Object,
        Builtin::Function,
        Builtin::GeneratorFunction,
        Builtin::Array,
        Builtin::Boolean,
        Builtin::Number,
        Builtin::String,
        Builtin::Date,
        Builtin::RegExp,
        Builtin::Error,
        Builtin::TypeError,
        Builtin::RangeError,
        Builtin::Map,
        Builtin::Set,
        Builtin::WeakMap,
        Builtin::WeakSet,
    ];

    /// Look a constructor up by its global name
    pub fn from_name(name: &str) -> Option<Builtin> {
        Builtin::ALL.into_iter().find(|builtin| builtin.name() == name)
    }

    /// Global name of the constructor
    pub const fn name(self) -> &'static str {
        match self {
            Builtin::Object => "Object",
            Builtin::Function => "Function",
            Builtin::GeneratorFunction => "GeneratorFunction",
            Builtin::Array => "Array",
            Builtin::Boolean => "Boolean",
            Builtin::Number => "Number",
            Builtin::String => "String",
            Builtin::Date => "Date",
            Builtin::RegExp => "RegExp",
            Builtin::Error => "Error",
            Builtin::TypeError => "TypeError",
            Builtin::RangeError => "RangeError",
            Builtin::Map => "Map",
            Builtin::Set => "Set",
            Builtin::WeakMap => "WeakMap",
            Builtin::WeakSet => "WeakSet",
        }
    }

    /// Direct parent in the inheritance chain
    pub const fn parent(self) -> Option<Builtin> {
        match self {
            Builtin::Object => None,
            Builtin::TypeError | Builtin::RangeError => Some(Builtin::Error),
            Builtin::GeneratorFunction => Some(Builtin::Function),
            _ => Some(Builtin::Object),
        }
    }

    /// Tag of the instances this constructor builds
    pub const fn instance_tag(self) -> TypeTag {
        match self {
            Builtin::Object | Builtin::WeakMap | Builtin::WeakSet => TypeTag::Object,
            Builtin::Function => TypeTag::Function,
            Builtin::GeneratorFunction => TypeTag::GeneratorFunction,
            Builtin::Array => TypeTag::Array,
            Builtin::Boolean => TypeTag::Boolean,
            Builtin::Number => TypeTag::Number,
            Builtin::String => TypeTag::String,
            Builtin::Date => TypeTag::Date,
            Builtin::RegExp => TypeTag::RegExp,
            Builtin::Error | Builtin::TypeError | Builtin::RangeError => TypeTag::Error,
            Builtin::Map => TypeTag::Map,
            Builtin::Set => TypeTag::Set,
        }
    }

    /// Declared parameter count, exposed as the constructor's `length`
    pub const fn arity(self) -> usize {
        match self {
            Builtin::Date => 7,
            Builtin::RegExp => 2,
            Builtin::Map | Builtin::Set | Builtin::WeakMap | Builtin::WeakSet => 0,
            _ => 1,
        }
    }

    /// Name of the built-in iteration member instances inherit, if any
    pub(crate) const fn instance_iterator(self) -> Option<&'static str> {
        match self {
            Builtin::Array | Builtin::Set | Builtin::String => Some("values"),
            Builtin::Map => Some("entries"),
            _ => None,
        }
    }

    fn default_kind(self, name: &str) -> ObjectKind {
        match self {
            Builtin::Object => ObjectKind::Plain,
            Builtin::Function => ObjectKind::Function(Function::arrow("anonymous", 0)),
            Builtin::GeneratorFunction => {
                ObjectKind::Function(Function::generator("anonymous", 0))
            }
            Builtin::Array => ObjectKind::Array(Vec::new()),
            Builtin::Boolean => ObjectKind::Boxed(Primitive::Boolean(false)),
            Builtin::Number => ObjectKind::Boxed(Primitive::Number(0.0)),
            Builtin::String => ObjectKind::Boxed(Primitive::String(String::new())),
            Builtin::Date => ObjectKind::Date(Utc::now()),
            Builtin::RegExp => match &*EMPTY_PATTERN {
                Ok(pattern) => ObjectKind::RegExp(pattern.clone()),
                Err(e) => {
                    log::warn!("default RegExp pattern unavailable: {e}");
                    ObjectKind::Plain
                }
            },
            Builtin::Error | Builtin::TypeError | Builtin::RangeError => {
                ObjectKind::Error(ErrorData::new(name, ""))
            }
            Builtin::Map => ObjectKind::Map(Vec::new()),
            Builtin::Set => ObjectKind::Set(Vec::new()),
            Builtin::WeakMap => ObjectKind::WeakMap,
            Builtin::WeakSet => ObjectKind::WeakSet,
        }
    }
}

/// A user defined class
///
/// Members live on the class prototype: they are inherited by instances,
/// never counted as own properties and not enumerable.
#[derive(Debug)]
pub struct Class {
    name: String,
    parent: Option<Constructor>,
    arity: usize,
    members: IndexMap<String, Property>,
    iterator: Option<Value>,
}

impl Class {
    /// Start a class declaration
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            arity: 0,
            members: IndexMap::new(),
            iterator: None,
        }
    }

    /// Inherit from another constructor
    pub fn extends(mut self, parent: impl Into<Constructor>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Declared constructor parameter count
    pub fn arity(mut self, arity: usize) -> Self {
        self.arity = arity;
        self
    }

    /// Add a prototype member
    pub fn member(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.members
            .insert(name.into(), Property::data(value).hidden());
        self
    }

    /// Add a prototype getter, invoked with the receiving instance
    pub fn getter<F>(mut self, name: impl Into<String>, getter: F) -> Self
    where
        F: Fn(&JsObject) -> Value + Send + Sync + 'static,
    {
        let getter: Getter = Arc::new(getter);
        self.members
            .insert(name.into(), Property::accessor(getter).hidden());
        self
    }

    /// Implement the iteration protocol with the given member
    pub fn iterator(mut self, member: impl Into<Value>) -> Self {
        self.iterator = Some(member.into());
        self
    }

    /// Finish the declaration
    pub fn build(self) -> Constructor {
        Constructor::Class(Arc::new(self))
    }

    /// Class name
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Reference to something that can be instantiated with `new`
#[derive(Clone)]
pub enum Constructor {
    /// Host provided constructor
    Builtin(Builtin),
    /// User defined class, compared by identity
    Class(Arc<Class>),
}

impl Constructor {
    /// Constructor name
    pub fn name(&self) -> &str {
        match self {
            Constructor::Builtin(builtin) => builtin.name(),
            Constructor::Class(class) => class.name(),
        }
    }

    /// Direct parent; classes without `extends` inherit from `Object`
    pub fn parent(&self) -> Option<Constructor> {
        match self {
            Constructor::Builtin(builtin) => builtin.parent().map(Constructor::Builtin),
            Constructor::Class(class) => Some(
                class
                    .parent
                    .clone()
                    .unwrap_or(Constructor::Builtin(Builtin::Object)),
            ),
        }
    }

    /// This constructor followed by every ancestor, ending at `Object`
    pub fn ancestors(&self) -> impl Iterator<Item = Constructor> + use<> {
        std::iter::successors(Some(self.clone()), Constructor::parent)
    }

    /// Check if `other` appears in this constructor's chain
    pub fn is_subclass_of(&self, other: &Constructor) -> bool {
        self.ancestors().any(|ancestor| &ancestor == other)
    }

    /// Nearest built-in in the chain, which fixes the instance layout
    pub fn builtin_base(&self) -> Builtin {
        self.ancestors()
            .find_map(|ancestor| match ancestor {
                Constructor::Builtin(builtin) => Some(builtin),
                Constructor::Class(_) => None,
            })
            .unwrap_or(Builtin::Object)
    }

    /// Tag of the instances this constructor builds
    pub fn instance_tag(&self) -> TypeTag {
        self.builtin_base().instance_tag()
    }

    /// Declared parameter count
    pub fn arity(&self) -> usize {
        match self {
            Constructor::Builtin(builtin) => builtin.arity(),
            Constructor::Class(class) => class.arity,
        }
    }

    /// Start building an instance, as `new Ctor()` would
    pub fn instantiate(&self) -> ObjectBuilder {
        let kind = self.builtin_base().default_kind(self.name());
        ObjectBuilder::with_kind(kind).constructor(self.clone())
    }

    /// Look a prototype member up along the chain
    pub(crate) fn member(&self, key: &str, this: &JsObject) -> Option<Value> {
        self.ancestors().find_map(|ancestor| match ancestor {
            Constructor::Class(class) => class.members.get(key).map(|p| p.read(this)),
            Constructor::Builtin(_) => None,
        })
    }

    /// Iteration member inherited by instances
    pub(crate) fn iterator_member(&self) -> Option<Value> {
        self.ancestors().find_map(|ancestor| match ancestor {
            Constructor::Class(class) => class.iterator.clone(),
            Constructor::Builtin(builtin) => builtin
                .instance_iterator()
                .map(|name| Value::from(Function::arrow(name, 0))),
        })
    }
}

impl PartialEq for Constructor {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Constructor::Builtin(a), Constructor::Builtin(b)) => a == b,
            (Constructor::Class(a), Constructor::Class(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for Constructor {}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constructor::Builtin(builtin) => f.debug_tuple("Builtin").field(builtin).finish(),
            Constructor::Class(class) => f.debug_tuple("Class").field(&class.name).finish(),
        }
    }
}

impl From<Builtin> for Constructor {
    fn from(builtin: Builtin) -> Self {
        Constructor::Builtin(builtin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_chains_end_at_object() {
        let chain: Vec<_> = Constructor::from(Builtin::TypeError)
            .ancestors()
            .map(|c| c.name().to_string())
            .collect();
        assert_eq!(chain, vec!["TypeError", "Error", "Object"]);
        assert_eq!(Constructor::from(Builtin::Object).ancestors().count(), 1);
    }

    #[test]
    fn test_class_identity() {
        let a = Class::new("Point").build();
        let b = Class::new("Point").build();
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_subclass_resolves_builtin_base() {
        let base = Class::new("Base").build();
        let child = Class::new("Child").extends(base.clone()).build();
        assert!(child.is_subclass_of(&base));
        assert!(child.is_subclass_of(&Builtin::Object.into()));
        assert!(!base.is_subclass_of(&child));
        assert_eq!(child.instance_tag(), TypeTag::Object);

        let failure = Class::new("HttpError").extends(Builtin::Error).build();
        assert_eq!(failure.builtin_base(), Builtin::Error);
        assert_eq!(failure.instance_tag(), TypeTag::Error);
    }

    #[test]
    fn test_members_are_inherited() {
        let base = Class::new("Base").member("kind", "base").build();
        let child = Class::new("Child").extends(base).build();
        let Value::Object(instance) = child.instantiate().build() else {
            panic!("expected object");
        };
        assert_eq!(child.member("kind", &instance), Some(Value::from("base")));
        assert_eq!(child.member("missing", &instance), None);
    }

    #[test]
    fn test_iterator_member_resolution() {
        assert!(Constructor::from(Builtin::Map).iterator_member().is_some());
        assert!(Constructor::from(Builtin::WeakMap).iterator_member().is_none());
        assert!(Class::new("Bag").build().iterator_member().is_none());
        let list = Class::new("List")
            .iterator(Function::generator("[Symbol.iterator]", 0))
            .build();
        let sub = Class::new("SortedList").extends(list).build();
        assert!(sub.iterator_member().is_some());
    }

    #[test]
    fn test_default_regexp_instance() {
        let Value::Object(regexp) = Constructor::from(Builtin::RegExp).instantiate().build() else {
            panic!("expected object");
        };
        let ObjectKind::RegExp(pattern) = regexp.kind() else {
            panic!("expected regexp layout");
        };
        assert!(pattern.is_match(""));
        assert_eq!(
            crate::model::get_type(&Value::Object(regexp.clone())),
            TypeTag::RegExp
        );
    }
}
