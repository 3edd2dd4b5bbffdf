//! Data model and type tags
//!
//! The value model of a prototype based runtime (primitives, boxed
//! primitives, built-in collections, functions, constructors and classes)
//! and the resolver that maps any value to a closed [`TypeTag`].

pub mod constructor;
pub mod json;
pub mod object;
pub mod resolver;
pub mod types;
pub mod value;

pub use constructor::{Builtin, Class, Constructor};
pub use object::{
    ErrorData, Function, FunctionKind, Getter, JsObject, ObjectBuilder, ObjectKind, Primitive,
    Property,
};
pub use resolver::{InstanceShape, get_type};
pub use types::TypeTag;
pub use value::Value;
