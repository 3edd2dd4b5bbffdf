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

//! Per-type predicates and isType()

use crate::check;
use crate::model::{TypeTag, Value};
use crate::registry::function::{FunctionResult, PredicateFunction};
use crate::registry::signature::{FunctionSignature, ParameterInfo, ParameterKind};
use std::sync::LazyLock;

unary_predicate! {
    /// isArray()
    IsArrayFunction {
        name: "isArray",
        friendly: "Is Array",
        doc: "Returns `true` for arrays.",
        check: check::is_array,
    }
}

unary_predicate! {
    /// isBoolean()
    IsBooleanFunction {
        name: "isBoolean",
        friendly: "Is Boolean",
        doc: "Returns `true` for booleans and boxed booleans.",
        check: check::is_boolean,
    }
}

unary_predicate! {
    /// isDate()
    IsDateFunction {
        name: "isDate",
        friendly: "Is Date",
        doc: "Returns `true` for dates.",
        check: check::is_date,
    }
}

unary_predicate! {
    /// isError() - error tag or any `Error` instance
    IsErrorFunction {
        name: "isError",
        friendly: "Is Error",
        doc: "Returns `true` for errors, including values whose constructor chain reaches `Error` without an error layout.",
        check: check::is_error,
    }
}

unary_predicate! {
    /// isFunction()
    IsFunctionFunction {
        name: "isFunction",
        friendly: "Is Function",
        doc: "Returns `true` for functions and constructor references. Generator functions have their own tag.",
        check: check::is_function,
    }
}

unary_predicate! {
    /// isGenerator()
    IsGeneratorFunction {
        name: "isGenerator",
        friendly: "Is Generator",
        doc: "Returns `true` for generator objects.",
        check: check::is_generator,
    }
}

unary_predicate! {
    /// isGeneratorFunction()
    IsGeneratorFunctionFunction {
        name: "isGeneratorFunction",
        friendly: "Is Generator Function",
        doc: "Returns `true` for generator functions.",
        check: check::is_generator_function,
    }
}

unary_predicate! {
    /// isIterable() - callable iteration member
    IsIterableFunction {
        name: "isIterable",
        friendly: "Is Iterable",
        doc: "Returns `true` if the value exists and its iteration member is a function or generator function.",
        check: check::is_iterable,
    }
}

unary_predicate! {
    /// isMap()
    IsMapFunction {
        name: "isMap",
        friendly: "Is Map",
        doc: "Returns `true` for maps. Weak maps are plain objects.",
        check: check::is_map,
    }
}

unary_predicate! {
    /// isNumber()
    IsNumberFunction {
        name: "isNumber",
        friendly: "Is Number",
        doc: "Returns `true` for numbers and boxed numbers, `NaN` included.",
        check: check::is_number,
    }
}

unary_predicate! {
    /// isObject()
    IsObjectFunction {
        name: "isObject",
        friendly: "Is Object",
        doc: "Returns `true` for plain objects and instances without a more specific built-in base.",
        check: check::is_object,
    }
}

unary_predicate! {
    /// isRegExp(), also bound as isRegex()
    IsRegExpFunction {
        name: "isRegExp",
        friendly: "Is RegExp",
        doc: "Returns `true` for regular expressions.",
        check: check::is_regexp,
    }
}

unary_predicate! {
    /// isSet()
    IsSetFunction {
        name: "isSet",
        friendly: "Is Set",
        doc: "Returns `true` for sets. Weak sets are plain objects.",
        check: check::is_set,
    }
}

unary_predicate! {
    /// isString()
    IsStringFunction {
        name: "isString",
        friendly: "Is String",
        doc: "Returns `true` for strings and boxed strings.",
        check: check::is_string,
    }
}

/// isType(), also bound as type()
///
/// The tag argument is a string holding a tag name. A non-string or a name
/// no tag carries never matches.
pub struct IsTypeFunction;

impl PredicateFunction for IsTypeFunction {
    fn name(&self) -> &str {
        "isType"
    }
    fn human_friendly_name(&self) -> &str {
        "Is Type"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                "isType",
                vec![
                    ParameterInfo::required("value", ParameterKind::Any),
                    ParameterInfo::required("tag", ParameterKind::TypeTag),
                ],
            )
        });
        &SIG
    }
    fn documentation(&self) -> &str {
        "Returns `true` if the value resolves to the named type tag, e.g. `isType(x, \"map\")`."
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<bool> {
        self.validate_args(args)?;
        let Value::String(name) = &args[1] else {
            log::debug!("isType called with a non-string tag");
            return Ok(false);
        };
        match name.parse::<TypeTag>() {
            Ok(tag) => Ok(check::is_type(&args[0], tag)),
            Err(e) => {
                log::debug!("isType: {e}");
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Builtin;

    #[test]
    fn test_is_type_by_name() {
        let f = IsTypeFunction;
        assert_eq!(
            f.evaluate(&[Value::array(Vec::<Value>::new()), "array".into()]),
            Ok(true)
        );
        assert_eq!(f.evaluate(&[Value::from(1), "string".into()]), Ok(false));
        assert_eq!(f.evaluate(&[Value::from(1), "integer".into()]), Ok(false));
        assert_eq!(
            f.evaluate(&[Value::from(1), Builtin::Number.into()]),
            Ok(false)
        );
    }

    #[test]
    fn test_unary_arity() {
        assert!(IsArrayFunction.evaluate(&[]).is_err());
        assert!(
            IsArrayFunction
                .evaluate(&[Value::Null, Value::Null])
                .is_err()
        );
        assert_eq!(IsStringFunction.evaluate(&["s".into()]), Ok(true));
    }
}
