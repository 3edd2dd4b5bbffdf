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

//! Registry entries for the predicate set

/// Declare a registry entry for a single-value predicate
macro_rules! unary_predicate {
    (
        $(#[$meta:meta])*
        $ty:ident {
            name: $name:literal,
            friendly: $friendly:literal,
            doc: $doc:literal,
            check: $check:path $(,)?
        }
    ) => {
        $(#[$meta])*
        pub struct $ty;

        impl $crate::registry::function::PredicateFunction for $ty {
            fn name(&self) -> &str {
                $name
            }
            fn human_friendly_name(&self) -> &str {
                $friendly
            }
            fn signature(&self) -> &$crate::registry::signature::FunctionSignature {
                static SIG: std::sync::LazyLock<$crate::registry::signature::FunctionSignature> =
                    std::sync::LazyLock::new(|| {
                        $crate::registry::signature::FunctionSignature::unary($name)
                    });
                &SIG
            }
            fn documentation(&self) -> &str {
                $doc
            }
            fn evaluate(
                &self,
                args: &[$crate::model::Value],
            ) -> $crate::registry::function::FunctionResult<bool> {
                self.validate_args(args)?;
                Ok($check(&args[0]))
            }
        }
    };
}

mod comparison;
mod existence;
mod type_checks;

pub use comparison::{InstanceFunction, IsFunction};
pub use existence::{EmptyFunction, ExistsFunction};
pub use type_checks::{
    IsArrayFunction, IsBooleanFunction, IsDateFunction, IsErrorFunction, IsFunctionFunction,
    IsGeneratorFunction, IsGeneratorFunctionFunction, IsIterableFunction, IsMapFunction,
    IsNumberFunction, IsObjectFunction, IsRegExpFunction, IsSetFunction, IsStringFunction,
    IsTypeFunction,
};

use crate::registry::function::{FunctionRegistry, FunctionResult};

/// Register every predicate and its aliases
pub fn register_standard_functions(registry: &mut FunctionRegistry) -> FunctionResult<()> {
    registry.register(ExistsFunction);
    registry.register(EmptyFunction);
    registry.register(IsFunction);
    registry.register(InstanceFunction);

    registry.register(IsArrayFunction);
    registry.register(IsBooleanFunction);
    registry.register(IsDateFunction);
    registry.register(IsErrorFunction);
    registry.register(IsFunctionFunction);
    registry.register(IsGeneratorFunction);
    registry.register(IsGeneratorFunctionFunction);
    registry.register(IsIterableFunction);
    registry.register(IsMapFunction);
    registry.register(IsNumberFunction);
    registry.register(IsObjectFunction);
    registry.register(IsRegExpFunction);
    registry.register(IsSetFunction);
    registry.register(IsStringFunction);
    registry.register(IsTypeFunction);

    registry.register_alias("isRegex", "isRegExp")?;
    registry.register_alias("type", "isType")?;
    Ok(())
}
