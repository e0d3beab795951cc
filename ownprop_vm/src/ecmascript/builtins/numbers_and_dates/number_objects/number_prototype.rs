// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    builders::ordinary_object_builder::OrdinaryObjectBuilder,
    builtins::{ArgumentsList, Behaviour, Builtin, PrimitiveObjectData},
    execution::{Agent, ExceptionType, JsResult},
    types::{Object, Value, number_to_string},
};

pub(crate) struct NumberPrototype;

struct NumberPrototypeToString;
impl Builtin for NumberPrototypeToString {
    const NAME: &'static str = "toString";

    const LENGTH: u8 = 1;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(NumberPrototype::to_string);
}

struct NumberPrototypeValueOf;
impl Builtin for NumberPrototypeValueOf {
    const NAME: &'static str = "valueOf";

    const LENGTH: u8 = 0;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(NumberPrototype::value_of);
}

impl NumberPrototype {
    /// ### [21.1.3.6 Number.prototype.toString ( \[ radix \] )](https://tc39.es/ecma262/#sec-number.prototype.tostring)
    ///
    /// Only radix 10 is supported.
    fn to_string(
        agent: &mut Agent,
        this_value: Value,
        arguments: ArgumentsList,
    ) -> JsResult<Value> {
        // 1. Let x be ? ThisNumberValue(this value).
        let x = this_number_value(agent, this_value)?;
        // 2. If radix is undefined, let radixMV be 10.
        let radix = arguments.get(0);
        match radix {
            Value::Undefined => {}
            Value::Number(radix) if radix == 10.0 => {}
            _ => {
                return Err(agent.throw_exception(
                    ExceptionType::RangeError,
                    "Number.prototype.toString only supports radix 10",
                ));
            }
        }
        // 6. Return Number::toString(x, 10).
        Ok(number_to_string(agent, x).into())
    }

    /// ### [21.1.3.7 Number.prototype.valueOf ( )](https://tc39.es/ecma262/#sec-number.prototype.valueof)
    fn value_of(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Return ? ThisNumberValue(this value).
        this_number_value(agent, this_value).map(Value::Number)
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent) {
        let this = agent.current_realm().intrinsics().number_prototype();
        OrdinaryObjectBuilder::new_intrinsic_object(agent, this)
            .with_property_capacity(2)
            .with_builtin_function_property::<NumberPrototypeToString>()
            .with_builtin_function_property::<NumberPrototypeValueOf>()
            .build();
    }
}

/// ### [21.1.3.7.1 ThisNumberValue ( value )](https://tc39.es/ecma262/#sec-thisnumbervalue)
fn this_number_value(agent: &mut Agent, value: Value) -> JsResult<f64> {
    match value {
        Value::Number(x) => Ok(x),
        Value::Object(Object::PrimitiveObject(object)) => match object.data(agent) {
            PrimitiveObjectData::Number(x) => Ok(x),
            _ => Err(agent.throw_exception(ExceptionType::TypeError, "this is not a number")),
        },
        _ => Err(agent.throw_exception(ExceptionType::TypeError, "this is not a number")),
    }
}
