// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    builders::ordinary_object_builder::OrdinaryObjectBuilder,
    builtins::{ArgumentsList, Behaviour, Builtin, PrimitiveObjectData},
    execution::{Agent, ExceptionType, JsResult},
    types::{Object, String, Value},
};

pub(crate) struct BooleanPrototype;

struct BooleanPrototypeToString;
impl Builtin for BooleanPrototypeToString {
    const NAME: &'static str = "toString";

    const LENGTH: u8 = 0;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(BooleanPrototype::to_string);
}

struct BooleanPrototypeValueOf;
impl Builtin for BooleanPrototypeValueOf {
    const NAME: &'static str = "valueOf";

    const LENGTH: u8 = 0;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(BooleanPrototype::value_of);
}

impl BooleanPrototype {
    /// ### [20.3.3.2 Boolean.prototype.toString ( )](https://tc39.es/ecma262/#sec-boolean.prototype.tostring)
    fn to_string(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Let b be ? ThisBooleanValue(this value).
        let b = this_boolean_value(agent, this_value)?;
        // 2. If b is true, return "true"; else return "false".
        let result = if b { "true" } else { "false" };
        Ok(String::from_str(agent, result).into())
    }

    /// ### [20.3.3.3 Boolean.prototype.valueOf ( )](https://tc39.es/ecma262/#sec-boolean.prototype.valueof)
    fn value_of(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Return ? ThisBooleanValue(this value).
        this_boolean_value(agent, this_value).map(Value::Boolean)
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent) {
        let this = agent.current_realm().intrinsics().boolean_prototype();
        OrdinaryObjectBuilder::new_intrinsic_object(agent, this)
            .with_property_capacity(2)
            .with_builtin_function_property::<BooleanPrototypeToString>()
            .with_builtin_function_property::<BooleanPrototypeValueOf>()
            .build();
    }
}

/// ### [20.3.3.3.1 ThisBooleanValue ( value )](https://tc39.es/ecma262/#sec-thisbooleanvalue)
fn this_boolean_value(agent: &mut Agent, value: Value) -> JsResult<bool> {
    match value {
        Value::Boolean(b) => Ok(b),
        Value::Object(Object::PrimitiveObject(object)) => match object.data(agent) {
            PrimitiveObjectData::Boolean(b) => Ok(b),
            _ => Err(agent.throw_exception(ExceptionType::TypeError, "this is not a boolean")),
        },
        _ => Err(agent.throw_exception(ExceptionType::TypeError, "this is not a boolean")),
    }
}
