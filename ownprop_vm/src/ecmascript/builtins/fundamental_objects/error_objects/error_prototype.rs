// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    abstract_operations::{operations_on_objects::get, type_conversion::to_string},
    builders::ordinary_object_builder::OrdinaryObjectBuilder,
    builtins::{ArgumentsList, Behaviour, Builtin},
    execution::{Agent, ExceptionType, JsResult},
    types::{Object, PropertyKey, String, Value},
};

pub(crate) struct ErrorPrototype;

struct ErrorPrototypeToString;
impl Builtin for ErrorPrototypeToString {
    const NAME: &'static str = "toString";

    const LENGTH: u8 = 0;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(ErrorPrototype::to_string);
}

impl ErrorPrototype {
    /// ### [20.5.3.4 Error.prototype.toString ( )](https://tc39.es/ecma262/#sec-error.prototype.tostring)
    fn to_string(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Let O be the this value.
        // 2. If O is not an Object, throw a TypeError exception.
        let Ok(o) = Object::try_from(this_value) else {
            return Err(agent.throw_exception(ExceptionType::TypeError, "'this' is not an object"));
        };
        // 3. Let name be ? Get(O, "name").
        let key = PropertyKey::from_str(agent, "name");
        let name = get(agent, o, key)?;
        // 4. If name is undefined, set name to "Error"; otherwise set name to ? ToString(name).
        let name = if name.is_undefined() {
            String::from_str(agent, "Error")
        } else {
            to_string(agent, name)?
        };
        // 5. Let msg be ? Get(O, "message").
        let key = PropertyKey::from_str(agent, "message");
        let msg = get(agent, o, key)?;
        // 6. If msg is undefined, set msg to the empty String; otherwise set msg to ? ToString(msg).
        let msg = if msg.is_undefined() {
            String::from_str(agent, "")
        } else {
            to_string(agent, msg)?
        };
        if name.is_empty_string(agent) {
            // 7. If name is the empty String, return msg.
            Ok(msg.into())
        } else if msg.is_empty_string(agent) {
            // 8. If msg is the empty String, return name.
            Ok(name.into())
        } else {
            // 9. Return the string-concatenation of name, the code unit 0x003A (COLON), the code unit 0x0020 (SPACE), and msg.
            let separator = String::from_str(agent, ": ");
            Ok(String::concat(agent, &[name, separator, msg]).into())
        }
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent) {
        let this = agent.current_realm().intrinsics().error_prototype();
        let message_key = PropertyKey::from_str(agent, "message");
        let name_key = PropertyKey::from_str(agent, "name");
        let empty = Value::from_str(agent, "");
        let name = Value::from_str(agent, "Error");
        OrdinaryObjectBuilder::new_intrinsic_object(agent, this)
            .with_property_capacity(3)
            .with_data_property(message_key, empty)
            .with_data_property(name_key, name)
            .with_builtin_function_property::<ErrorPrototypeToString>()
            .build();
    }
}

#[cfg(test)]
mod test {
    use crate::ecmascript::{
        abstract_operations::operations_on_objects::{call, get},
        execution::{Agent, DefaultHostHooks, ExceptionType, Options},
        types::{PropertyKey, Value},
    };

    #[test]
    fn errors_print_name_and_message() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let error = agent
            .throw_exception(ExceptionType::TypeError, "bad key")
            .value();
        let Value::Object(object) = error else {
            unreachable!();
        };
        let key = PropertyKey::from_str(&mut agent, "toString");
        let to_string = get(&mut agent, object, key).unwrap();
        let result = call(&mut agent, to_string, error, None).unwrap();
        let Value::String(result) = result else {
            unreachable!();
        };
        // `name` is inherited from %Error.prototype%.
        assert_eq!(result.to_string_lossy(&agent), "Error: bad key");
    }
}
