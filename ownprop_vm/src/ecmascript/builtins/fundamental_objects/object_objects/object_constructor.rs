// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    abstract_operations::type_conversion::{to_object, to_property_key},
    execution::{Agent, JsResult},
    types::{InternalMethods, PropertyDescriptor, Value},
};

/// ### [20.1.1 The Object Constructor](https://tc39.es/ecma262/#sec-object-constructor)
pub struct ObjectConstructor;

impl ObjectConstructor {
    /// ### [20.1.2.8 Object.getOwnPropertyDescriptor ( O, P )](https://tc39.es/ecma262/#sec-object.getownpropertydescriptor)
    ///
    /// The conformant primitive. Hosts hand this out from
    /// [`HostHooks::host_get_own_property_descriptor`] when they implement it
    /// correctly; the returned record is the Property Descriptor before
    /// FromPropertyDescriptor reifies it.
    ///
    /// [`HostHooks::host_get_own_property_descriptor`]: crate::ecmascript::execution::HostHooks::host_get_own_property_descriptor
    pub fn get_own_property_descriptor(
        agent: &mut Agent,
        o: Value,
        p: Value,
    ) -> JsResult<Option<PropertyDescriptor>> {
        // 1. Let obj be ? ToObject(O).
        let obj = to_object(agent, o)?;
        // 2. Let key be ? ToPropertyKey(P).
        let key = to_property_key(agent, p)?;
        // 3. Let desc be ? obj.[[GetOwnProperty]](key).
        // 4. Return FromPropertyDescriptor(desc).
        obj.internal_get_own_property(agent, key)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ecmascript::{
        abstract_operations::operations_on_objects::create_data_property_or_throw,
        builtins::ordinary::ordinary_object_create_with_intrinsics,
        execution::{DefaultHostHooks, ExceptionType, Options, ProtoIntrinsics},
        types::PropertyKey,
    };

    #[test]
    fn own_data_property() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let obj = ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
        let key = PropertyKey::from_str(&mut agent, "a");
        create_data_property_or_throw(&mut agent, obj.into(), key, Value::Number(1.0)).unwrap();
        let a = Value::from_str(&mut agent, "a");
        let desc = ObjectConstructor::get_own_property_descriptor(&mut agent, obj.into(), a)
            .unwrap()
            .unwrap();
        assert_eq!(desc.value, Some(Value::Number(1.0)));
        assert_eq!(desc.writable, Some(true));
        assert_eq!(desc.enumerable, Some(true));
        assert_eq!(desc.configurable, Some(true));
    }

    #[test]
    fn nullish_targets_throw() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let key = Value::from_str(&mut agent, "any");
        for target in [Value::Undefined, Value::Null] {
            let error = ObjectConstructor::get_own_property_descriptor(&mut agent, target, key)
                .unwrap_err();
            assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));
        }
    }
}
