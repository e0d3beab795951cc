// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    ecmascript::{
        builtins::ordinary::ordinary_object_create_with_intrinsics,
        execution::{Agent, ProtoIntrinsics},
        types::{Function, OrdinaryObject, PropertyKey, Value},
    },
    heap::object_entry::ObjectEntryPropertyDescriptor,
};

/// ### [6.2.6 The Property Descriptor Specification Type](https://tc39.es/ecma262/#sec-property-descriptor-specification-type)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PropertyDescriptor {
    /// \[\[Value]]
    pub value: Option<Value>,

    /// \[\[Writable]]
    pub writable: Option<bool>,

    /// \[\[Get]]
    ///
    /// Note: double-Option because these fields can be set explicitly undefined
    /// to unset them.
    pub get: Option<Option<Function>>,

    /// \[\[Set]]
    ///
    /// Note: double-Option because these fields can be set explicitly undefined
    /// to unset them.
    pub set: Option<Option<Function>>,

    /// \[\[Enumerable]]
    pub enumerable: Option<bool>,

    /// \[\[Configurable]]
    pub configurable: Option<bool>,
}

impl PropertyDescriptor {
    pub fn new_data_descriptor(value: impl Into<Value>) -> Self {
        Self {
            value: Some(value.into()),
            writable: Some(true),
            get: None,
            set: None,
            enumerable: Some(true),
            configurable: Some(true),
        }
    }

    /// ### [6.2.6.1 IsAccessorDescriptor ( Desc )](https://tc39.es/ecma262/#sec-isaccessordescriptor)
    pub fn is_accessor_descriptor(&self) -> bool {
        // 1. If Desc is undefined, return false.
        match (self.get, self.set) {
            // 2. If Desc has a [[Get]] field, return true.
            (Some(_), _) => true,
            // 3. If Desc has a [[Set]] field, return true.
            (_, Some(_)) => true,
            // 4. Return false.
            _ => false,
        }
    }

    /// ### [6.2.6.2 IsDataDescriptor ( Desc )](https://tc39.es/ecma262/#sec-isdatadescriptor)
    pub fn is_data_descriptor(&self) -> bool {
        // 1. If Desc is undefined, return false.
        match (self.value, self.writable) {
            // 2. If Desc has a [[Value]] field, return true.
            (Some(_), _) => true,
            // 3. If Desc has a [[Writable]] field, return true.
            (_, Some(_)) => true,
            // 4. Return false.
            _ => false,
        }
    }

    /// ### [6.2.6.3 IsGenericDescriptor ( Desc )](https://tc39.es/ecma262/#sec-isgenericdescriptor)
    pub fn is_generic_descriptor(&self) -> bool {
        // 1. If Desc is undefined, return false.
        // 2. If IsAccessorDescriptor(Desc) is true, return false.
        // 3. If IsDataDescriptor(Desc) is true, return false.
        // 4. Return true.
        !self.is_accessor_descriptor() && !self.is_data_descriptor()
    }

    pub fn has_fields(&self) -> bool {
        *self != Self::default()
    }

    /// ### [6.2.6.4 FromPropertyDescriptor ( Desc )](https://tc39.es/ecma262/#sec-frompropertydescriptor)
    ///
    /// Reifies the descriptor as an ordinary object with `value`, `writable`,
    /// `get`, `set`, `enumerable` and `configurable` data properties for the
    /// fields that are present.
    pub fn from_property_descriptor(
        desc: Option<Self>,
        agent: &mut Agent,
    ) -> Option<OrdinaryObject> {
        // 1. If Desc is undefined, return undefined.
        let desc = desc?;
        let mut entries: Vec<(&str, Value)> = Vec::with_capacity(4);
        // 4. If Desc has a [[Value]] field, then
        if let Some(value) = desc.value {
            // a. Perform ! CreateDataPropertyOrThrow(obj, "value", Desc.[[Value]]).
            entries.push(("value", value));
        }
        // 5. If Desc has a [[Writable]] field, then
        if let Some(writable) = desc.writable {
            entries.push(("writable", writable.into()));
        }
        // 6. If Desc has a [[Get]] field, then
        if let Some(get) = desc.get {
            entries.push(("get", get.map_or(Value::Undefined, Value::from)));
        }
        // 7. If Desc has a [[Set]] field, then
        if let Some(set) = desc.set {
            entries.push(("set", set.map_or(Value::Undefined, Value::from)));
        }
        // 8. If Desc has an [[Enumerable]] field, then
        if let Some(enumerable) = desc.enumerable {
            entries.push(("enumerable", enumerable.into()));
        }
        // 9. If Desc has a [[Configurable]] field, then
        if let Some(configurable) = desc.configurable {
            entries.push(("configurable", configurable.into()));
        }
        debug_assert!(entries.len() <= 4);
        // 2. Let obj be OrdinaryObjectCreate(%Object.prototype%).
        // 3. Assert: obj is an extensible ordinary object with no own properties.
        let obj = ordinary_object_create_with_intrinsics(agent, Some(ProtoIntrinsics::Object));
        for (key, value) in entries {
            let key = PropertyKey::from_str(agent, key);
            agent[obj]
                .properties
                .set(key, ObjectEntryPropertyDescriptor::data(value, true, true, true));
        }
        // 10. Return obj.
        Some(obj)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ecmascript::{
        abstract_operations::operations_on_objects::get,
        execution::{DefaultHostHooks, Options},
    };

    #[test]
    fn descriptor_kinds() {
        let data = PropertyDescriptor::new_data_descriptor(1);
        assert!(data.is_data_descriptor());
        assert!(!data.is_accessor_descriptor());

        let accessor = PropertyDescriptor {
            get: Some(None),
            ..Default::default()
        };
        assert!(accessor.is_accessor_descriptor());

        let generic = PropertyDescriptor {
            enumerable: Some(true),
            ..Default::default()
        };
        assert!(generic.is_generic_descriptor());
        assert!(!PropertyDescriptor::default().has_fields());
    }

    #[test]
    fn reified_descriptor() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        assert_eq!(PropertyDescriptor::from_property_descriptor(None, &mut agent), None);
        let desc = PropertyDescriptor {
            value: Some(Value::Number(7.0)),
            writable: Some(false),
            ..Default::default()
        };
        let obj = PropertyDescriptor::from_property_descriptor(Some(desc), &mut agent).unwrap();
        assert_eq!(obj.property_count(&agent), 2);
        let key = PropertyKey::from_str(&mut agent, "value");
        assert_eq!(get(&mut agent, obj.into(), key).unwrap(), Value::Number(7.0));
        let key = PropertyKey::from_str(&mut agent, "writable");
        assert_eq!(get(&mut agent, obj.into(), key).unwrap(), Value::Boolean(false));
    }
}
