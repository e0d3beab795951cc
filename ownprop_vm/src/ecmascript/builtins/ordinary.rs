// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [10.1 Ordinary Object Internal Methods and Internal Slots](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots)

use crate::{
    ecmascript::{
        abstract_operations::{
            operations_on_objects::{call_function, create_data_property},
            testing_and_comparison::same_value,
        },
        builtins::ArgumentsList,
        execution::{Agent, JsResult, ProtoIntrinsics},
        types::{
            InternalMethods, InternalSlots, Object, ObjectHeapData, OrdinaryObject,
            PropertyDescriptor, PropertyKey, Value,
        },
    },
    heap::{CreateHeapData, object_entry::ObjectEntryPropertyDescriptor},
};

/// ### [10.1.2.1 OrdinarySetPrototypeOf ( O, V )](https://tc39.es/ecma262/#sec-ordinarysetprototypeof)
pub(crate) fn ordinary_set_prototype_of(
    agent: &mut Agent,
    object: Object,
    prototype: Option<Object>,
) -> bool {
    // 1. Let current be O.[[Prototype]].
    let current = object.internal_prototype(agent);

    // 2. If SameValue(V, current) is true, return true.
    if prototype == current {
        return true;
    }

    // 3. Let extensible be O.[[Extensible]].
    // 4. If extensible is false, return false.
    if !object.internal_extensible(agent) {
        return false;
    }

    // 5. Let p be V.
    let mut parent_prototype_outer = prototype;

    // 6. Let done be false.
    // 7. Repeat, while done is false,
    while let Some(parent_prototype) = parent_prototype_outer {
        // a. If p is null, then
        //     i. Set done to true.

        // b. Else if SameValue(p, O) is true, then
        if parent_prototype == object {
            // i. Return false.
            return false;
        }

        // c. Else,
        // i. If p.[[GetPrototypeOf]] is not the ordinary object internal method defined in 10.1.1,
        //    set done to true.
        // ii. Else, set p to p.[[Prototype]].
        parent_prototype_outer = parent_prototype.internal_prototype(agent);
    }

    // 8. Set O.[[Prototype]] to V.
    object.internal_set_prototype(agent, prototype);

    // 9. Return true.
    true
}

/// ### [10.1.5.1 OrdinaryGetOwnProperty ( O, P )](https://tc39.es/ecma262/#sec-ordinarygetownproperty)
pub(crate) fn ordinary_get_own_property(
    agent: &Agent,
    object: OrdinaryObject,
    property_key: PropertyKey,
) -> Option<PropertyDescriptor> {
    // 1. If O does not have an own property with key P, return undefined.
    // 2. Let D be a newly created Property Descriptor with no fields.
    // 3. Let X be O's own property whose key is P.
    // 4. If X is a data property, then
    //    a. Set D.[[Value]] to the value of X's [[Value]] attribute.
    //    b. Set D.[[Writable]] to the value of X's [[Writable]] attribute.
    // 5. Else,
    //    a. Assert: X is an accessor property.
    //    b. Set D.[[Get]] to the value of X's [[Get]] attribute.
    //    c. Set D.[[Set]] to the value of X's [[Set]] attribute.
    // 6. Set D.[[Enumerable]] to the value of X's [[Enumerable]] attribute.
    // 7. Set D.[[Configurable]] to the value of X's [[Configurable]] attribute.
    // 8. Return D.
    agent[object]
        .properties
        .get(property_key)
        .map(PropertyDescriptor::from)
}

/// ### [10.1.6.1 OrdinaryDefineOwnProperty ( O, P, Desc )](https://tc39.es/ecma262/#sec-ordinarydefineownproperty)
pub(crate) fn ordinary_define_own_property(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
    descriptor: PropertyDescriptor,
) -> JsResult<bool> {
    // 1. Let current be ? O.[[GetOwnProperty]](P).
    let current = object.internal_get_own_property(agent, property_key)?;

    // 2. Let extensible be ? IsExtensible(O).
    let extensible = object.internal_is_extensible(agent)?;

    // 3. Return ValidateAndApplyPropertyDescriptor(O, P, extensible, Desc, current).
    let backing_object = object.get_or_create_backing_object(agent);
    Ok(validate_and_apply_property_descriptor(
        agent,
        Some(backing_object),
        property_key,
        extensible,
        descriptor,
        current,
    ))
}

/// ### [10.1.6.2 IsCompatiblePropertyDescriptor ( Extensible, Desc, Current )](https://tc39.es/ecma262/#sec-iscompatiblepropertydescriptor)
pub(crate) fn is_compatible_property_descriptor(
    agent: &mut Agent,
    extensible: bool,
    descriptor: PropertyDescriptor,
    current: Option<PropertyDescriptor>,
    property_key: PropertyKey,
) -> bool {
    // 1. Return ValidateAndApplyPropertyDescriptor(undefined, "", Extensible, Desc, Current).
    validate_and_apply_property_descriptor(
        agent,
        None,
        property_key,
        extensible,
        descriptor,
        current,
    )
}

/// ### [10.1.6.3 ValidateAndApplyPropertyDescriptor ( O, P, extensible, Desc, current )](https://tc39.es/ecma262/#sec-validateandapplypropertydescriptor)
fn validate_and_apply_property_descriptor(
    agent: &mut Agent,
    object: Option<OrdinaryObject>,
    property_key: PropertyKey,
    extensible: bool,
    descriptor: PropertyDescriptor,
    current: Option<PropertyDescriptor>,
) -> bool {
    // 1. Assert: IsPropertyKey(P) is true.

    // 2. If current is undefined, then
    let Some(current) = current else {
        // a. If extensible is false, return false.
        if !extensible {
            return false;
        }

        // b. If O is undefined, return true.
        let Some(object) = object else {
            return true;
        };

        // c. If IsAccessorDescriptor(Desc) is true, then
        //    i. Create an own accessor property named P of object O whose
        //       [[Get]], [[Set]], [[Enumerable]], and [[Configurable]]
        //       attributes are set to the value of the corresponding field
        //       in Desc if Desc has that field, or to the attribute's default
        //       value otherwise.
        // d. Else,
        //    i. Create an own data property named P of object O whose
        //       [[Value]], [[Writable]], [[Enumerable]], and [[Configurable]]
        //       attributes are set to the value of the corresponding field
        //       in Desc if Desc has that field, or to the attribute's default
        //       value otherwise.
        agent[object].properties.set(
            property_key,
            ObjectEntryPropertyDescriptor::from_descriptor(&descriptor),
        );

        // e. Return true.
        return true;
    };

    // 3. Assert: current is a fully populated Property Descriptor.
    debug_assert!(current.enumerable.is_some() && current.configurable.is_some());

    // 4. If Desc does not have any fields, return true.
    if !descriptor.has_fields() {
        return true;
    }

    // 5. If current.[[Configurable]] is false, then
    if current.configurable == Some(false) {
        // a. If Desc has a [[Configurable]] field and Desc.[[Configurable]] is true, return false.
        if descriptor.configurable == Some(true) {
            return false;
        }

        // b. If Desc has an [[Enumerable]] field and SameValue(Desc.[[Enumerable]], current.[[Enumerable]])
        //    is false, return false.
        if descriptor
            .enumerable
            .is_some_and(|enumerable| Some(enumerable) != current.enumerable)
        {
            return false;
        }

        // c. If IsGenericDescriptor(Desc) is false and SameValue(IsAccessorDescriptor(Desc), IsAccessorDescriptor(current))
        //    is false, return false.
        if !descriptor.is_generic_descriptor()
            && descriptor.is_accessor_descriptor() != current.is_accessor_descriptor()
        {
            return false;
        }

        // d. If IsAccessorDescriptor(current) is true, then
        if current.is_accessor_descriptor() {
            // i. If Desc has a [[Get]] field and SameValue(Desc.[[Get]], current.[[Get]]) is false,
            //    return false.
            if descriptor
                .get
                .is_some_and(|get| get != current.get.flatten())
            {
                return false;
            }

            // ii. If Desc has a [[Set]] field and SameValue(Desc.[[Set]], current.[[Set]]) is
            //     false, return false.
            if descriptor
                .set
                .is_some_and(|set| set != current.set.flatten())
            {
                return false;
            }
        }
        // e. Else if current.[[Writable]] is false, then
        else if current.writable == Some(false) {
            // i. If Desc has a [[Writable]] field and Desc.[[Writable]] is true, return false.
            if descriptor.writable == Some(true) {
                return false;
            }

            // ii. If Desc has a [[Value]] field and SameValue(Desc.[[Value]], current.[[Value]])
            //     is false, return false.
            if descriptor
                .value
                .is_some_and(|value| !same_value(value, current.value.unwrap_or_default()))
            {
                return false;
            }
        }
    }

    // 6. If O is not undefined, then
    if let Some(object) = object {
        let enumerable = descriptor.enumerable.or(current.enumerable).unwrap_or(false);
        let configurable = descriptor
            .configurable
            .or(current.configurable)
            .unwrap_or(false);
        let entry = if current.is_data_descriptor() && descriptor.is_accessor_descriptor() {
            // a. If IsDataDescriptor(current) is true and IsAccessorDescriptor(Desc) is true, then
            //    i. If Desc has a [[Configurable]] field, let configurable be
            //       Desc.[[Configurable]]; else let configurable be
            //       current.[[Configurable]].
            //    ii. If Desc has a [[Enumerable]] field, let enumerable be
            //        Desc.[[Enumerable]]; else let enumerable be
            //        current.[[Enumerable]].
            //    iii. Replace the property named P of object O with an
            //         accessor property whose [[Configurable]] and
            //         [[Enumerable]] attributes are set to configurable and
            //         enumerable, respectively, and whose [[Get]] and [[Set]]
            //         attributes are set to the value of the corresponding
            //         field in Desc if Desc has that field, or to the
            //         attribute's default value otherwise.
            ObjectEntryPropertyDescriptor::accessor(
                descriptor.get.flatten(),
                descriptor.set.flatten(),
                enumerable,
                configurable,
            )
        } else if current.is_accessor_descriptor() && descriptor.is_data_descriptor() {
            // b. Else if IsAccessorDescriptor(current) is true and IsDataDescriptor(Desc) is true, then
            //    iii. Replace the property named P of object O with a data
            //         property whose [[Configurable]] and [[Enumerable]]
            //         attributes are set to configurable and enumerable,
            //         respectively, and whose [[Value]] and [[Writable]]
            //         attributes are set to the value of the corresponding
            //         field in Desc if Desc has that field, or to the
            //         attribute's default value otherwise.
            ObjectEntryPropertyDescriptor::data(
                descriptor.value.unwrap_or_default(),
                descriptor.writable.unwrap_or(false),
                enumerable,
                configurable,
            )
        } else {
            // c. Else,
            //    i. For each field of Desc, set the corresponding attribute
            //       of the property named P of object O to the value of the
            //       field.
            ObjectEntryPropertyDescriptor::from_descriptor(&PropertyDescriptor {
                value: descriptor.value.or(current.value),
                writable: descriptor.writable.or(current.writable),
                get: descriptor.get.or(current.get),
                set: descriptor.set.or(current.set),
                enumerable: Some(enumerable),
                configurable: Some(configurable),
            })
        };
        agent[object].properties.set(property_key, entry);
    }

    // 7. Return true.
    true
}

/// ### [10.1.7.1 OrdinaryHasProperty ( O, P )](https://tc39.es/ecma262/#sec-ordinaryhasproperty)
pub(crate) fn ordinary_has_property(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
) -> JsResult<bool> {
    // 1. Let hasOwn be ? O.[[GetOwnProperty]](P).
    let has_own = object.internal_get_own_property(agent, property_key)?;

    // 2. If hasOwn is not undefined, return true.
    if has_own.is_some() {
        return Ok(true);
    }

    // 3. Let parent be ? O.[[GetPrototypeOf]]().
    // 4. If parent is not null, then
    match object.internal_get_prototype_of(agent)? {
        // a. Return ? parent.[[HasProperty]](P).
        Some(parent) => parent.internal_has_property(agent, property_key),
        // 5. Return false.
        None => Ok(false),
    }
}

/// ### [10.1.8.1 OrdinaryGet ( O, P, Receiver )](https://tc39.es/ecma262/#sec-ordinaryget)
pub(crate) fn ordinary_get(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
    receiver: Value,
) -> JsResult<Value> {
    // 1. Let desc be ? O.[[GetOwnProperty]](P).
    let Some(descriptor) = object.internal_get_own_property(agent, property_key)? else {
        // 2. If desc is undefined, then
        // a. Let parent be ? O.[[GetPrototypeOf]]().
        let Some(parent) = object.internal_get_prototype_of(agent)? else {
            // b. If parent is null, return undefined.
            return Ok(Value::Undefined);
        };

        // c. Return ? parent.[[Get]](P, Receiver).
        return parent.internal_get(agent, property_key, receiver);
    };

    // 3. If IsDataDescriptor(desc) is true, return desc.[[Value]].
    if descriptor.is_data_descriptor() {
        return Ok(descriptor.value.unwrap_or_default());
    }

    // 4. Assert: IsAccessorDescriptor(desc) is true.
    // 5. Let getter be desc.[[Get]].
    // 6. If getter is undefined, return undefined.
    let Some(getter) = descriptor.get.flatten() else {
        return Ok(Value::Undefined);
    };

    // 7. Return ? Call(getter, Receiver).
    call_function(agent, getter, receiver, None)
}

/// ### [10.1.9.1 OrdinarySet ( O, P, V, Receiver )](https://tc39.es/ecma262/#sec-ordinaryset)
pub(crate) fn ordinary_set(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
    value: Value,
    receiver: Value,
) -> JsResult<bool> {
    // 1. Let ownDesc be ? O.[[GetOwnProperty]](P).
    let own_descriptor = object.internal_get_own_property(agent, property_key)?;

    // 2. Return ? OrdinarySetWithOwnDescriptor(O, P, V, Receiver, ownDesc).
    ordinary_set_with_own_descriptor(agent, object, property_key, value, receiver, own_descriptor)
}

/// ### [10.1.9.2 OrdinarySetWithOwnDescriptor ( O, P, V, Receiver, ownDesc )](https://tc39.es/ecma262/#sec-ordinarysetwithowndescriptor)
fn ordinary_set_with_own_descriptor(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
    value: Value,
    receiver: Value,
    own_descriptor: Option<PropertyDescriptor>,
) -> JsResult<bool> {
    let own_descriptor = if let Some(own_descriptor) = own_descriptor {
        own_descriptor
    } else {
        // 1. If ownDesc is undefined, then
        // a. Let parent be ? O.[[GetPrototypeOf]]().
        // b. If parent is not null, then
        if let Some(parent) = object.internal_get_prototype_of(agent)? {
            // i. Return ? parent.[[Set]](P, V, Receiver).
            return parent.internal_set(agent, property_key, value, receiver);
        }
        // c. Else,
        // i. Set ownDesc to the PropertyDescriptor {
        //      [[Value]]: undefined, [[Writable]]: true, [[Enumerable]]: true, [[Configurable]]: true
        //    }.
        PropertyDescriptor::new_data_descriptor(Value::Undefined)
    };

    // 2. If IsDataDescriptor(ownDesc) is true, then
    if own_descriptor.is_data_descriptor() {
        // a. If ownDesc.[[Writable]] is false, return false.
        if own_descriptor.writable == Some(false) {
            return Ok(false);
        }

        // b. If Receiver is not an Object, return false.
        let Value::Object(receiver) = receiver else {
            return Ok(false);
        };

        // c. Let existingDescriptor be ? Receiver.[[GetOwnProperty]](P).
        let existing_descriptor = receiver.internal_get_own_property(agent, property_key)?;

        // d. If existingDescriptor is not undefined, then
        if let Some(existing_descriptor) = existing_descriptor {
            // i. If IsAccessorDescriptor(existingDescriptor) is true, return false.
            if existing_descriptor.is_accessor_descriptor() {
                return Ok(false);
            }

            // ii. If existingDescriptor.[[Writable]] is false, return false.
            if existing_descriptor.writable == Some(false) {
                return Ok(false);
            }

            // iii. Let valueDesc be the PropertyDescriptor { [[Value]]: V }.
            let value_descriptor = PropertyDescriptor {
                value: Some(value),
                ..Default::default()
            };

            // iv. Return ? Receiver.[[DefineOwnProperty]](P, valueDesc).
            return receiver.internal_define_own_property(agent, property_key, value_descriptor);
        }

        // e. Else,
        // i. Assert: Receiver does not currently have a property P.
        // ii. Return ? CreateDataProperty(Receiver, P, V).
        return create_data_property(agent, receiver, property_key, value);
    }

    // 3. Assert: IsAccessorDescriptor(ownDesc) is true.
    debug_assert!(own_descriptor.is_accessor_descriptor());

    // 4. Let setter be ownDesc.[[Set]].
    // 5. If setter is undefined, return false.
    let Some(setter) = own_descriptor.set.flatten() else {
        return Ok(false);
    };

    // 6. Perform ? Call(setter, Receiver, « V »).
    call_function(agent, setter, receiver, Some(ArgumentsList(&[value])))?;

    // 7. Return true.
    Ok(true)
}

/// ### [10.1.10.1 OrdinaryDelete ( O, P )](https://tc39.es/ecma262/#sec-ordinarydelete)
pub(crate) fn ordinary_delete(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
) -> JsResult<bool> {
    // 1. Let desc be ? O.[[GetOwnProperty]](P).
    let Some(descriptor) = object.internal_get_own_property(agent, property_key)? else {
        // 2. If desc is undefined, return true.
        return Ok(true);
    };

    // 3. If desc.[[Configurable]] is true, then
    if descriptor.configurable == Some(true) {
        // a. Remove the own property with name P from O.
        if let Some(backing_object) = object.get_backing_object(agent) {
            agent[backing_object].properties.remove(property_key);
        }

        // b. Return true.
        return Ok(true);
    }

    // 4. Return false.
    Ok(false)
}

/// ### [10.1.12 OrdinaryObjectCreate ( proto \[ , additionalInternalSlotsList \] )](https://tc39.es/ecma262/#sec-ordinaryobjectcreate)
///
/// Creates an extensible ordinary object whose prototype is the given
/// intrinsic, or null.
pub fn ordinary_object_create_with_intrinsics(
    agent: &mut Agent,
    proto_intrinsics: Option<ProtoIntrinsics>,
) -> OrdinaryObject {
    let prototype = proto_intrinsics.map(|proto_intrinsics| {
        agent
            .current_realm()
            .intrinsics()
            .get_intrinsic_default_proto(proto_intrinsics)
    });
    agent.heap.create(ObjectHeapData::new(prototype, true))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ecmascript::{
        abstract_operations::operations_on_objects::{define_property_or_throw, get, set},
        execution::{DefaultHostHooks, Options},
    };

    fn non_configurable(value: Value, writable: bool) -> PropertyDescriptor {
        PropertyDescriptor {
            value: Some(value),
            writable: Some(writable),
            enumerable: Some(false),
            configurable: Some(false),
            ..Default::default()
        }
    }

    #[test]
    fn prototype_cycles_are_refused() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let a = ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
        let b = ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
        assert!(ordinary_set_prototype_of(&mut agent, b.into(), Some(a.into())));
        assert!(!ordinary_set_prototype_of(&mut agent, a.into(), Some(b.into())));
    }

    #[test]
    fn non_extensible_prototype_is_frozen() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let a = ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
        a.internal_prevent_extensions(&mut agent).unwrap();
        assert!(!ordinary_set_prototype_of(&mut agent, a.into(), None));
        // Setting the same prototype again is always allowed.
        let current = a.internal_prototype(&agent);
        assert!(ordinary_set_prototype_of(&mut agent, a.into(), current));
    }

    #[test]
    fn non_configurable_properties_resist_redefinition() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let obj = ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
        let key = PropertyKey::from_str(&mut agent, "fixed");
        define_property_or_throw(&mut agent, obj, key, non_configurable(Value::Number(1.0), false))
            .unwrap();

        // Same value is fine.
        assert!(
            obj.internal_define_own_property(
                &mut agent,
                key,
                non_configurable(Value::Number(1.0), false),
            )
            .unwrap()
        );
        // Different value, enumerable flip or becoming configurable is not.
        assert!(
            !obj.internal_define_own_property(
                &mut agent,
                key,
                non_configurable(Value::Number(2.0), false),
            )
            .unwrap()
        );
        let enumerable = PropertyDescriptor {
            enumerable: Some(true),
            ..Default::default()
        };
        assert!(!obj.internal_define_own_property(&mut agent, key, enumerable).unwrap());
        let configurable = PropertyDescriptor {
            configurable: Some(true),
            ..Default::default()
        };
        assert!(!obj.internal_define_own_property(&mut agent, key, configurable).unwrap());
        assert!(!obj.internal_delete(&mut agent, key).unwrap());
    }

    #[test]
    fn partial_descriptors_merge_into_existing_properties() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let obj = ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
        let key = PropertyKey::from_str(&mut agent, "x");
        set(&mut agent, obj.into(), key, Value::Number(1.0), true).unwrap();
        let hide = PropertyDescriptor {
            enumerable: Some(false),
            ..Default::default()
        };
        assert!(obj.internal_define_own_property(&mut agent, key, hide).unwrap());
        let desc = obj.internal_get_own_property(&mut agent, key).unwrap().unwrap();
        assert_eq!(desc.value, Some(Value::Number(1.0)));
        assert_eq!(desc.writable, Some(true));
        assert_eq!(desc.enumerable, Some(false));
        assert_eq!(desc.configurable, Some(true));
    }

    #[test]
    fn read_only_data_blocks_assignment() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let obj = ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
        let key = PropertyKey::from_str(&mut agent, "x");
        define_property_or_throw(&mut agent, obj, key, non_configurable(Value::Number(1.0), false))
            .unwrap();
        assert!(set(&mut agent, obj.into(), key, Value::Number(2.0), true).is_err());
        assert_eq!(get(&mut agent, obj.into(), key).unwrap(), Value::Number(1.0));
    }
}
