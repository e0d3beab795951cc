// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Boolean, Number, String and Symbol wrapper objects.
//!
//! String objects are exotic: they expose one read-only, enumerable,
//! non-configurable own property per UTF-16 code unit plus a `length`
//! property, as described in
//! [10.4.3 String Exotic Objects](https://tc39.es/ecma262/#sec-string-exotic-objects).

use core::ops::Index;

use crate::{
    ecmascript::{
        builtins::ordinary::{
            is_compatible_property_descriptor, ordinary_define_own_property,
            ordinary_get_own_property,
        },
        execution::{Agent, JsResult, ProtoIntrinsics},
        types::{
            InternalMethods, InternalSlots, Object, OrdinaryObject, PropertyDescriptor,
            PropertyKey, String, Symbol, Value,
        },
    },
    heap::{CreateHeapData, Heap, indexes::PrimitiveObjectIndex},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrimitiveObject(pub(crate) PrimitiveObjectIndex);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrimitiveObjectData {
    Boolean(bool),
    String(String),
    Symbol(Symbol),
    Number(f64),
}

#[derive(Debug, Clone, Copy)]
pub struct PrimitiveObjectHeapData {
    pub(crate) object_index: Option<OrdinaryObject>,
    pub(crate) data: PrimitiveObjectData,
}

impl PrimitiveObject {
    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    pub fn create(agent: &mut Agent, data: PrimitiveObjectData) -> Self {
        agent.heap.create(PrimitiveObjectHeapData {
            object_index: None,
            data,
        })
    }

    pub fn data(self, agent: &Agent) -> PrimitiveObjectData {
        agent[self].data
    }

    /// The \[\[StringData\]\] of a String object.
    pub fn string_data(self, agent: &Agent) -> Option<String> {
        match agent[self].data {
            PrimitiveObjectData::String(string) => Some(string),
            _ => None,
        }
    }

    pub fn is_string_object(self, agent: &Agent) -> bool {
        self.string_data(agent).is_some()
    }

    fn proto_intrinsics(self, agent: &Agent) -> ProtoIntrinsics {
        match agent[self].data {
            PrimitiveObjectData::Boolean(_) => ProtoIntrinsics::Boolean,
            PrimitiveObjectData::String(_) => ProtoIntrinsics::String,
            PrimitiveObjectData::Symbol(_) => ProtoIntrinsics::Symbol,
            PrimitiveObjectData::Number(_) => ProtoIntrinsics::Number,
        }
    }

    /// ### [10.4.3.5 StringGetOwnProperty ( S, P )](https://tc39.es/ecma262/#sec-stringgetownproperty)
    ///
    /// Also reports the `length` property that StringCreate defines.
    fn string_get_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
    ) -> Option<PropertyDescriptor> {
        let string = self.string_data(agent)?;
        let len = string.utf16_len(agent);
        if property_key.is_str(agent, "length") {
            return Some(PropertyDescriptor {
                value: Some(Value::Number(len as f64)),
                writable: Some(false),
                enumerable: Some(false),
                configurable: Some(false),
                ..Default::default()
            });
        }
        // 1. If P is not a String, return undefined.
        // 2. Let index be CanonicalNumericIndexString(P).
        // 3. If index is undefined, return undefined.
        // 4. If IsIntegralNumber(index) is false, return undefined.
        // 5. If index is -0𝔽 or index < -0𝔽, return undefined.
        // 6. Let str be S.[[StringData]].
        // 7. Assert: str is a String.
        // 8. Let len be the length of str.
        // 9. If ℝ(index) ≥ len, return undefined.
        let index = property_key.as_index(len)?;
        // 10. Let resultStr be the substring of str from ℝ(index) to ℝ(index) + 1.
        let result_str = string.char_at(agent, index);
        // 11. Return the PropertyDescriptor { [[Value]]: resultStr, [[Writable]]: false, [[Enumerable]]: true, [[Configurable]]: false }.
        Some(PropertyDescriptor {
            value: Some(result_str.into()),
            writable: Some(false),
            enumerable: Some(true),
            configurable: Some(false),
            ..Default::default()
        })
    }
}

impl From<PrimitiveObject> for Object {
    fn from(value: PrimitiveObject) -> Self {
        Object::PrimitiveObject(value)
    }
}

impl From<PrimitiveObject> for Value {
    fn from(value: PrimitiveObject) -> Self {
        Value::Object(Object::PrimitiveObject(value))
    }
}

impl InternalSlots for PrimitiveObject {
    const DEFAULT_PROTOTYPE: ProtoIntrinsics = ProtoIntrinsics::Object;

    fn get_backing_object(self, agent: &Agent) -> Option<OrdinaryObject> {
        agent[self].object_index
    }

    fn set_backing_object(self, agent: &mut Agent, backing_object: OrdinaryObject) {
        assert!(
            agent.heap.primitive_objects[self.get_index()]
                .object_index
                .replace(backing_object)
                .is_none()
        );
    }

    fn internal_prototype(self, agent: &Agent) -> Option<Object> {
        match self.get_backing_object(agent) {
            Some(backing_object) => agent[backing_object].prototype,
            None => Some(
                agent
                    .current_realm()
                    .intrinsics()
                    .get_intrinsic_default_proto(self.proto_intrinsics(agent)),
            ),
        }
    }
}

impl InternalMethods for PrimitiveObject {
    /// ### [10.4.3.1 \[\[GetOwnProperty\]\] ( P )](https://tc39.es/ecma262/#sec-string-exotic-objects-getownproperty-p)
    fn internal_get_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
    ) -> JsResult<Option<PropertyDescriptor>> {
        // 1. Let desc be OrdinaryGetOwnProperty(S, P).
        let desc = self.get_backing_object(agent).and_then(|backing_object| {
            ordinary_get_own_property(agent, backing_object, property_key)
        });
        // 2. If desc is not undefined, return desc.
        if desc.is_some() {
            return Ok(desc);
        }
        // 3. Return StringGetOwnProperty(S, P).
        Ok(self.string_get_own_property(agent, property_key))
    }

    /// ### [10.4.3.2 \[\[DefineOwnProperty\]\] ( P, Desc )](https://tc39.es/ecma262/#sec-string-exotic-objects-defineownproperty-p-desc)
    fn internal_define_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        property_descriptor: PropertyDescriptor,
    ) -> JsResult<bool> {
        // 1. Let stringDesc be StringGetOwnProperty(S, P).
        // 2. If stringDesc is not undefined, then
        if let Some(string_desc) = self.string_get_own_property(agent, property_key) {
            // a. Let extensible be S.[[Extensible]].
            let extensible = self.internal_extensible(agent);
            // b. Return IsCompatiblePropertyDescriptor(extensible, Desc, stringDesc).
            return Ok(is_compatible_property_descriptor(
                agent,
                extensible,
                property_descriptor,
                Some(string_desc),
                property_key,
            ));
        }
        // 3. Return ! OrdinaryDefineOwnProperty(S, P, Desc).
        ordinary_define_own_property(agent, self.into(), property_key, property_descriptor)
    }
}

impl Index<PrimitiveObject> for Agent {
    type Output = PrimitiveObjectHeapData;

    fn index(&self, index: PrimitiveObject) -> &Self::Output {
        &self.heap.primitive_objects[index.get_index()]
    }
}

impl CreateHeapData<PrimitiveObjectHeapData, PrimitiveObject> for Heap {
    fn create(&mut self, data: PrimitiveObjectHeapData) -> PrimitiveObject {
        self.primitive_objects.push(data);
        PrimitiveObject(PrimitiveObjectIndex::last(&self.primitive_objects))
    }
}
