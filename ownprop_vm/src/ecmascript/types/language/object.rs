// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod internal_methods;
mod internal_slots;
mod property_key;
mod property_storage;

use core::ops::{Index, IndexMut};

pub use internal_methods::InternalMethods;
pub use internal_slots::InternalSlots;
pub(crate) use property_key::MAX_INTEGER_INDEX;
pub use property_key::{PropertyKey, parse_string_to_integer_property_key};
pub use property_storage::PropertyStorage;

use super::Value;
use crate::{
    ecmascript::{
        builtins::{BuiltinFunction, EmbedderObject, Error, PrimitiveObject},
        execution::{Agent, JsResult, ProtoIntrinsics},
        types::PropertyDescriptor,
    },
    heap::{CreateHeapData, Heap, indexes::ObjectIndex},
};

/// ### [6.1.7 The Object Type](https://tc39.es/ecma262/#sec-object-type)
///
/// In Rust terms, an Object is a handle to one of several kinds of heap
/// data, each of which implements the essential internal methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Object {
    Object(OrdinaryObject),
    BuiltinFunction(BuiltinFunction),
    PrimitiveObject(PrimitiveObject),
    EmbedderObject(EmbedderObject),
    Error(Error),
}

/// An object with only ordinary internal methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrdinaryObject(pub(crate) ObjectIndex);

#[derive(Debug, Clone, Default)]
pub struct ObjectHeapData {
    pub(crate) extensible: bool,
    pub(crate) prototype: Option<Object>,
    pub(crate) properties: PropertyStorage,
}

impl ObjectHeapData {
    pub(crate) fn new(prototype: Option<Object>, extensible: bool) -> Self {
        Self {
            extensible,
            prototype,
            properties: PropertyStorage::default(),
        }
    }
}

impl OrdinaryObject {
    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    pub fn property_count(self, agent: &Agent) -> usize {
        agent[self].properties.len()
    }
}

impl Object {
    pub fn is_callable(self) -> bool {
        matches!(self, Object::BuiltinFunction(_))
    }
}

impl From<OrdinaryObject> for Object {
    fn from(value: OrdinaryObject) -> Self {
        Object::Object(value)
    }
}

impl From<OrdinaryObject> for Value {
    fn from(value: OrdinaryObject) -> Self {
        Value::Object(Object::Object(value))
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl TryFrom<Value> for Object {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, ()> {
        match value {
            Value::Object(object) => Ok(object),
            _ => Err(()),
        }
    }
}

impl TryFrom<Object> for OrdinaryObject {
    type Error = ();

    fn try_from(value: Object) -> Result<Self, Self::Error> {
        match value {
            Object::Object(data) => Ok(data),
            _ => Err(()),
        }
    }
}

impl InternalSlots for OrdinaryObject {
    const DEFAULT_PROTOTYPE: ProtoIntrinsics = ProtoIntrinsics::Object;

    fn get_backing_object(self, _: &Agent) -> Option<OrdinaryObject> {
        Some(self)
    }

    fn set_backing_object(self, _: &mut Agent, _: OrdinaryObject) {
        unreachable!("ordinary objects are their own backing object");
    }

    fn create_backing_object(self, _: &mut Agent) -> OrdinaryObject {
        self
    }
}

impl InternalMethods for OrdinaryObject {}

macro_rules! object_delegate {
    ($value: ident, $method: ident, $($arg:expr),*) => {
        match $value {
            Self::Object(data) => data.$method($($arg),+),
            Self::BuiltinFunction(data) => data.$method($($arg),+),
            Self::PrimitiveObject(data) => data.$method($($arg),+),
            Self::EmbedderObject(data) => data.$method($($arg),+),
            Self::Error(data) => data.$method($($arg),+),
        }
    };
}

impl InternalSlots for Object {
    const DEFAULT_PROTOTYPE: ProtoIntrinsics = ProtoIntrinsics::Object;

    fn get_backing_object(self, agent: &Agent) -> Option<OrdinaryObject> {
        object_delegate!(self, get_backing_object, agent)
    }

    fn set_backing_object(self, agent: &mut Agent, backing_object: OrdinaryObject) {
        object_delegate!(self, set_backing_object, agent, backing_object)
    }

    fn create_backing_object(self, agent: &mut Agent) -> OrdinaryObject {
        object_delegate!(self, create_backing_object, agent)
    }

    fn get_or_create_backing_object(self, agent: &mut Agent) -> OrdinaryObject {
        object_delegate!(self, get_or_create_backing_object, agent)
    }

    fn internal_extensible(self, agent: &Agent) -> bool {
        object_delegate!(self, internal_extensible, agent)
    }

    fn internal_set_extensible(self, agent: &mut Agent, value: bool) {
        object_delegate!(self, internal_set_extensible, agent, value)
    }

    fn internal_prototype(self, agent: &Agent) -> Option<Object> {
        object_delegate!(self, internal_prototype, agent)
    }

    fn internal_set_prototype(self, agent: &mut Agent, prototype: Option<Object>) {
        object_delegate!(self, internal_set_prototype, agent, prototype)
    }
}

impl InternalMethods for Object {
    fn internal_get_prototype_of(self, agent: &mut Agent) -> JsResult<Option<Object>> {
        object_delegate!(self, internal_get_prototype_of, agent)
    }

    fn internal_set_prototype_of(
        self,
        agent: &mut Agent,
        prototype: Option<Object>,
    ) -> JsResult<bool> {
        object_delegate!(self, internal_set_prototype_of, agent, prototype)
    }

    fn internal_is_extensible(self, agent: &mut Agent) -> JsResult<bool> {
        object_delegate!(self, internal_is_extensible, agent)
    }

    fn internal_prevent_extensions(self, agent: &mut Agent) -> JsResult<bool> {
        object_delegate!(self, internal_prevent_extensions, agent)
    }

    fn internal_get_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
    ) -> JsResult<Option<PropertyDescriptor>> {
        object_delegate!(self, internal_get_own_property, agent, property_key)
    }

    fn internal_define_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        property_descriptor: PropertyDescriptor,
    ) -> JsResult<bool> {
        object_delegate!(
            self,
            internal_define_own_property,
            agent,
            property_key,
            property_descriptor
        )
    }

    fn internal_has_property(self, agent: &mut Agent, property_key: PropertyKey) -> JsResult<bool> {
        object_delegate!(self, internal_has_property, agent, property_key)
    }

    fn internal_get(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        receiver: Value,
    ) -> JsResult<Value> {
        object_delegate!(self, internal_get, agent, property_key, receiver)
    }

    fn internal_set(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        value: Value,
        receiver: Value,
    ) -> JsResult<bool> {
        object_delegate!(self, internal_set, agent, property_key, value, receiver)
    }

    fn internal_delete(self, agent: &mut Agent, property_key: PropertyKey) -> JsResult<bool> {
        object_delegate!(self, internal_delete, agent, property_key)
    }
}

impl Index<OrdinaryObject> for Agent {
    type Output = ObjectHeapData;

    fn index(&self, index: OrdinaryObject) -> &Self::Output {
        &self.heap.objects[index.get_index()]
    }
}

impl IndexMut<OrdinaryObject> for Agent {
    fn index_mut(&mut self, index: OrdinaryObject) -> &mut Self::Output {
        &mut self.heap.objects[index.get_index()]
    }
}

impl CreateHeapData<ObjectHeapData, OrdinaryObject> for Heap {
    fn create(&mut self, data: ObjectHeapData) -> OrdinaryObject {
        self.objects.push(data);
        OrdinaryObject(ObjectIndex::last(&self.objects))
    }
}
