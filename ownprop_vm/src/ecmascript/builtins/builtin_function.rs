// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use core::ops::{Deref, Index};

use crate::{
    ecmascript::{
        execution::{Agent, JsResult, ProtoIntrinsics},
        types::{
            InternalMethods, InternalSlots, Object, OrdinaryObject, PropertyKey, String, Value,
        },
    },
    heap::{
        CreateHeapData, Heap, indexes::BuiltinFunctionIndex,
        object_entry::ObjectEntryPropertyDescriptor,
    },
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ArgumentsList<'a>(pub &'a [Value]);

impl<'a> Deref for ArgumentsList<'a> {
    type Target = &'a [Value];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl ArgumentsList<'_> {
    #[inline]
    pub fn get(&self, index: usize) -> Value {
        *self.0.get(index).unwrap_or(&Value::Undefined)
    }
}

pub type RegularFn = fn(&mut Agent, Value, ArgumentsList<'_>) -> JsResult<Value>;

#[derive(Debug, Clone, Copy)]
pub enum Behaviour {
    Regular(RegularFn),
}

pub trait Builtin {
    const NAME: &'static str;
    const LENGTH: u8;
    const BEHAVIOUR: Behaviour;

    /// Set to Some if this builtin's property key is different from `NAME`.
    const KEY: Option<PropertyKey> = None;

    /// If the builtin function is created as a property then this controls the
    /// property's `[[Writable]]` value.
    const WRITABLE: bool = true;
    /// If the builtin function is created as a property then this controls the
    /// property's `[[Enumerable]]` value.
    const ENUMERABLE: bool = false;
    /// If the builtin function is created as a property then this controls the
    /// property's `[[Configurable]]` value.
    const CONFIGURABLE: bool = true;
}

#[derive(Debug, Default)]
pub struct BuiltinFunctionArgs {
    pub length: u32,
    pub name: &'static str,
}

impl BuiltinFunctionArgs {
    pub fn new(length: u32, name: &'static str) -> Self {
        Self { length, name }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BuiltinFunction(pub(crate) BuiltinFunctionIndex);

#[derive(Debug, Clone)]
pub struct BuiltinFunctionHeapData {
    pub(crate) object_index: Option<OrdinaryObject>,
    pub(crate) length: u8,
    pub(crate) name: Option<String>,
    pub(crate) behaviour: Behaviour,
}

impl BuiltinFunction {
    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    pub fn name(self, agent: &Agent) -> Option<String> {
        agent[self].name
    }

    pub fn length(self, agent: &Agent) -> u8 {
        agent[self].length
    }
}

/// ### [10.3.4 CreateBuiltinFunction ( behaviour, length, name, additionalInternalSlotsList \[ , realm \[ , prototype \[ , prefix \] \] \] )](https://tc39.es/ecma262/#sec-createbuiltinfunction)
///
/// The `length` and `name` own properties are created eagerly, both
/// non-writable, non-enumerable and configurable.
pub fn create_builtin_function(
    agent: &mut Agent,
    behaviour: Behaviour,
    args: BuiltinFunctionArgs,
) -> BuiltinFunction {
    let length = u8::try_from(args.length).unwrap_or(u8::MAX);
    let name = String::from_str(agent, args.name);
    let function = agent.heap.create(BuiltinFunctionHeapData {
        object_index: None,
        length,
        name: Some(name),
        behaviour,
    });
    let backing_object = function.create_backing_object(agent);
    let length_key = PropertyKey::from_str(agent, "length");
    let name_key = PropertyKey::from_str(agent, "name");
    let properties = &mut agent[backing_object].properties;
    properties.set(
        length_key,
        ObjectEntryPropertyDescriptor::data(Value::from(u32::from(length)), false, false, true),
    );
    properties.set(
        name_key,
        ObjectEntryPropertyDescriptor::data(name.into(), false, false, true),
    );
    function
}

impl From<BuiltinFunction> for Object {
    fn from(value: BuiltinFunction) -> Self {
        Object::BuiltinFunction(value)
    }
}

impl From<BuiltinFunction> for Value {
    fn from(value: BuiltinFunction) -> Self {
        Value::Object(Object::BuiltinFunction(value))
    }
}

impl InternalSlots for BuiltinFunction {
    const DEFAULT_PROTOTYPE: ProtoIntrinsics = ProtoIntrinsics::Function;

    fn get_backing_object(self, agent: &Agent) -> Option<OrdinaryObject> {
        agent[self].object_index
    }

    fn set_backing_object(self, agent: &mut Agent, backing_object: OrdinaryObject) {
        assert!(
            agent.heap.builtin_functions[self.get_index()]
                .object_index
                .replace(backing_object)
                .is_none()
        );
    }
}

impl InternalMethods for BuiltinFunction {}

impl Index<BuiltinFunction> for Agent {
    type Output = BuiltinFunctionHeapData;

    fn index(&self, index: BuiltinFunction) -> &Self::Output {
        &self.heap.builtin_functions[index.get_index()]
    }
}

impl CreateHeapData<BuiltinFunctionHeapData, BuiltinFunction> for Heap {
    fn create(&mut self, data: BuiltinFunctionHeapData) -> BuiltinFunction {
        self.builtin_functions.push(data);
        BuiltinFunction(BuiltinFunctionIndex::last(&self.builtin_functions))
    }
}
