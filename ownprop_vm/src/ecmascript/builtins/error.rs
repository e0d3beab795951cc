// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use core::ops::Index;

use crate::{
    ecmascript::{
        execution::{Agent, ExceptionType, ProtoIntrinsics},
        types::{InternalMethods, InternalSlots, Object, OrdinaryObject, PropertyKey, String, Value},
    },
    heap::{
        CreateHeapData, Heap, indexes::ErrorIndex, object_entry::ObjectEntryPropertyDescriptor,
    },
};

/// ### [20.5 Error Objects](https://tc39.es/ecma262/#sec-error-objects)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Error(pub(crate) ErrorIndex);

#[derive(Debug, Clone, Copy)]
pub struct ErrorHeapData {
    pub(crate) object_index: Option<OrdinaryObject>,
    pub(crate) kind: ExceptionType,
    pub(crate) message: Option<String>,
}

impl Error {
    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    /// Creates an Error object; a message becomes its own, non-enumerable
    /// `message` property.
    pub(crate) fn create(agent: &mut Agent, kind: ExceptionType, message: Option<String>) -> Self {
        let error = agent.heap.create(ErrorHeapData {
            object_index: None,
            kind,
            message,
        });
        if let Some(message) = message {
            let backing_object = error.create_backing_object(agent);
            let key = PropertyKey::from_str(agent, "message");
            agent[backing_object].properties.set(
                key,
                ObjectEntryPropertyDescriptor::data(message.into(), true, false, true),
            );
        }
        error
    }

    pub fn kind(self, agent: &Agent) -> ExceptionType {
        agent[self].kind
    }

    pub fn message(self, agent: &Agent) -> Option<String> {
        agent[self].message
    }
}

impl From<Error> for Object {
    fn from(value: Error) -> Self {
        Object::Error(value)
    }
}

impl From<Error> for Value {
    fn from(value: Error) -> Self {
        Value::Object(Object::Error(value))
    }
}

impl InternalSlots for Error {
    const DEFAULT_PROTOTYPE: ProtoIntrinsics = ProtoIntrinsics::Error;

    fn get_backing_object(self, agent: &Agent) -> Option<OrdinaryObject> {
        agent[self].object_index
    }

    fn set_backing_object(self, agent: &mut Agent, backing_object: OrdinaryObject) {
        assert!(
            agent.heap.errors[self.get_index()]
                .object_index
                .replace(backing_object)
                .is_none()
        );
    }
}

impl InternalMethods for Error {}

impl Index<Error> for Agent {
    type Output = ErrorHeapData;

    fn index(&self, index: Error) -> &Self::Output {
        &self.heap.errors[index.get_index()]
    }
}

impl CreateHeapData<ErrorHeapData, Error> for Heap {
    fn create(&mut self, data: ErrorHeapData) -> Error {
        self.errors.push(data);
        Error(ErrorIndex::last(&self.errors))
    }
}
