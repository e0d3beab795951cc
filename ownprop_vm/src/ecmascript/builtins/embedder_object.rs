// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Objects owned by the host rather than by the language, such as DOM
//! elements.

use core::ops::Index;

use crate::{
    ecmascript::{
        builders::ordinary_object_builder::OrdinaryObjectBuilder,
        execution::{Agent, ProtoIntrinsics},
        types::{InternalMethods, InternalSlots, Object, OrdinaryObject, String, Value},
    },
    heap::{
        CreateHeapData, Heap, WellKnownSymbolIndexes, indexes::EmbedderObjectIndex,
        object_entry::ObjectEntryPropertyDescriptor,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmbedderObject(pub(crate) EmbedderObjectIndex);

#[derive(Debug, Clone, Copy)]
pub struct EmbedderObjectHeapData {
    pub(crate) object_index: Option<OrdinaryObject>,
    pub(crate) tag_name: String,
}

impl EmbedderObject {
    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    /// Creates a host element with the given tag name.
    pub fn create_element(agent: &mut Agent, tag_name: &str) -> Self {
        let tag_name = String::from_str(agent, tag_name);
        agent.heap.create(EmbedderObjectHeapData {
            object_index: None,
            tag_name,
        })
    }

    pub fn tag_name(self, agent: &Agent) -> String {
        agent[self].tag_name
    }
}

impl From<EmbedderObject> for Object {
    fn from(value: EmbedderObject) -> Self {
        Object::EmbedderObject(value)
    }
}

impl From<EmbedderObject> for Value {
    fn from(value: EmbedderObject) -> Self {
        Value::Object(Object::EmbedderObject(value))
    }
}

impl InternalSlots for EmbedderObject {
    const DEFAULT_PROTOTYPE: ProtoIntrinsics = ProtoIntrinsics::Element;

    fn get_backing_object(self, agent: &Agent) -> Option<OrdinaryObject> {
        agent[self].object_index
    }

    fn set_backing_object(self, agent: &mut Agent, backing_object: OrdinaryObject) {
        assert!(
            agent.heap.embedder_objects[self.get_index()]
                .object_index
                .replace(backing_object)
                .is_none()
        );
    }
}

impl InternalMethods for EmbedderObject {}

impl Index<EmbedderObject> for Agent {
    type Output = EmbedderObjectHeapData;

    fn index(&self, index: EmbedderObject) -> &Self::Output {
        &self.heap.embedder_objects[index.get_index()]
    }
}

impl CreateHeapData<EmbedderObjectHeapData, EmbedderObject> for Heap {
    fn create(&mut self, data: EmbedderObjectHeapData) -> EmbedderObject {
        self.embedder_objects.push(data);
        EmbedderObject(EmbedderObjectIndex::last(&self.embedder_objects))
    }
}

/// Prototype shared by every host element.
pub(crate) struct ElementPrototype;

impl ElementPrototype {
    pub(crate) fn create_intrinsic(agent: &mut Agent) {
        let this = agent.current_realm().intrinsics().element_prototype();
        let to_string_tag = String::from_str(agent, "HTMLElement");
        OrdinaryObjectBuilder::new_intrinsic_object(agent, this)
            .with_property_capacity(1)
            .with_property(
                WellKnownSymbolIndexes::ToStringTag.to_property_key(),
                ObjectEntryPropertyDescriptor::data(to_string_tag.into(), false, false, true),
            )
            .build();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ecmascript::{
        abstract_operations::type_conversion::to_string,
        execution::{DefaultHostHooks, Options},
    };

    #[test]
    fn elements_report_their_tag_name() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let element = EmbedderObject::create_element(&mut agent, "div");
        assert!(element.tag_name(&agent).eq_str(&agent, "div"));
        let element_prototype = agent.current_realm().intrinsics().element_prototype();
        assert_eq!(element.internal_prototype(&agent), Some(element_prototype.into()));
        let string = to_string(&mut agent, element.into()).unwrap();
        assert!(string.eq_str(&agent, "[object HTMLElement]"));
    }
}
