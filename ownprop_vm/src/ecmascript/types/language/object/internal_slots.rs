// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{Object, ObjectHeapData, OrdinaryObject};
use crate::{
    ecmascript::execution::{Agent, ProtoIntrinsics},
    heap::CreateHeapData,
};

/// ### [10.1 Ordinary Object Internal Methods and Internal Slots](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots)
///
/// Objects other than ordinary objects keep their \[\[Prototype\]\],
/// \[\[Extensible\]\] and ordinary properties in a lazily created backing
/// [OrdinaryObject].
pub trait InternalSlots
where
    Self: Sized + Copy + Into<Object>,
{
    /// Prototype intrinsic of objects of this kind while they have no
    /// backing object.
    const DEFAULT_PROTOTYPE: ProtoIntrinsics;

    fn get_backing_object(self, agent: &Agent) -> Option<OrdinaryObject>;

    fn set_backing_object(self, agent: &mut Agent, backing_object: OrdinaryObject);

    fn create_backing_object(self, agent: &mut Agent) -> OrdinaryObject {
        let prototype = self.internal_prototype(agent);
        let backing_object = agent.heap.create(ObjectHeapData::new(prototype, true));
        self.set_backing_object(agent, backing_object);
        backing_object
    }

    fn get_or_create_backing_object(self, agent: &mut Agent) -> OrdinaryObject {
        match self.get_backing_object(agent) {
            Some(backing_object) => backing_object,
            None => self.create_backing_object(agent),
        }
    }

    /// #### \[\[Extensible\]\]
    fn internal_extensible(self, agent: &Agent) -> bool {
        self.get_backing_object(agent)
            .is_none_or(|backing_object| agent[backing_object].extensible)
    }

    /// #### \[\[Extensible\]\]
    fn internal_set_extensible(self, agent: &mut Agent, value: bool) {
        let backing_object = self.get_or_create_backing_object(agent);
        agent[backing_object].extensible = value;
    }

    /// #### \[\[Prototype\]\]
    fn internal_prototype(self, agent: &Agent) -> Option<Object> {
        match self.get_backing_object(agent) {
            Some(backing_object) => agent[backing_object].prototype,
            None => Some(
                agent
                    .current_realm()
                    .intrinsics()
                    .get_intrinsic_default_proto(Self::DEFAULT_PROTOTYPE),
            ),
        }
    }

    /// #### \[\[Prototype\]\]
    fn internal_set_prototype(self, agent: &mut Agent, prototype: Option<Object>) {
        let backing_object = self.get_or_create_backing_object(agent);
        agent[backing_object].prototype = prototype;
    }
}
