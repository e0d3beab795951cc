// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    ecmascript::{
        builtins::{Builtin, BuiltinFunctionArgs, create_builtin_function},
        execution::Agent,
        types::{OrdinaryObject, PropertyKey, Value},
    },
    heap::object_entry::ObjectEntryPropertyDescriptor,
};

/// Populates an intrinsic object reserved by the realm.
pub(crate) struct OrdinaryObjectBuilder<'agent> {
    pub(crate) agent: &'agent mut Agent,
    this: OrdinaryObject,
    properties: Vec<(PropertyKey, ObjectEntryPropertyDescriptor)>,
}

impl<'agent> OrdinaryObjectBuilder<'agent> {
    #[must_use]
    pub(crate) fn new_intrinsic_object(agent: &'agent mut Agent, this: OrdinaryObject) -> Self {
        Self {
            agent,
            this,
            properties: Vec::new(),
        }
    }

    #[must_use]
    pub(crate) fn with_property_capacity(mut self, cap: usize) -> Self {
        self.properties.reserve(cap);
        self
    }

    /// Adds a writable, non-enumerable, configurable data property.
    #[must_use]
    pub(crate) fn with_data_property(mut self, key: PropertyKey, value: Value) -> Self {
        self.properties.push((
            key,
            ObjectEntryPropertyDescriptor::data(value, true, false, true),
        ));
        self
    }

    #[must_use]
    pub(crate) fn with_property(
        mut self,
        key: PropertyKey,
        descriptor: ObjectEntryPropertyDescriptor,
    ) -> Self {
        self.properties.push((key, descriptor));
        self
    }

    #[must_use]
    pub(crate) fn with_builtin_function_property<T: Builtin>(mut self) -> Self {
        let function = create_builtin_function(
            self.agent,
            T::BEHAVIOUR,
            BuiltinFunctionArgs::new(T::LENGTH.into(), T::NAME),
        );
        let key = match T::KEY {
            Some(key) => key,
            None => PropertyKey::from_str(self.agent, T::NAME),
        };
        self.properties.push((
            key,
            ObjectEntryPropertyDescriptor::data(
                function.into(),
                T::WRITABLE,
                T::ENUMERABLE,
                T::CONFIGURABLE,
            ),
        ));
        self
    }

    pub(crate) fn build(self) -> OrdinaryObject {
        let Self {
            agent,
            this,
            properties,
        } = self;
        let data = &mut agent[this];
        data.properties.reserve(properties.len());
        for (key, descriptor) in properties {
            data.properties.set(key, descriptor);
        }
        this
    }
}
