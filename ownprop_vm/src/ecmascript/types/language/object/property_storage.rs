// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use ahash::RandomState;
use hashbrown::HashMap;

use crate::{ecmascript::types::PropertyKey, heap::object_entry::ObjectEntryPropertyDescriptor};

/// Own properties of an ordinary object, keyed by canonical property key.
#[derive(Debug, Clone, Default)]
pub struct PropertyStorage {
    entries: HashMap<PropertyKey, ObjectEntryPropertyDescriptor, RandomState>,
}

impl PropertyStorage {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: PropertyKey) -> bool {
        self.entries.contains_key(&key)
    }

    pub(crate) fn get(&self, key: PropertyKey) -> Option<ObjectEntryPropertyDescriptor> {
        self.entries.get(&key).copied()
    }

    pub(crate) fn set(&mut self, key: PropertyKey, entry: ObjectEntryPropertyDescriptor) {
        self.entries.insert(key, entry);
    }

    pub(crate) fn remove(&mut self, key: PropertyKey) -> bool {
        self.entries.remove(&key).is_some()
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.entries.reserve(additional);
    }
}
