// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod intrinsics;

pub use intrinsics::{Intrinsics, ProtoIntrinsics};

use super::Agent;
use crate::heap::Heap;

/// ### [9.3 Realms](https://tc39.es/ecma262/#sec-code-realms)
///
/// The agent has exactly one realm; it owns the intrinsic prototypes every
/// object in the heap ultimately inherits from.
#[derive(Debug)]
pub struct Realm {
    intrinsics: Intrinsics,
}

impl Realm {
    /// ### [9.3.1 CreateRealm ( )](https://tc39.es/ecma262/#sec-createrealm)
    ///
    /// Allocates the intrinsic prototypes without their properties.
    pub(crate) fn new(heap: &mut Heap) -> Self {
        Self {
            intrinsics: Intrinsics::reserve(heap),
        }
    }

    pub fn intrinsics(&self) -> &Intrinsics {
        &self.intrinsics
    }

    /// ### [9.3.2 CreateIntrinsics ( realmRec )](https://tc39.es/ecma262/#sec-createintrinsics)
    pub(crate) fn initialize_intrinsics(agent: &mut Agent) {
        Intrinsics::create_intrinsics(agent);
    }
}
