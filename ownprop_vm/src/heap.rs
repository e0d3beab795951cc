// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub(crate) mod heap_constants;
pub(crate) mod indexes;
pub(crate) mod object_entry;

pub use heap_constants::WellKnownSymbolIndexes;

use ahash::RandomState;
use hashbrown::HashMap;

use crate::ecmascript::{
    builtins::{
        BuiltinFunctionHeapData, EmbedderObjectHeapData, ErrorHeapData, PrimitiveObjectHeapData,
    },
    types::{ObjectHeapData, String, StringHeapData, SymbolHeapData},
};

/// Storage for every heap-allocated ECMAScript value of an [Agent].
///
/// Values refer to heap data through typed indexes; nothing is ever
/// collected, so an index stays valid for the lifetime of the heap.
///
/// [Agent]: crate::ecmascript::execution::Agent
#[derive(Debug)]
pub struct Heap {
    pub(crate) builtin_functions: Vec<BuiltinFunctionHeapData>,
    pub(crate) embedder_objects: Vec<EmbedderObjectHeapData>,
    pub(crate) errors: Vec<ErrorHeapData>,
    pub(crate) objects: Vec<ObjectHeapData>,
    pub(crate) primitive_objects: Vec<PrimitiveObjectHeapData>,
    pub(crate) strings: Vec<StringHeapData>,
    /// Interning table: equal code unit sequences share one [String].
    pub(crate) string_lookup_table: HashMap<Box<[u16]>, String, RandomState>,
    pub(crate) symbols: Vec<SymbolHeapData>,
}

/// Allocates `T` on the heap and returns the handle `F` that refers to it.
pub trait CreateHeapData<T, F> {
    fn create(&mut self, data: T) -> F;
}

impl Heap {
    pub(crate) fn new() -> Self {
        let mut heap = Self {
            builtin_functions: Vec::with_capacity(32),
            embedder_objects: Vec::new(),
            errors: Vec::new(),
            objects: Vec::with_capacity(32),
            primitive_objects: Vec::new(),
            strings: Vec::with_capacity(64),
            string_lookup_table: HashMap::with_capacity_and_hasher(64, RandomState::new()),
            symbols: Vec::with_capacity(WellKnownSymbolIndexes::ALL.len()),
        };
        for symbol in WellKnownSymbolIndexes::ALL {
            let description = String::from_str_in_heap(&mut heap, symbol.description());
            heap.symbols.push(SymbolHeapData {
                descriptor: Some(description),
            });
        }
        heap
    }
}

impl Default for Heap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ecmascript::types::Symbol;

    #[test]
    fn well_known_symbols_are_preallocated() {
        let heap = Heap::new();
        assert_eq!(heap.symbols.len(), WellKnownSymbolIndexes::ALL.len());
        let to_string_tag = Symbol::from(WellKnownSymbolIndexes::ToStringTag);
        let description = heap.symbols[to_string_tag.get_index()].descriptor;
        assert_eq!(
            description.map(|d| d.to_string_lossy_in_heap(&heap)),
            Some("Symbol.toStringTag".to_owned())
        );
    }

    #[test]
    fn strings_are_interned() {
        let mut heap = Heap::new();
        let a = String::from_str_in_heap(&mut heap, "length");
        let b = String::from_str_in_heap(&mut heap, "length");
        let c = String::from_str_in_heap(&mut heap, "name");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
