// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use core::ops::Index;

use crate::{
    ecmascript::{
        execution::Agent,
        types::{String, Value},
    },
    heap::{CreateHeapData, Heap, indexes::SymbolIndex},
};

/// ### [6.1.5 The Symbol Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-symbol-type)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(pub(crate) SymbolIndex);

#[derive(Debug, Clone, Copy)]
pub struct SymbolHeapData {
    pub(crate) descriptor: Option<String>,
}

impl Symbol {
    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    pub fn new(agent: &mut Agent, description: Option<&str>) -> Self {
        let descriptor = description.map(|description| String::from_str(agent, description));
        agent.heap.create(SymbolHeapData { descriptor })
    }

    pub fn description(self, agent: &Agent) -> Option<String> {
        agent[self].descriptor
    }

    /// ### [20.4.3.3.1 SymbolDescriptiveString ( sym )](https://tc39.es/ecma262/#sec-symboldescriptivestring)
    pub fn descriptive_string(self, agent: &mut Agent) -> String {
        // 1. Let desc be sym's [[Description]] value.
        // 2. If desc is undefined, set desc to the empty String.
        // 3. Return the string-concatenation of "Symbol(", desc, and ")".
        let descriptive = self.descriptive_string_lossy(agent);
        String::from_str(agent, &descriptive)
    }

    pub(crate) fn descriptive_string_lossy(self, agent: &Agent) -> std::string::String {
        let description = self
            .description(agent)
            .map(|description| description.to_string_lossy(agent))
            .unwrap_or_default();
        format!("Symbol({description})")
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Value::Symbol(value)
    }
}

impl Index<Symbol> for Agent {
    type Output = SymbolHeapData;

    fn index(&self, index: Symbol) -> &Self::Output {
        &self.heap.symbols[index.get_index()]
    }
}

impl CreateHeapData<SymbolHeapData, Symbol> for Heap {
    fn create(&mut self, data: SymbolHeapData) -> Symbol {
        self.symbols.push(data);
        Symbol(SymbolIndex::last(&self.symbols))
    }
}
