// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use core::ops::Index;

use crate::{
    ecmascript::{execution::Agent, types::Value},
    heap::{CreateHeapData, Heap, indexes::StringIndex},
};

/// ### [6.1.4 The String Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-string-type)
///
/// A finite ordered sequence of 16-bit code units. Strings are interned in
/// the heap, so two Strings are equal exactly when their handles are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct String(pub(crate) StringIndex);

#[derive(Debug, Clone)]
pub struct StringHeapData {
    pub(crate) data: Box<[u16]>,
}

impl String {
    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    pub fn from_str(agent: &mut Agent, str: &str) -> Self {
        Self::from_str_in_heap(&mut agent.heap, str)
    }

    pub(crate) fn from_str_in_heap(heap: &mut Heap, str: &str) -> Self {
        heap.create(str.encode_utf16().collect::<Box<[u16]>>())
    }

    pub fn from_code_units(agent: &mut Agent, code_units: Box<[u16]>) -> Self {
        agent.heap.create(code_units)
    }

    pub fn as_code_units(self, agent: &Agent) -> &[u16] {
        &agent[self].data
    }

    /// Length of the String in UTF-16 code units.
    pub fn utf16_len(self, agent: &Agent) -> usize {
        agent[self].data.len()
    }

    pub fn is_empty_string(self, agent: &Agent) -> bool {
        agent[self].data.is_empty()
    }

    /// The code unit at `index`, which must be below [String::utf16_len].
    pub fn utf16_char(self, agent: &Agent, index: usize) -> u16 {
        agent[self].data[index]
    }

    /// The one code unit String at `index`.
    pub fn char_at(self, agent: &mut Agent, index: usize) -> Self {
        let unit = self.utf16_char(agent, index);
        Self::from_code_units(agent, Box::new([unit]))
    }

    pub fn eq_str(self, agent: &Agent, str: &str) -> bool {
        agent[self].data.iter().copied().eq(str.encode_utf16())
    }

    pub fn concat(agent: &mut Agent, strings: &[String]) -> Self {
        let code_units = strings
            .iter()
            .flat_map(|string| agent[*string].data.iter().copied())
            .collect::<Box<[u16]>>();
        Self::from_code_units(agent, code_units)
    }

    /// Decodes the String, replacing lone surrogates with U+FFFD.
    pub fn to_string_lossy(self, agent: &Agent) -> std::string::String {
        self.to_string_lossy_in_heap(&agent.heap)
    }

    pub(crate) fn to_string_lossy_in_heap(self, heap: &Heap) -> std::string::String {
        char::decode_utf16(heap.strings[self.get_index()].data.iter().copied())
            .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl TryFrom<Value> for String {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(string) => Ok(string),
            _ => Err(()),
        }
    }
}

impl Index<String> for Agent {
    type Output = StringHeapData;

    fn index(&self, index: String) -> &Self::Output {
        &self.heap.strings[index.get_index()]
    }
}

impl CreateHeapData<Box<[u16]>, String> for Heap {
    fn create(&mut self, data: Box<[u16]>) -> String {
        if let Some(&string) = self.string_lookup_table.get(&data) {
            return string;
        }
        self.strings.push(StringHeapData { data: data.clone() });
        let string = String(StringIndex::last(&self.strings));
        self.string_lookup_table.insert(data, string);
        string
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ecmascript::execution::{DefaultHostHooks, Options};

    #[test]
    fn code_unit_access() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let abc = String::from_str(&mut agent, "abc");
        assert_eq!(abc.utf16_len(&agent), 3);
        let b = abc.char_at(&mut agent, 1);
        assert_eq!(b, String::from_str(&mut agent, "b"));
    }

    #[test]
    fn astral_characters_are_two_code_units() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let emoji = String::from_str(&mut agent, "😀");
        assert_eq!(emoji.utf16_len(&agent), 2);
        let high = emoji.char_at(&mut agent, 0);
        assert_eq!(high.as_code_units(&agent), &[0xD83D]);
        assert_eq!(high.to_string_lossy(&agent), "\u{FFFD}");
    }

    #[test]
    fn concatenation() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let parts = [
            String::from_str(&mut agent, "[object "),
            String::from_str(&mut agent, "Object"),
            String::from_str(&mut agent, "]"),
        ];
        let result = String::concat(&mut agent, &parts);
        assert!(result.eq_str(&agent, "[object Object]"));
    }
}
