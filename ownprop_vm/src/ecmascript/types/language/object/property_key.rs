// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    execution::Agent,
    types::{String, Symbol, Value},
};

/// Largest integer index, `2**53 - 1`.
pub(crate) const MAX_INTEGER_INDEX: i64 = (1 << 53) - 1;

/// # [Property key](https://tc39.es/ecma262/#property-key)
///
/// The properties of an object are uniquely identified using property keys. A
/// _property key_ is either a String or a Symbol. All Strings and Symbols,
/// including the empty String, are valid as property keys.
///
/// An _integer index_ is a property name `n` such that
/// `CanonicalNumericIndexString(n)` returns an integral Number in the
/// inclusive interval from `+0𝔽` to `𝔽(2**53 - 1)`. Integer indexes are
/// always stored in the [PropertyKey::Integer] form, so that `"4"` and `4`
/// name the same property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    Integer(i64),
    String(String),
    Symbol(Symbol),
}

impl PropertyKey {
    pub fn from_str(agent: &mut Agent, str: &str) -> Self {
        parse_string_to_integer_property_key(str)
            .unwrap_or_else(|| String::from_str(agent, str).into())
    }

    /// Canonicalizes a String into a property key.
    pub fn from_string(agent: &Agent, string: String) -> Self {
        let code_units = string.as_code_units(agent);
        if code_units.len() <= 16 && code_units.iter().all(|&unit| unit < 0x80) {
            let ascii: std::string::String =
                code_units.iter().map(|&unit| unit as u8 as char).collect();
            if let Some(key) = parse_string_to_integer_property_key(&ascii) {
                return key;
            }
        }
        PropertyKey::String(string)
    }

    /// The key as an ECMAScript language value: integer indexes turn back
    /// into their canonical String.
    pub fn convert_to_value(self, agent: &mut Agent) -> Value {
        match self {
            PropertyKey::Integer(index) => Value::from_string(agent, index.to_string()),
            PropertyKey::String(string) => string.into(),
            PropertyKey::Symbol(symbol) => symbol.into(),
        }
    }

    pub fn is_symbol(self) -> bool {
        matches!(self, PropertyKey::Symbol(_))
    }

    /// Array-like index of this key if it is an integer index below
    /// `length`.
    pub fn as_index(self, length: usize) -> Option<usize> {
        match self {
            PropertyKey::Integer(index) => usize::try_from(index).ok().filter(|&i| i < length),
            _ => None,
        }
    }

    pub fn is_str(self, agent: &Agent, str: &str) -> bool {
        match self {
            PropertyKey::Integer(index) => parse_string_to_integer_property_key(str)
                .is_some_and(|key| key == PropertyKey::Integer(index)),
            PropertyKey::String(string) => string.eq_str(agent, str),
            PropertyKey::Symbol(_) => false,
        }
    }

    /// Human readable form, used in error messages.
    pub fn to_display_string(self, agent: &Agent) -> std::string::String {
        match self {
            PropertyKey::Integer(index) => index.to_string(),
            PropertyKey::String(string) => string.to_string_lossy(agent),
            PropertyKey::Symbol(symbol) => symbol.descriptive_string_lossy(agent),
        }
    }
}

/// Parses a canonical integer index: `"0"` or a run of decimal digits
/// without a leading zero, no larger than `2**53 - 1`.
pub fn parse_string_to_integer_property_key(str: &str) -> Option<PropertyKey> {
    let bytes = str.as_bytes();
    if bytes.is_empty() || bytes.len() > 16 || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    let value = str.parse::<i64>().ok()?;
    (value <= MAX_INTEGER_INDEX).then_some(PropertyKey::Integer(value))
}

impl From<String> for PropertyKey {
    fn from(value: String) -> Self {
        PropertyKey::String(value)
    }
}

impl From<Symbol> for PropertyKey {
    fn from(value: Symbol) -> Self {
        PropertyKey::Symbol(value)
    }
}

impl From<u32> for PropertyKey {
    fn from(value: u32) -> Self {
        PropertyKey::Integer(value.into())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ecmascript::execution::{Agent, DefaultHostHooks, Options};

    #[test]
    fn canonical_integer_keys() {
        assert_eq!(
            parse_string_to_integer_property_key("0"),
            Some(PropertyKey::Integer(0))
        );
        assert_eq!(
            parse_string_to_integer_property_key("42"),
            Some(PropertyKey::Integer(42))
        );
        assert_eq!(
            parse_string_to_integer_property_key("9007199254740991"),
            Some(PropertyKey::Integer(MAX_INTEGER_INDEX))
        );
        assert_eq!(parse_string_to_integer_property_key("9007199254740992"), None);
        assert_eq!(parse_string_to_integer_property_key("04"), None);
        assert_eq!(parse_string_to_integer_property_key("-1"), None);
        assert_eq!(parse_string_to_integer_property_key("1.5"), None);
        assert_eq!(parse_string_to_integer_property_key(""), None);
    }

    #[test]
    fn string_and_integer_forms_agree() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let four = String::from_str(&mut agent, "4");
        assert_eq!(PropertyKey::from_string(&agent, four), PropertyKey::Integer(4));
        let name = PropertyKey::from_str(&mut agent, "name");
        assert!(matches!(name, PropertyKey::String(_)));
        assert!(name.is_str(&agent, "name"));
        let value = PropertyKey::Integer(4).convert_to_value(&mut agent);
        assert_eq!(value, Value::String(four));
    }

    #[test]
    fn index_below_length() {
        assert_eq!(PropertyKey::Integer(2).as_index(3), Some(2));
        assert_eq!(PropertyKey::Integer(3).as_index(3), None);
    }
}
