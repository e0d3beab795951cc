// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{execution::Agent, types::String};

/// Largest integer that an f64 represents exactly, `2**53 - 1`.
pub const MAX_SAFE_INTEGER: f64 = 9007199254740991.0;

/// ### [6.1.6.1.20 Number::toString ( x, radix )](https://tc39.es/ecma262/#sec-numeric-types-number-tostring)
///
/// Only radix 10 is supported.
pub fn number_to_string(agent: &mut Agent, x: f64) -> String {
    // 1. If x is NaN, return "NaN".
    // 2. If x is either +0𝔽 or -0𝔽, return "0".
    if x == 0.0 {
        return String::from_str(agent, "0");
    }
    let mut buffer = ryu_js::Buffer::new();
    let formatted = buffer.format(x);
    String::from_str(agent, formatted)
}

/// True if `x` is a finite integral Number.
pub(crate) fn is_integral_number(x: f64) -> bool {
    x.is_finite() && x.trunc() == x
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ecmascript::execution::{DefaultHostHooks, Options};

    #[test]
    fn formats_like_ecmascript() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        for (value, expected) in [
            (42.0, "42"),
            (-0.0, "0"),
            (0.5, "0.5"),
            (1e21, "1e+21"),
            (f64::NAN, "NaN"),
            (f64::NEG_INFINITY, "-Infinity"),
        ] {
            let string = number_to_string(&mut agent, value);
            assert_eq!(string.to_string_lossy(&agent), expected);
        }
    }
}
