// Copyright 2015-2023 Swim Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;

pub(crate) const TRUE: &str = "true";
pub(crate) const FALSE: &str = "false";
pub(crate) const NULL: &str = "null";

// Significant digits after the leading digit; 16 in total.
const PRECISION: usize = 15;

// Decimal exponents rendered in fixed-point notation. Above this range the
// fractional part would vanish and the token would need a trailing decimal
// point, which no JSON reader accepts, so larger magnitudes switch to
// scientific notation.
const FIXED_MIN_EXP: i32 = -4;
const FIXED_MAX_EXP: i32 = 14;

/// Render a double as a JSON number token with 16 significant decimal
/// digits, fixed-point with trailing zeros for moderate magnitudes and
/// scientific notation otherwise. The scientific exponent carries a sign
/// only when negative and no leading zeros.
pub fn write_float<W: fmt::Write>(out: &mut W, value: f64) -> fmt::Result {
    if !value.is_finite() {
        // Unreachable through `Value::from(f64)`, which maps non-finite
        // inputs to null; kept for directly constructed variants.
        return out.write_str(NULL);
    }
    let sci = format!("{:.*e}", PRECISION, value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some(parts) => parts,
        None => return out.write_str(&sci),
    };
    let exp: i32 = match exponent.parse() {
        Ok(exp) => exp,
        Err(_) => return out.write_str(&sci),
    };
    if !(FIXED_MIN_EXP..=FIXED_MAX_EXP).contains(&exp) {
        return out.write_str(&sci);
    }

    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let (lead, frac) = match mantissa.split_once('.') {
        Some(parts) => parts,
        None => (mantissa, ""),
    };
    let mut digits = String::with_capacity(lead.len() + frac.len());
    digits.push_str(lead);
    digits.push_str(frac);

    out.write_str(sign)?;
    if exp < 0 {
        out.write_str("0.")?;
        for _ in 0..(-exp - 1) {
            out.write_char('0')?;
        }
        out.write_str(&digits)
    } else {
        let split = exp as usize + 1;
        out.write_str(&digits[..split])?;
        out.write_char('.')?;
        out.write_str(&digits[split..])
    }
}
