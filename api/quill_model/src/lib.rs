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

//! An in-memory model of JSON-like structured data. A [`Value`] is a closed
//! tagged union over null, booleans, three integer kinds (including exact
//! unsigned 64-bit integers beyond the signed range), doubles, strings,
//! arrays and objects. The model is generic over a [`Config`] that selects
//! the string representation (narrow or wide) and the object backing
//! (ordered pair list or keyed lookup); every instantiation has identical
//! observable semantics.

use std::fmt;

mod config;
#[macro_use]
pub mod macros;
mod object;
mod pair;
#[cfg(test)]
mod tests;
mod text;
mod value;

pub use config::{Config, MapConfig, StdConfig, WideConfig, WideMapConfig};
pub use object::{Object, ObjectBacking, PairList, PairMap};
pub use pair::Pair;
pub use text::{Text, WideText};
pub use value::{AccessError, Array, Value, ValueKind};

/// Write the text as a JSON string literal, quoted and escaped.
///
/// Escaping operates on UTF-16 code units so that narrow and wide string
/// representations produce identical output; characters outside the basic
/// multilingual plane become surrogate-pair escapes.
pub fn write_string_literal<T, W>(text: &T, out: &mut W) -> fmt::Result
where
    T: Text,
    W: fmt::Write,
{
    out.write_char('"')?;
    match text.as_plain_str() {
        Some(s) if !needs_escape(text) => out.write_str(s)?,
        _ => write_escaped(text, out)?,
    }
    out.write_char('"')
}

/// True if any code unit of the text requires an escape sequence in a JSON
/// string literal under the printability policy of `T`.
pub fn needs_escape<T: Text>(text: &T) -> bool {
    text.code_units().any(unit_needs_escape::<T>)
}

fn unit_needs_escape<T: Text>(unit: u16) -> bool {
    matches!(unit, 0x08 | 0x09 | 0x0A | 0x0C | 0x0D | 0x22 | 0x5C) || !T::is_printable(unit)
}

fn write_escaped<T, W>(text: &T, out: &mut W) -> fmt::Result
where
    T: Text,
    W: fmt::Write,
{
    for unit in text.code_units() {
        match unit {
            0x22 => out.write_str("\\\"")?,
            0x5C => out.write_str("\\\\")?,
            0x0D => out.write_str("\\r")?,
            0x0A => out.write_str("\\n")?,
            0x09 => out.write_str("\\t")?,
            0x0C => out.write_str("\\f")?,
            0x08 => out.write_str("\\b")?,
            unit => match char::from_u32(unit as u32) {
                Some(c) if T::is_printable(unit) => out.write_char(c)?,
                _ => write!(out, "\\u{:04X}", unit)?,
            },
        }
    }
    Ok(())
}
