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

use std::fmt::{Debug, Display, Formatter};
use std::hash::Hash;
use std::iter::Copied;
use std::slice::Iter;
use std::str::EncodeUtf16;

/// The string capability required of a [`crate::Config`]. A text value is a
/// sequence of UTF-16 code units; how those units are stored (UTF-8 bytes
/// for the narrow representation, 16-bit units for the wide one) is the
/// implementation's business.
///
/// `is_printable` is the single point where environment-dependent
/// printability policy enters the escaping pipeline. Implementations must
/// never report a surrogate code unit as printable.
pub trait Text: Clone + Eq + Hash + Debug + Default {
    type Units<'a>: Iterator<Item = u16> + 'a
    where
        Self: 'a;

    /// Create a text value from a string slice.
    fn new(s: &str) -> Self;

    /// Create a text value from an owned string, reusing the allocation
    /// where the representation allows it.
    fn from_string(s: String) -> Self {
        Self::new(s.as_str())
    }

    /// The UTF-16 code units of the text, in order.
    fn code_units(&self) -> Self::Units<'_>;

    /// A borrowed UTF-8 view of the text, if the representation stores one.
    fn as_plain_str(&self) -> Option<&str> {
        None
    }

    /// Whether a code unit may be emitted verbatim in a string literal.
    /// The default policy admits exactly the ASCII printable range, making
    /// serialized output pure ASCII regardless of host environment.
    fn is_printable(unit: u16) -> bool {
        (0x20..=0x7E).contains(&unit)
    }

    /// Compare against a UTF-8 string slice.
    fn eq_str(&self, s: &str) -> bool;

    fn is_empty(&self) -> bool;
}

impl Text for String {
    type Units<'a> = EncodeUtf16<'a>
    where
        Self: 'a;

    fn new(s: &str) -> Self {
        s.to_owned()
    }

    fn from_string(s: String) -> Self {
        s
    }

    fn code_units(&self) -> Self::Units<'_> {
        self.encode_utf16()
    }

    fn as_plain_str(&self) -> Option<&str> {
        Some(self)
    }

    fn eq_str(&self, s: &str) -> bool {
        self == s
    }

    fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}

/// A string of 16-bit code units, the wide counterpart of [`String`]. Units
/// are stored as produced by UTF-16 encoding but are not revalidated, so a
/// [`WideText`] can hold unpaired surrogates read from external data.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct WideText(Vec<u16>);

impl WideText {
    pub fn new(s: &str) -> Self {
        WideText(s.encode_utf16().collect())
    }

    /// Wrap raw code units without validation.
    pub fn from_units(units: Vec<u16>) -> Self {
        WideText(units)
    }

    pub fn units(&self) -> &[u16] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decode to UTF-8, replacing unpaired surrogates.
    pub fn to_utf8(&self) -> String {
        String::from_utf16_lossy(&self.0)
    }
}

impl Text for WideText {
    type Units<'a> = Copied<Iter<'a, u16>>
    where
        Self: 'a;

    fn new(s: &str) -> Self {
        WideText::new(s)
    }

    fn code_units(&self) -> Self::Units<'_> {
        self.0.iter().copied()
    }

    fn eq_str(&self, s: &str) -> bool {
        self.0.iter().copied().eq(s.encode_utf16())
    }

    fn is_empty(&self) -> bool {
        WideText::is_empty(self)
    }
}

impl Display for WideText {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_utf8())
    }
}

impl From<&str> for WideText {
    fn from(s: &str) -> Self {
        WideText::new(s)
    }
}

impl From<String> for WideText {
    fn from(s: String) -> Self {
        WideText::new(&s)
    }
}
