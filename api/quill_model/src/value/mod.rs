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

use crate::config::{Config, StdConfig};
use crate::object::ObjectBacking;
use crate::text::Text;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use thiserror::Error;


/// An ordered sequence of values, the payload of [`Value::Array`].
pub type Array<C = StdConfig> = Vec<Value<C>>;

/// The active kind of a [`Value`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ValueKind {
    Null,
    Boolean,
    Int32,
    Int64,
    UInt64,
    Float64,
    Text,
    Array,
    Object,
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueKind::Null => write!(f, "Null"),
            ValueKind::Boolean => write!(f, "Boolean"),
            ValueKind::Int32 => write!(f, "Int32"),
            ValueKind::Int64 => write!(f, "Int64"),
            ValueKind::UInt64 => write!(f, "UInt64"),
            ValueKind::Float64 => write!(f, "Float64"),
            ValueKind::Text => write!(f, "Text"),
            ValueKind::Array => write!(f, "Array"),
            ValueKind::Object => write!(f, "Object"),
        }
    }
}

/// The error raised by the fallible accessors when a value does not hold a
/// kind convertible to the requested type. The panicking accessors report
/// the same information. Accessor misuse is a programming error, not a
/// recoverable condition.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
#[error("value holds {found}, which is not accessible as {expected}")]
pub struct AccessError {
    pub expected: ValueKind,
    pub found: ValueKind,
}

fn demand<T>(result: Result<T, AccessError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{}", err),
    }
}

/// The core JSON model type. A closed tagged union; exactly one kind is
/// active at a time. Signed 64-bit and unsigned 64-bit integers are
/// distinct kinds so that values beyond `i64::MAX` survive exactly and a
/// copy always reproduces the kind of the original.
///
/// Copying is a deep copy: array and object payloads are owned exclusively
/// by the containing value and mutating a clone never affects the original.
#[derive(Clone, Debug)]
pub enum Value<C: Config = StdConfig> {
    /// The JSON `null` value.
    Null,

    /// A boolean wrapped as a [`Value`].
    BooleanValue(bool),

    /// A machine-word integer wrapped as a [`Value`].
    Int32Value(i32),

    /// A 64-bit integer wrapped as a [`Value`].
    Int64Value(i64),

    /// An unsigned 64-bit integer wrapped as a [`Value`]. Construction from
    /// `u64` always selects this kind, even when the value would fit a
    /// signed kind, so that the choice round-trips through copies.
    UInt64Value(u64),

    /// A 64-bit floating point number wrapped as a [`Value`].
    Float64Value(f64),

    /// A textual value in the configured representation.
    Text(C::Text),

    /// An ordered sequence of values.
    Array(Array<C>),

    /// An ordered sequence of name value pairs. Duplicate names are
    /// permitted and order is significant, both for equality and for
    /// serialization.
    Object(C::Object),
}

impl<C: Config> Value<C> {
    /// Create a text value from a string slice.
    pub fn text(s: &str) -> Value<C> {
        Value::Text(C::Text::new(s))
    }

    /// Wrap an array payload.
    pub fn array(items: Array<C>) -> Value<C> {
        Value::Array(items)
    }

    /// Wrap an object payload.
    pub fn object(members: C::Object) -> Value<C> {
        Value::Object(members)
    }

    pub fn empty_array() -> Value<C> {
        Value::Array(Vec::new())
    }

    pub fn empty_object() -> Value<C> {
        Value::Object(C::Object::default())
    }

    /// The active kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::BooleanValue(_) => ValueKind::Boolean,
            Value::Int32Value(_) => ValueKind::Int32,
            Value::Int64Value(_) => ValueKind::Int64,
            Value::UInt64Value(_) => ValueKind::UInt64,
            Value::Float64Value(_) => ValueKind::Float64,
            Value::Text(_) => ValueKind::Text,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Whether the active numeric kind is specifically unsigned 64-bit.
    /// Preserved by cloning and assignment for every kind.
    pub fn is_uint64(&self) -> bool {
        matches!(self, Value::UInt64Value(_))
    }

    /// The value as an arbitrary-width integer, when the active kind is one
    /// of the integer kinds.
    fn wide_int(&self) -> Option<i128> {
        match self {
            Value::Int32Value(n) => Some(*n as i128),
            Value::Int64Value(n) => Some(*n as i128),
            Value::UInt64Value(n) => Some(*n as i128),
            _ => None,
        }
    }

    /// Whether the held value is representable in the target kind without
    /// loss of sign or magnitude.
    pub fn is_coercible_to(&self, kind: ValueKind) -> bool {
        if let Some(n) = self.wide_int() {
            return match kind {
                ValueKind::Int32 => i32::try_from(n).is_ok(),
                ValueKind::Int64 => i64::try_from(n).is_ok(),
                ValueKind::UInt64 => u64::try_from(n).is_ok(),
                ValueKind::Float64 => true,
                _ => false,
            };
        }
        self.kind() == kind
    }

    pub fn try_get_bool(&self) -> Result<bool, AccessError> {
        match self {
            Value::BooleanValue(p) => Ok(*p),
            ow => Err(AccessError {
                expected: ValueKind::Boolean,
                found: ow.kind(),
            }),
        }
    }

    /// The held integer truncated to a machine word, as an unsigned cast
    /// chain would produce.
    pub fn try_get_int(&self) -> Result<i32, AccessError> {
        match self.try_get_int64() {
            Ok(n) => Ok(n as i32),
            Err(err) => Err(AccessError {
                expected: ValueKind::Int32,
                ..err
            }),
        }
    }

    pub fn try_get_int64(&self) -> Result<i64, AccessError> {
        match self {
            Value::Int32Value(n) => Ok(*n as i64),
            Value::Int64Value(n) => Ok(*n),
            Value::UInt64Value(n) => Ok(*n as i64),
            ow => Err(AccessError {
                expected: ValueKind::Int64,
                found: ow.kind(),
            }),
        }
    }

    /// The held integer reinterpreted as unsigned 64-bit. A negative value
    /// maps to its two's-complement bit pattern, so `Value::from(-1)`
    /// yields `u64::MAX`.
    pub fn try_get_uint64(&self) -> Result<u64, AccessError> {
        match self {
            Value::Int32Value(n) => Ok(*n as i64 as u64),
            Value::Int64Value(n) => Ok(*n as u64),
            Value::UInt64Value(n) => Ok(*n),
            ow => Err(AccessError {
                expected: ValueKind::UInt64,
                found: ow.kind(),
            }),
        }
    }

    /// The held number widened to floating point. Integers at or beyond
    /// 2^53 round to the nearest representable double.
    pub fn try_get_real(&self) -> Result<f64, AccessError> {
        match self {
            Value::Int32Value(n) => Ok(*n as f64),
            Value::Int64Value(n) => Ok(*n as f64),
            Value::UInt64Value(n) => Ok(*n as f64),
            Value::Float64Value(x) => Ok(*x),
            ow => Err(AccessError {
                expected: ValueKind::Float64,
                found: ow.kind(),
            }),
        }
    }

    pub fn try_get_str(&self) -> Result<&C::Text, AccessError> {
        match self {
            Value::Text(s) => Ok(s),
            ow => Err(AccessError {
                expected: ValueKind::Text,
                found: ow.kind(),
            }),
        }
    }

    pub fn try_get_array(&self) -> Result<&Array<C>, AccessError> {
        match self {
            Value::Array(items) => Ok(items),
            ow => Err(AccessError {
                expected: ValueKind::Array,
                found: ow.kind(),
            }),
        }
    }

    pub fn try_get_array_mut(&mut self) -> Result<&mut Array<C>, AccessError> {
        match self {
            Value::Array(items) => Ok(items),
            ow => Err(AccessError {
                expected: ValueKind::Array,
                found: ow.kind(),
            }),
        }
    }

    pub fn try_get_obj(&self) -> Result<&C::Object, AccessError> {
        match self {
            Value::Object(members) => Ok(members),
            ow => Err(AccessError {
                expected: ValueKind::Object,
                found: ow.kind(),
            }),
        }
    }

    pub fn try_get_obj_mut(&mut self) -> Result<&mut C::Object, AccessError> {
        match self {
            Value::Object(members) => Ok(members),
            ow => Err(AccessError {
                expected: ValueKind::Object,
                found: ow.kind(),
            }),
        }
    }

    /// # Panics
    ///
    /// Panics if the value does not hold a boolean. The same applies to the
    /// other `get_` accessors for their respective kind classes; use the
    /// `try_get_` variants where the kind is not known in advance.
    pub fn get_bool(&self) -> bool {
        demand(self.try_get_bool())
    }

    pub fn get_int(&self) -> i32 {
        demand(self.try_get_int())
    }

    pub fn get_int64(&self) -> i64 {
        demand(self.try_get_int64())
    }

    pub fn get_uint64(&self) -> u64 {
        demand(self.try_get_uint64())
    }

    pub fn get_real(&self) -> f64 {
        demand(self.try_get_real())
    }

    pub fn get_str(&self) -> &C::Text {
        demand(self.try_get_str())
    }

    pub fn get_array(&self) -> &Array<C> {
        demand(self.try_get_array())
    }

    pub fn get_array_mut(&mut self) -> &mut Array<C> {
        demand(self.try_get_array_mut())
    }

    pub fn get_obj(&self) -> &C::Object {
        demand(self.try_get_obj())
    }

    pub fn get_obj_mut(&mut self) -> &mut C::Object {
        demand(self.try_get_obj_mut())
    }
}

impl<C: Config> PartialEq for Value<C> {
    fn eq(&self, other: &Self) -> bool {
        if let (Some(n), Some(m)) = (self.wide_int(), other.wide_int()) {
            return n == m;
        }
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::BooleanValue(p), Value::BooleanValue(q)) => p == q,
            (Value::Float64Value(x), Value::Float64Value(y)) => {
                if x.is_nan() {
                    y.is_nan()
                } else {
                    x == y
                }
            }
            (Value::Text(s), Value::Text(t)) => s == t,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a.pairs() == b.pairs(),
            _ => false,
        }
    }
}

impl<C: Config> Eq for Value<C> {}

impl<C: Config> Hash for Value<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Value::Null => {
                state.write_u8(0);
            }
            Value::BooleanValue(p) => {
                state.write_u8(1);
                state.write_u8(*p as u8);
            }
            // One tag and one canonical width for all three integer kinds,
            // so that cross-kind equal values hash identically.
            Value::Int32Value(n) => {
                state.write_u8(2);
                state.write_i128(*n as i128);
            }
            Value::Int64Value(n) => {
                state.write_u8(2);
                state.write_i128(*n as i128);
            }
            Value::UInt64Value(n) => {
                state.write_u8(2);
                state.write_i128(*n as i128);
            }
            Value::Float64Value(x) => {
                state.write_u8(3);
                let bits = if x.is_nan() {
                    0
                } else if *x == 0.0 {
                    // +0.0 and -0.0 compare equal.
                    0.0f64.to_bits()
                } else {
                    x.to_bits()
                };
                state.write_u64(bits);
            }
            Value::Text(s) => {
                state.write_u8(4);
                s.hash(state);
            }
            Value::Array(items) => {
                state.write_u8(5);
                items.hash(state);
            }
            Value::Object(members) => {
                state.write_u8(6);
                members.pairs().hash(state);
            }
        }
    }
}

impl<C: Config> Default for Value<C> {
    fn default() -> Self {
        Value::Null
    }
}

impl<C: Config> From<bool> for Value<C> {
    fn from(p: bool) -> Self {
        Value::BooleanValue(p)
    }
}

impl<C: Config> From<i32> for Value<C> {
    fn from(n: i32) -> Self {
        Value::Int32Value(n)
    }
}

impl<C: Config> From<i64> for Value<C> {
    fn from(n: i64) -> Self {
        match i32::try_from(n) {
            Ok(m) => Value::Int32Value(m),
            Err(_) => Value::Int64Value(n),
        }
    }
}

impl<C: Config> From<u32> for Value<C> {
    fn from(n: u32) -> Self {
        Value::from(n as i64)
    }
}

impl<C: Config> From<u64> for Value<C> {
    fn from(n: u64) -> Self {
        Value::UInt64Value(n)
    }
}

impl<C: Config> From<f64> for Value<C> {
    fn from(x: f64) -> Self {
        if x.is_finite() {
            Value::Float64Value(x)
        } else {
            // JSON has no token for NaN or infinities.
            Value::Null
        }
    }
}

impl<C: Config> From<&str> for Value<C> {
    fn from(s: &str) -> Self {
        Value::Text(C::Text::new(s))
    }
}

impl<C: Config> From<String> for Value<C> {
    fn from(s: String) -> Self {
        Value::Text(C::Text::from_string(s))
    }
}

impl<C: Config> From<Array<C>> for Value<C> {
    fn from(items: Array<C>) -> Self {
        Value::Array(items)
    }
}
