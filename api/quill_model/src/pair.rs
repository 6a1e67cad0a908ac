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
use crate::text::Text;
use crate::value::Value;

/// A single object member. A name value pair where the name is a string of
/// the configured representation and the value can be any [`Value`].
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Pair<C: Config = StdConfig> {
    pub name: C::Text,
    pub value: Value<C>,
}

impl<C: Config> Pair<C> {
    /// Create a [`Pair`] from anything that can be converted to one.
    ///
    /// # Examples
    ///
    /// ```
    /// use quill_model::{Pair, Value};
    ///
    /// let pair: Pair = Pair::of(("key", 1));
    /// assert_eq!(pair.name, "key");
    /// assert_eq!(pair.value, Value::Int32Value(1));
    /// ```
    pub fn of<T: Into<Pair<C>>>(rep: T) -> Pair<C> {
        rep.into()
    }

    pub fn new(name: &str, value: Value<C>) -> Pair<C> {
        Pair {
            name: C::Text::new(name),
            value,
        }
    }
}

impl<C: Config, V: Into<Value<C>>> From<(&str, V)> for Pair<C> {
    fn from(pair: (&str, V)) -> Self {
        let (name, v) = pair;
        Pair {
            name: C::Text::new(name),
            value: v.into(),
        }
    }
}

impl<C: Config, V: Into<Value<C>>> From<(String, V)> for Pair<C> {
    fn from(pair: (String, V)) -> Self {
        let (name, v) = pair;
        Pair {
            name: C::Text::from_string(name),
            value: v.into(),
        }
    }
}
