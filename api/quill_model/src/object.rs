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
use crate::pair::Pair;
use crate::text::Text;
use crate::value::Value;
use fnv::FnvHashMap;
use std::fmt::Debug;
use std::mem;

/// The object backing of the active configuration.
pub type Object<C = StdConfig> = <C as Config>::Object;

/// The ordered associative container capability required of a
/// [`Config::Object`]. An object is an ordered sequence of [`Pair`]s;
/// duplicate names are permitted and iteration order is insertion order,
/// whatever the lookup strategy.
pub trait ObjectBacking<C: Config>:
    Clone + Debug + Default + PartialEq + Eq + FromIterator<Pair<C>>
{
    /// Append a pair, preserving insertion order.
    fn push(&mut self, pair: Pair<C>);

    /// Replace the pair at `index`, returning the old pair. Panics if the
    /// index is out of bounds.
    fn replace(&mut self, index: usize, pair: Pair<C>) -> Pair<C>;

    /// The value of the first pair with the given name, in insertion order.
    fn get(&self, name: &str) -> Option<&Value<C>>;

    /// The pairs in insertion order.
    fn pairs(&self) -> &[Pair<C>];

    fn len(&self) -> usize {
        self.pairs().len()
    }

    fn is_empty(&self) -> bool {
        self.pairs().is_empty()
    }
}

/// An object backing that is nothing more than the ordered pair sequence.
/// Lookup is a linear scan for the first matching name.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct PairList<C: Config>(Vec<Pair<C>>);

impl<C: Config> ObjectBacking<C> for PairList<C> {
    fn push(&mut self, pair: Pair<C>) {
        self.0.push(pair);
    }

    fn replace(&mut self, index: usize, pair: Pair<C>) -> Pair<C> {
        mem::replace(&mut self.0[index], pair)
    }

    fn get(&self, name: &str) -> Option<&Value<C>> {
        self.0
            .iter()
            .find(|pair| pair.name.eq_str(name))
            .map(|pair| &pair.value)
    }

    fn pairs(&self) -> &[Pair<C>] {
        &self.0
    }
}

impl<C: Config> FromIterator<Pair<C>> for PairList<C> {
    fn from_iter<I: IntoIterator<Item = Pair<C>>>(iter: I) -> Self {
        PairList(iter.into_iter().collect())
    }
}

impl<C: Config> From<Vec<Pair<C>>> for PairList<C> {
    fn from(pairs: Vec<Pair<C>>) -> Self {
        PairList(pairs)
    }
}

/// An object backing that keeps the ordered pair sequence authoritative and
/// maintains a name index of first occurrences for constant-time lookup.
/// Iteration and serialization are identical to [`PairList`].
#[derive(Clone, Debug, Default)]
pub struct PairMap<C: Config> {
    pairs: Vec<Pair<C>>,
    index: FnvHashMap<C::Text, usize>,
}

impl<C: Config> PairMap<C> {
    fn reindex(&mut self) {
        let PairMap { pairs, index } = self;
        index.clear();
        for (i, pair) in pairs.iter().enumerate() {
            index.entry(pair.name.clone()).or_insert(i);
        }
    }
}

impl<C: Config> ObjectBacking<C> for PairMap<C> {
    fn push(&mut self, pair: Pair<C>) {
        let at = self.pairs.len();
        self.index.entry(pair.name.clone()).or_insert(at);
        self.pairs.push(pair);
    }

    fn replace(&mut self, index: usize, pair: Pair<C>) -> Pair<C> {
        let old = mem::replace(&mut self.pairs[index], pair);
        self.reindex();
        old
    }

    fn get(&self, name: &str) -> Option<&Value<C>> {
        self.index
            .get(&C::Text::new(name))
            .map(|&i| &self.pairs[i].value)
    }

    fn pairs(&self) -> &[Pair<C>] {
        &self.pairs
    }
}

// The index is derived data; equality is the ordered pair sequence.
impl<C: Config> PartialEq for PairMap<C> {
    fn eq(&self, other: &Self) -> bool {
        self.pairs == other.pairs
    }
}

impl<C: Config> Eq for PairMap<C> {}

impl<C: Config> FromIterator<Pair<C>> for PairMap<C> {
    fn from_iter<I: IntoIterator<Item = Pair<C>>>(iter: I) -> Self {
        let mut members = PairMap::default();
        for pair in iter {
            members.push(pair);
        }
        members
    }
}

impl<C: Config> From<Vec<Pair<C>>> for PairMap<C> {
    fn from(pairs: Vec<Pair<C>>) -> Self {
        pairs.into_iter().collect()
    }
}
