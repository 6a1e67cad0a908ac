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

use crate::object::{ObjectBacking, PairList, PairMap};
use crate::text::{Text, WideText};
use std::fmt::Debug;
use std::hash::Hash;

/// Compile-time selection of the string representation and the object
/// backing used by a [`crate::Value`] tree. All instantiations share the
/// model and serializer logic and produce identical serialized text; they
/// differ only in storage and lookup cost.
pub trait Config: Sized + Clone + Copy + Debug + Eq + Hash + Default + 'static {
    type Text: Text;
    type Object: ObjectBacking<Self>;
}

/// Narrow (UTF-8) strings, objects as a plain ordered pair list. The
/// default configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct StdConfig;

impl Config for StdConfig {
    type Text = String;
    type Object = PairList<StdConfig>;
}

/// Narrow strings, objects with a keyed first-occurrence index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct MapConfig;

impl Config for MapConfig {
    type Text = String;
    type Object = PairMap<MapConfig>;
}

/// Wide (UTF-16) strings, objects as a plain ordered pair list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct WideConfig;

impl Config for WideConfig {
    type Text = WideText;
    type Object = PairList<WideConfig>;
}

/// Wide strings, objects with a keyed first-occurrence index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct WideMapConfig;

impl Config for WideMapConfig {
    type Text = WideText;
    type Object = PairMap<WideMapConfig>;
}
