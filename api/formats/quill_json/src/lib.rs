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

//! Deterministic JSON text output for [`quill_model::Value`] trees. The
//! same tree serializes to byte-identical text on every invocation and
//! under every model configuration; the only failure source is the output
//! sink, whose errors propagate unchanged.

mod encoding;
mod num;
mod printer;

pub use encoding::{write_json, JsonEncoder};
pub use printer::{print_json, print_json_pretty, JsonPrinter, Padding, PrintStrategy};
