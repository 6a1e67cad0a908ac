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

/// Creates a value from the provided expression.
///
/// For example:
/// ```
/// use quill_model::{value, Value};
///
/// let value: Value = value!(1i32);
/// assert_eq!(value, Value::Int32Value(1));
/// ```
///
/// ## Null value:
/// ```
/// use quill_model::{value, Value};
///
/// let value: Value = value!();
/// assert_eq!(value, Value::Null);
/// ```
#[macro_export]
macro_rules! value {
    () => {
        $crate::Value::Null
    };
    ($x:expr) => {
        $crate::Value::from($x)
    };
}

/// Creates an array value from the provided items.
///
/// ```
/// use quill_model::{array, Value};
///
/// let value: Value = array!(1, "two", true);
/// assert_eq!(value.get_array().len(), 3);
/// ```
#[macro_export]
macro_rules! array {
    () => {
        $crate::Value::empty_array()
    };
    ($($items:expr),+ $(,)?) => {
        $crate::Value::Array(vec![$($crate::Value::from($items)),+])
    };
}

/// Creates an object value from `name => value` entries, in order.
///
/// ```
/// use quill_model::{object, ObjectBacking, Value};
///
/// let value: Value = object! { "a" => 1, "b" => "two" };
/// assert_eq!(value.get_obj().len(), 2);
/// ```
#[macro_export]
macro_rules! object {
    () => {
        $crate::Value::empty_object()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {
        $crate::Value::object(
            [$($crate::Pair::of(($name, $value))),+].into_iter().collect()
        )
    };
}
