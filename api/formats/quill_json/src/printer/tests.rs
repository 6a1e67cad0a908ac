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

use quill_model::{
    array, object, Config, MapConfig, ObjectBacking, Pair, StdConfig, Value, WideConfig,
    WideMapConfig, WideText,
};
use std::fmt::Write;

fn print_value<C: Config>(v: &Value<C>) -> String {
    format!("{}", super::print_json(v))
}

fn print_pretty<C: Config>(v: &Value<C>) -> String {
    format!("{}", super::print_json_pretty(v))
}

#[test]
fn empty_object() {
    let obj: Value = object!();
    assert_eq!(print_value(&obj), "{}");
    assert_eq!(print_pretty(&obj), "{\n}");
}

#[test]
fn object_with_one_member() {
    let obj: Value = object! { "name" => "value" };
    assert_eq!(print_value(&obj), "{\"name\":\"value\"}");
    assert_eq!(print_pretty(&obj), "{\n    \"name\" : \"value\"\n}");
}

#[test]
fn object_with_two_members() {
    let obj: Value = object! { "name_1" => "value_1", "name_2" => "value_2" };
    assert_eq!(
        print_value(&obj),
        "{\"name_1\":\"value_1\",\"name_2\":\"value_2\"}"
    );
    assert_eq!(
        print_pretty(&obj),
        "{\n    \"name_1\" : \"value_1\",\n    \"name_2\" : \"value_2\"\n}"
    );
}

#[test]
fn object_with_three_members() {
    let obj: Value = object! {
        "name_1" => "value_1",
        "name_2" => "value_2",
        "name_3" => "value_3",
    };
    assert_eq!(
        print_value(&obj),
        "{\"name_1\":\"value_1\",\"name_2\":\"value_2\",\"name_3\":\"value_3\"}"
    );
    assert_eq!(
        print_pretty(&obj),
        "{\n    \"name_1\" : \"value_1\",\n    \"name_2\" : \"value_2\",\n    \"name_3\" : \"value_3\"\n}"
    );
}

#[test]
fn object_with_one_empty_child_object() {
    let root: Value = object! { "child" => object!() };
    assert_eq!(print_value(&root), "{\"child\":{}}");
    assert_eq!(print_pretty(&root), "{\n    \"child\" : {\n    }\n}");
}

#[test]
fn object_with_one_child_object() {
    let root: Value = object! {
        "child" => object! { "name_2" => "value_2" },
        "name_1" => "value_1",
    };
    assert_eq!(
        print_value(&root),
        "{\"child\":{\"name_2\":\"value_2\"},\"name_1\":\"value_1\"}"
    );
    assert_eq!(
        print_pretty(&root),
        "{\n\
         \x20   \"child\" : {\n\
         \x20       \"name_2\" : \"value_2\"\n\
         \x20   },\n\
         \x20   \"name_1\" : \"value_1\"\n\
         }"
    );
}

#[test]
fn object_with_grandchild_object() {
    let root: Value = object! {
        "child_1" => object! { "name_1" => "value_1" },
        "child_2" => object! {
            "grandchild" => object! { "name_3" => "value_3" },
            "name_2" => "value_2",
        },
        "name_a" => "value_a",
        "name_b" => "value_b",
    };
    assert_eq!(
        print_value(&root),
        "{\"child_1\":{\"name_1\":\"value_1\"},\
         \"child_2\":{\"grandchild\":{\"name_3\":\"value_3\"},\"name_2\":\"value_2\"},\
         \"name_a\":\"value_a\",\
         \"name_b\":\"value_b\"}"
    );
    assert_eq!(
        print_pretty(&root),
        "{\n\
         \x20   \"child_1\" : {\n\
         \x20       \"name_1\" : \"value_1\"\n\
         \x20   },\n\
         \x20   \"child_2\" : {\n\
         \x20       \"grandchild\" : {\n\
         \x20           \"name_3\" : \"value_3\"\n\
         \x20       },\n\
         \x20       \"name_2\" : \"value_2\"\n\
         \x20   },\n\
         \x20   \"name_a\" : \"value_a\",\n\
         \x20   \"name_b\" : \"value_b\"\n\
         }"
    );
}

#[test]
fn object_with_bool_members() {
    let obj: Value = object! { "name_1" => true, "name_2" => false, "name_3" => true };
    assert_eq!(
        print_value(&obj),
        "{\"name_1\":true,\"name_2\":false,\"name_3\":true}"
    );
}

#[test]
fn object_with_int_members() {
    let obj: Value = object! { "name_1" => 11, "name_2" => i32::MAX, "name_3" => i64::MAX };
    assert_eq!(
        print_value(&obj),
        format!(
            "{{\"name_1\":11,\"name_2\":{},\"name_3\":{}}}",
            i32::MAX,
            i64::MAX
        )
    );
}

#[test]
fn object_with_real_members() {
    let obj: Value = object! {
        "name_1" => 1.0,
        "name_2" => 1.234567890123456e-108,
        "name_3" => -1234567890.123456,
        "name_4" => -1.2e-126,
    };
    assert_eq!(
        print_value(&obj),
        "{\"name_1\":1.000000000000000,\
         \"name_2\":1.234567890123456e-108,\
         \"name_3\":-1234567890.123456,\
         \"name_4\":-1.200000000000000e-126}"
    );
}

#[test]
fn object_with_null_members() {
    let obj: Value = object! {
        "name_1" => Value::Null,
        "name_2" => Value::Null,
        "name_3" => Value::Null,
    };
    assert_eq!(
        print_value(&obj),
        "{\"name_1\":null,\"name_2\":null,\"name_3\":null}"
    );
}

#[test]
fn empty_array() {
    let arr: Value = array!();
    assert_eq!(print_value(&arr), "[]");
    assert_eq!(print_pretty(&arr), "[\n]");
}

#[test]
fn array_with_one_member() {
    let arr: Value = array!("value");
    assert_eq!(print_value(&arr), "[\"value\"]");
    assert_eq!(print_pretty(&arr), "[\n    \"value\"\n]");
}

#[test]
fn array_with_two_members() {
    let arr: Value = array!("value_1", 1);
    assert_eq!(print_value(&arr), "[\"value_1\",1]");
    assert_eq!(print_pretty(&arr), "[\n    \"value_1\",\n    1\n]");
}

#[test]
fn array_with_mixed_members() {
    let arr: Value = array!("value_1", 123, 123.456, true, false, Value::Null);
    assert_eq!(
        print_value(&arr),
        "[\"value_1\",123,123.4560000000000,true,false,null]"
    );
    assert_eq!(
        print_pretty(&arr),
        "[\n\
         \x20   \"value_1\",\n\
         \x20   123,\n\
         \x20   123.4560000000000,\n\
         \x20   true,\n\
         \x20   false,\n\
         \x20   null\n\
         ]"
    );
}

#[test]
fn array_with_one_empty_child_array() {
    let arr: Value = array!(array!());
    assert_eq!(print_value(&arr), "[[]]");
    assert_eq!(print_pretty(&arr), "[\n    [\n    ]\n]");
}

#[test]
fn array_with_one_child_array() {
    let root: Value = array!(1, array!(2));
    assert_eq!(print_value(&root), "[1,[2]]");
    assert_eq!(print_pretty(&root), "[\n    1,\n    [\n        2\n    ]\n]");
}

#[test]
fn array_with_grandchild_array() {
    let root: Value = array!(1, array!(11), array!(22, array!(33)), 2);
    assert_eq!(print_value(&root), "[1,[11],[22,[33]],2]");
    assert_eq!(
        print_pretty(&root),
        "[\n\
         \x20   1,\n\
         \x20   [\n\
         \x20       11\n\
         \x20   ],\n\
         \x20   [\n\
         \x20       22,\n\
         \x20       [\n\
         \x20           33\n\
         \x20       ]\n\
         \x20   ],\n\
         \x20   2\n\
         ]"
    );
}

#[test]
fn array_containing_objects() {
    let arr: Value = array!(11, object! { "a" => 1 });
    assert_eq!(print_value(&arr), "[11,{\"a\":1}]");
    assert_eq!(
        print_pretty(&arr),
        "[\n\
         \x20   11,\n\
         \x20   {\n\
         \x20       \"a\" : 1\n\
         \x20   }\n\
         ]"
    );
}

#[test]
fn object_containing_arrays() {
    let obj: Value = object! { "a" => 1, "b" => array!(11) };
    assert_eq!(print_value(&obj), "{\"a\":1,\"b\":[11]}");
    assert_eq!(
        print_pretty(&obj),
        "{\n\
         \x20   \"a\" : 1,\n\
         \x20   \"b\" : [\n\
         \x20       11\n\
         \x20   ]\n\
         }"
    );
}

#[test]
fn escapes_apply_to_names_and_values() {
    for (raw, escaped) in [
        ("\r", "\\r"),
        ("\n", "\\n"),
        ("\t", "\\t"),
        ("\u{0C}", "\\f"),
        ("\u{08}", "\\b"),
        ("\"", "\\\""),
        ("\\", "\\\\"),
        ("\u{01}", "\\u0001"),
        ("\u{12}", "\\u0012"),
        ("\u{7F}", "\\u007F"),
    ] {
        let name = format!("{}name", raw);
        let value = format!("value{}", raw);
        let obj: Value = object! { name => value };
        assert_eq!(
            print_value(&obj),
            format!("{{\"{}name\":\"value{}\"}}", escaped, escaped)
        );
    }
}

#[test]
fn scalar_values_print_bare() {
    assert_eq!(print_value(&Value::<StdConfig>::from(123)), "123");
    assert_eq!(
        print_value(&Value::<StdConfig>::from(1.234)),
        "1.234000000000000"
    );
    assert_eq!(print_value(&Value::<StdConfig>::text("abc")), "\"abc\"");
    assert_eq!(print_value(&Value::<StdConfig>::from(false)), "false");
    assert_eq!(print_value(&Value::<StdConfig>::Null), "null");
}

#[test]
fn integer_kinds_print_by_value() {
    assert_eq!(print_value(&Value::<StdConfig>::from(0)), "0");
    assert_eq!(print_value(&Value::<StdConfig>::from(0i64)), "0");
    assert_eq!(print_value(&Value::<StdConfig>::from(0u64)), "0");

    assert_eq!(print_value(&Value::<StdConfig>::from(1)), "1");
    assert_eq!(print_value(&Value::<StdConfig>::from(1i64)), "1");
    assert_eq!(print_value(&Value::<StdConfig>::from(1u64)), "1");

    assert_eq!(print_value(&Value::<StdConfig>::from(-1)), "-1");
    assert_eq!(print_value(&Value::<StdConfig>::from(-1i64)), "-1");

    assert_eq!(
        print_value(&Value::<StdConfig>::from(i64::MAX)),
        "9223372036854775807"
    );
    assert_eq!(
        print_value(&Value::<StdConfig>::from(i64::MAX as u64)),
        "9223372036854775807"
    );
    assert_eq!(
        print_value(&Value::<StdConfig>::from(i64::MAX as u64 + 1)),
        "9223372036854775808"
    );
    assert_eq!(
        print_value(&Value::<StdConfig>::from(u64::MAX)),
        "18446744073709551615"
    );
}

#[test]
fn writes_to_any_fmt_sink() {
    let arr: Value = array!(1, 2);
    let mut out = String::new();
    write!(out, "{}", super::print_json(&arr)).expect("writing to a string cannot fail");
    assert_eq!(out, "[1,2]");
}

#[test]
fn extended_ascii_escapes_as_hex() {
    let arr: Value = array!("\u{E4}\u{F6}\u{FC}\u{DF}");
    assert_eq!(print_value(&arr), "[\"\\u00E4\\u00F6\\u00FC\\u00DF\"]");
}

#[test]
fn wide_units_escape_as_hex() {
    for (unit, escaped) in [(0xABCDu16, "\\uABCD"), (0xFFFF, "\\uFFFF")] {
        let arr: Value<WideConfig> =
            Value::Array(vec![Value::Text(WideText::from_units(vec![unit]))]);
        assert_eq!(print_value(&arr), format!("[\"{}\"]", escaped));
    }
}

fn sample<C: Config>() -> Value<C> {
    let mut obj = C::Object::default();
    obj.push(Pair::of(("name", "value")));
    obj.push(Pair::of((
        "list",
        Value::Array(vec![Value::from(1), Value::from(2.5), Value::Null]),
    )));
    obj.push(Pair::of(("flag", true)));
    obj.push(Pair::of(("big", u64::MAX)));
    Value::object(obj)
}

#[test]
fn all_configurations_serialize_identically() {
    let expected_compact = print_value(&sample::<StdConfig>());
    assert_eq!(print_value(&sample::<MapConfig>()), expected_compact);
    assert_eq!(print_value(&sample::<WideConfig>()), expected_compact);
    assert_eq!(print_value(&sample::<WideMapConfig>()), expected_compact);

    let expected_pretty = print_pretty(&sample::<StdConfig>());
    assert_eq!(print_pretty(&sample::<MapConfig>()), expected_pretty);
    assert_eq!(print_pretty(&sample::<WideConfig>()), expected_pretty);
    assert_eq!(print_pretty(&sample::<WideMapConfig>()), expected_pretty);
}

#[test]
fn output_is_deterministic_across_invocations() {
    let value = sample::<StdConfig>();
    let first = print_value(&value);
    let second = print_value(&value);
    assert_eq!(first, second);

    let first_pretty = print_pretty(&value);
    let second_pretty = print_pretty(&value);
    assert_eq!(first_pretty, second_pretty);
}
