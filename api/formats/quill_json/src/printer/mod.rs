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

#[cfg(test)]
mod tests;

use crate::num::{write_float, FALSE, NULL, TRUE};
use quill_model::{write_string_literal, Config, ObjectBacking, Pair, Value};
use std::fmt::{Display, Formatter};

/// Print a compact JSON representation of a [`Value`] tree: no whitespace,
/// `,` between elements, `:` between an object name and its value.
pub fn print_json<C: Config>(value: &Value<C>) -> impl Display + '_ {
    JsonPrint(value, CompactPrint)
}

/// Print a pretty JSON representation of a [`Value`] tree: four spaces of
/// indentation per nesting level, one element per line, and ` : ` between
/// an object name and its value.
pub fn print_json_pretty<C: Config>(value: &Value<C>) -> impl Display + '_ {
    JsonPrint(value, PrettyPrint::new())
}

struct JsonPrint<'a, C: Config, S>(&'a Value<C>, S);

impl<'a, C: Config, S: PrintStrategy + Copy> Display for JsonPrint<'a, C, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let JsonPrint(inner, strategy) = self;
        let mut printer = JsonPrinter::new(f, *strategy);
        printer.write_value(inner)
    }
}

/// A recursive serializer for [`Value`] trees, parameterized by the padding
/// strategy that distinguishes the compact and pretty modes.
pub struct JsonPrinter<'a, 'b, S> {
    fmt: &'a mut Formatter<'b>,
    strategy: S,
}

impl<'a, 'b, S> JsonPrinter<'a, 'b, S>
where
    S: PrintStrategy,
{
    pub fn new(fmt: &'a mut Formatter<'b>, strategy: S) -> Self {
        JsonPrinter { fmt, strategy }
    }

    pub fn write_value<C: Config>(&mut self, value: &Value<C>) -> std::fmt::Result {
        match value {
            Value::Null => self.fmt.write_str(NULL),
            Value::BooleanValue(p) => self.fmt.write_str(if *p { TRUE } else { FALSE }),
            Value::Int32Value(n) => write!(self.fmt, "{}", n),
            Value::Int64Value(n) => write!(self.fmt, "{}", n),
            Value::UInt64Value(n) => write!(self.fmt, "{}", n),
            Value::Float64Value(x) => write_float(self.fmt, *x),
            Value::Text(s) => write_string_literal(s, self.fmt),
            Value::Array(items) => self.write_array(items),
            Value::Object(members) => self.write_object(members.pairs()),
        }
    }

    fn write_array<C: Config>(&mut self, items: &[Value<C>]) -> std::fmt::Result {
        self.fmt.write_str("[")?;
        let padding = self.strategy.block_start_padding(items.len());
        write!(self.fmt, "{}", padding)?;
        let mut first = true;
        for item in items {
            if first {
                first = false;
            } else {
                self.fmt.write_str(",")?;
                let padding = self.strategy.item_padding();
                write!(self.fmt, "{}", padding)?;
            }
            self.write_value(item)?;
        }
        let padding = self.strategy.block_end_padding(items.len());
        write!(self.fmt, "{}", padding)?;
        self.fmt.write_str("]")
    }

    fn write_object<C: Config>(&mut self, pairs: &[Pair<C>]) -> std::fmt::Result {
        self.fmt.write_str("{")?;
        let padding = self.strategy.block_start_padding(pairs.len());
        write!(self.fmt, "{}", padding)?;
        let mut first = true;
        for pair in pairs {
            if first {
                first = false;
            } else {
                self.fmt.write_str(",")?;
                let padding = self.strategy.item_padding();
                write!(self.fmt, "{}", padding)?;
            }
            write_string_literal(&pair.name, self.fmt)?;
            let padding = self.strategy.slot_padding();
            write!(self.fmt, "{}", padding)?;
            self.fmt.write_str(":")?;
            let padding = self.strategy.slot_padding();
            write!(self.fmt, "{}", padding)?;
            self.write_value(&pair.value)?;
        }
        let padding = self.strategy.block_end_padding(pairs.len());
        write!(self.fmt, "{}", padding)?;
        self.fmt.write_str("}")
    }
}

/// Padding used by the print strategies to customise the output format.
pub enum Padding {
    /// Simple padding that writes only a string slice.
    Simple(&'static str),
    /// Complex padding that writes a string slice as a prefix followed by
    /// `repeats` writes of another string slice.
    Complex {
        prefix: &'static str,
        block: &'static str,
        repeats: usize,
    },
}

const NO_SPACE: Padding = Padding::Simple("");
const SINGLE_SPACE: Padding = Padding::Simple(" ");
const PRETTY_INDENT: &str = "    ";
const NEW_LINE: &str = "\n";

impl Display for Padding {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Padding::Simple(padding) => f.write_str(padding)?,
            Padding::Complex {
                prefix,
                block,
                repeats,
            } => {
                f.write_str(prefix)?;
                for _ in 0..*repeats {
                    f.write_str(block)?;
                }
            }
        }

        Ok(())
    }
}

/// The whitespace policy of a serialization mode. Container hooks take the
/// element count so that empty containers can be laid out specially.
pub trait PrintStrategy {
    /// Padding after an opening bracket.
    fn block_start_padding(&mut self, items: usize) -> Padding;

    /// Padding before a closing bracket.
    fn block_end_padding(&mut self, items: usize) -> Padding;

    /// Padding after the `,` between elements.
    fn item_padding(&self) -> Padding;

    /// Padding on either side of the `:` between a name and its value.
    fn slot_padding(&self) -> Padding;
}

#[derive(Clone, Copy)]
struct CompactPrint;

impl PrintStrategy for CompactPrint {
    fn block_start_padding(&mut self, _items: usize) -> Padding {
        NO_SPACE
    }

    fn block_end_padding(&mut self, _items: usize) -> Padding {
        NO_SPACE
    }

    fn item_padding(&self) -> Padding {
        NO_SPACE
    }

    fn slot_padding(&self) -> Padding {
        NO_SPACE
    }
}

#[derive(Clone, Copy)]
struct PrettyPrint {
    indent_level: usize,
}

impl PrettyPrint {
    fn new() -> Self {
        PrettyPrint { indent_level: 0 }
    }

    fn write_new_line(&self) -> Padding {
        Padding::Complex {
            prefix: NEW_LINE,
            block: PRETTY_INDENT,
            repeats: self.indent_level,
        }
    }
}

impl PrintStrategy for PrettyPrint {
    fn block_start_padding(&mut self, items: usize) -> Padding {
        // An empty container still breaks the line; the closing bracket
        // lands on its own line at the container's indent.
        if items > 0 {
            self.indent_level += 1;
        }
        self.write_new_line()
    }

    fn block_end_padding(&mut self, items: usize) -> Padding {
        if items == 0 {
            NO_SPACE
        } else {
            self.indent_level -= 1;
            self.write_new_line()
        }
    }

    fn item_padding(&self) -> Padding {
        self.write_new_line()
    }

    fn slot_padding(&self) -> Padding {
        SINGLE_SPACE
    }
}
