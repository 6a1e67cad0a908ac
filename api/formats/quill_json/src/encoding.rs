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

use crate::print_json;
use bytes::{Buf, BufMut, BytesMut};
use quill_model::{Config, Value};
use std::fmt::Write;
use tokio_util::codec::Encoder;

const RESERVE_INIT: usize = 256;
const RESERVE_MULT: usize = 2;

fn write_json_body<C: Config>(dst: &mut BytesMut, value: &Value<C>) -> usize {
    let mut next_res = RESERVE_INIT.max(dst.remaining_mut().saturating_mul(RESERVE_MULT));
    let body_offset = dst.remaining();
    loop {
        if write!(dst, "{}", print_json(value)).is_err() {
            dst.truncate(body_offset);
            dst.reserve(next_res);
            next_res = next_res.saturating_mul(RESERVE_MULT);
        } else {
            break;
        }
    }
    body_offset
}

/// Append the compact JSON text of a value to the buffer, returning the
/// number of bytes written.
pub fn write_json<C: Config>(dst: &mut BytesMut, value: &Value<C>) -> usize {
    let body_offset = write_json_body(dst, value);
    dst.remaining() - body_offset
}

/// Encodes [`Value`]s as compact UTF-8 JSON text.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEncoder;

impl<C: Config> Encoder<Value<C>> for JsonEncoder {
    type Error = std::io::Error;

    fn encode(&mut self, item: Value<C>, dst: &mut BytesMut) -> Result<(), Self::Error> {
        write_json(dst, &item);
        Ok(())
    }
}
