//
// Copyright 2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Serpent literal writer.

use super::HEADER;
use crate::codec::materialize::{bytes_to_dict, nan_to_dict};
use crate::codec::{ClassConverters, EncodeOptions, LiteralError};
use crate::value::display::{write_float_literal, write_str_literal};
use crate::value::{Dict, Value};
use std::fmt::Write as _;

const INDENT: &str = "  ";

pub(super) struct Writer<'a> {
    out: String,
    options: &'a EncodeOptions,
    converters: &'a ClassConverters,
    max_depth: usize,
}

impl<'a> Writer<'a> {
    pub(super) fn new(
        options: &'a EncodeOptions,
        converters: &'a ClassConverters,
        max_depth: usize,
    ) -> Self {
        Self {
            out: String::from(HEADER),
            options,
            converters,
            max_depth,
        }
    }

    pub(super) fn finish(self) -> Vec<u8> {
        self.out.into_bytes()
    }

    pub(super) fn write(&mut self, value: &Value, level: usize) -> Result<(), LiteralError> {
        if level > self.max_depth {
            return Err(LiteralError::TooDeep {
                limit: self.max_depth,
            });
        }
        match value {
            Value::None => self.out.push_str("None"),
            Value::Bool(true) => self.out.push_str("True"),
            Value::Bool(false) => self.out.push_str("False"),
            Value::Int(i) => self.text(format_args!("{i}")),
            Value::Float(v) if v.is_nan() => self.write_dict(&nan_to_dict(), level)?,
            Value::Float(v) => {
                let _ = write_float_literal(&mut self.out, *v);
            }
            Value::Str(s) => {
                let _ = write_str_literal(&mut self.out, s);
            }
            Value::Bytes(bytes) => self.write_dict(&bytes_to_dict(bytes), level)?,
            Value::List(items) => self.write_seq("[", "]", items, level, false)?,
            Value::Tuple(items) => self.write_seq("(", ")", items, level, items.len() == 1)?,
            Value::Set(items) if self.options.set_literals && !items.is_empty() => {
                self.write_seq("{", "}", items, level, false)?;
            }
            Value::Set(items) => self.write_seq("(", ")", items, level, items.len() == 1)?,
            Value::Dict(dict) => self.write_dict(dict, level)?,
            native => {
                let kind = native
                    .native_kind()
                    .ok_or_else(|| LiteralError::Unsupported {
                        reason: format!("{} values", native.type_name()),
                    })?;
                let dict = self.converters.convert(kind, native)?;
                self.write_dict(&dict, level)?;
            }
        }
        Ok(())
    }

    fn text(&mut self, args: std::fmt::Arguments<'_>) {
        let _ = self.out.write_fmt(args);
    }

    fn newline(&mut self, level: usize) {
        if self.options.indent {
            self.out.push('\n');
            for _ in 0..level {
                self.out.push_str(INDENT);
            }
        }
    }

    fn write_seq(
        &mut self,
        open: &str,
        close: &str,
        items: &[Value],
        level: usize,
        trailing_comma: bool,
    ) -> Result<(), LiteralError> {
        self.out.push_str(open);
        if items.is_empty() {
            self.out.push_str(close);
            return Ok(());
        }
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.newline(level + 1);
            self.write(item, level + 1)?;
        }
        if trailing_comma {
            self.out.push(',');
        }
        self.newline(level);
        self.out.push_str(close);
        Ok(())
    }

    fn write_dict(&mut self, dict: &Dict, level: usize) -> Result<(), LiteralError> {
        self.out.push('{');
        if dict.is_empty() {
            self.out.push('}');
            return Ok(());
        }
        let separator = if self.options.indent { ": " } else { ":" };
        for (i, (key, value)) in dict.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.newline(level + 1);
            let _ = write_str_literal(&mut self.out, key);
            self.out.push_str(separator);
            self.write(value, level + 1)?;
        }
        self.newline(level);
        self.out.push('}');
        Ok(())
    }
}
