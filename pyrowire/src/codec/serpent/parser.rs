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

//! Serpent literal parser.

use crate::codec::LiteralError;
use crate::value::{Dict, Value};

pub(super) struct Parser<'a> {
    src: &'a str,
    pos: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    pub(super) fn new(src: &'a str, max_depth: usize) -> Self {
        Self {
            src,
            pos: 0,
            max_depth,
        }
    }

    /// Parses the whole input as exactly one value.
    pub(super) fn parse_document(mut self) -> Result<Value, LiteralError> {
        let value = self.parse_value(0)?;
        self.skip_trivia();
        if self.pos < self.src.len() {
            return Err(LiteralError::TrailingData { offset: self.pos });
        }
        Ok(value)
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn expect_char(&mut self) -> Result<char, LiteralError> {
        self.bump()
            .ok_or(LiteralError::UnexpectedEnd { offset: self.pos })
    }

    fn unexpected(&self, ch: char) -> LiteralError {
        LiteralError::UnexpectedChar {
            ch,
            offset: self.pos,
        }
    }

    /// Skips whitespace and `#` comments.
    fn skip_trivia(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == '#' {
                while let Some(ch) = self.bump() {
                    if ch == '\n' {
                        break;
                    }
                }
            } else if ch.is_whitespace() {
                self.pos += ch.len_utf8();
            } else {
                break;
            }
        }
    }

    fn parse_value(&mut self, depth: usize) -> Result<Value, LiteralError> {
        if depth > self.max_depth {
            return Err(LiteralError::TooDeep {
                limit: self.max_depth,
            });
        }
        self.skip_trivia();
        let ch = self
            .peek()
            .ok_or(LiteralError::UnexpectedEnd { offset: self.pos })?;
        match ch {
            '[' => {
                self.pos += 1;
                let (items, _) = self.parse_items(']', depth)?;
                Ok(Value::List(items))
            }
            '(' => {
                self.pos += 1;
                let (mut items, saw_comma) = self.parse_items(')', depth)?;
                if items.len() == 1 && !saw_comma {
                    Ok(items.remove(0))
                } else {
                    Ok(Value::Tuple(items))
                }
            }
            '{' => {
                self.pos += 1;
                self.parse_brace(depth)
            }
            '\'' | '"' => Ok(Value::Str(self.parse_string()?)),
            'b' if matches!(self.src[self.pos + 1..].chars().next(), Some('\'' | '"')) => {
                self.pos += 1;
                Ok(Value::Bytes(self.parse_byte_string()?))
            }
            '-' | '+' | '.' | '0'..='9' => self.parse_number(),
            c if c.is_alphabetic() || c == '_' => self.parse_word(),
            c => Err(self.unexpected(c)),
        }
    }

    /// Parses comma separated values up to `close`, allowing a trailing comma.
    fn parse_items(
        &mut self,
        close: char,
        depth: usize,
    ) -> Result<(Vec<Value>, bool), LiteralError> {
        let mut items = Vec::new();
        let mut saw_comma = false;
        loop {
            self.skip_trivia();
            if self.peek() == Some(close) {
                self.pos += 1;
                return Ok((items, saw_comma));
            }
            items.push(self.parse_value(depth + 1)?);
            self.skip_trivia();
            match self.expect_char()? {
                ',' => saw_comma = true,
                c if c == close => return Ok((items, saw_comma)),
                c => {
                    self.pos -= c.len_utf8();
                    return Err(self.unexpected(c));
                }
            }
        }
    }

    /// Parses a dict or a set; the opening brace is already consumed.
    fn parse_brace(&mut self, depth: usize) -> Result<Value, LiteralError> {
        self.skip_trivia();
        if self.peek() == Some('}') {
            self.pos += 1;
            return Ok(Value::Dict(Dict::new()));
        }

        let key_offset = self.pos;
        let first = self.parse_value(depth + 1)?;
        self.skip_trivia();
        if self.peek() != Some(':') {
            let mut items = vec![first];
            match self.expect_char()? {
                ',' => {
                    let (rest, _) = self.parse_items('}', depth)?;
                    items.extend(rest);
                }
                '}' => {}
                c => {
                    self.pos -= c.len_utf8();
                    return Err(self.unexpected(c));
                }
            }
            return Ok(Value::Set(items));
        }

        let mut dict = Dict::new();
        let mut key = dict_key(first, key_offset)?;
        loop {
            self.skip_trivia();
            match self.expect_char()? {
                ':' => {}
                c => {
                    self.pos -= c.len_utf8();
                    return Err(self.unexpected(c));
                }
            }
            let value = self.parse_value(depth + 1)?;
            dict.insert(key, value);

            self.skip_trivia();
            match self.expect_char()? {
                '}' => return Ok(Value::Dict(dict)),
                ',' => {}
                c => {
                    self.pos -= c.len_utf8();
                    return Err(self.unexpected(c));
                }
            }
            self.skip_trivia();
            if self.peek() == Some('}') {
                self.pos += 1;
                return Ok(Value::Dict(dict));
            }
            let key_offset = self.pos;
            key = dict_key(self.parse_value(depth + 1)?, key_offset)?;
        }
    }

    fn parse_word(&mut self) -> Result<Value, LiteralError> {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() || ch == '_' {
                self.pos += ch.len_utf8();
            } else {
                break;
            }
        }
        match &self.src[start..self.pos] {
            "None" => Ok(Value::None),
            "True" => Ok(Value::Bool(true)),
            "False" => Ok(Value::Bool(false)),
            word => {
                self.pos = start;
                Err(self.unexpected(word.chars().next().unwrap_or('?')))
            }
        }
    }

    fn parse_number(&mut self) -> Result<Value, LiteralError> {
        let start = self.pos;
        let mut prev = None;
        while let Some(ch) = self.peek() {
            let accepted = match ch {
                '0'..='9' | '.' | '_' | 'e' | 'E' => true,
                '+' | '-' => prev.is_none() || matches!(prev, Some('e' | 'E')),
                _ => false,
            };
            if !accepted {
                break;
            }
            prev = Some(ch);
            self.pos += 1;
        }

        let text = &self.src[start..self.pos];
        let cleaned: String = text.chars().filter(|&c| c != '_').collect();
        let is_float = cleaned.contains(['.', 'e', 'E']);
        let invalid = || LiteralError::InvalidNumber {
            text: text.to_string(),
            offset: start,
        };

        if is_float {
            cleaned.parse::<f64>().map(Value::Float).map_err(|_| invalid())
        } else {
            match cleaned.parse::<i64>() {
                Ok(value) => Ok(Value::Int(value)),
                Err(e) => match e.kind() {
                    std::num::IntErrorKind::PosOverflow | std::num::IntErrorKind::NegOverflow => {
                        Err(LiteralError::IntegerOverflow {
                            text: text.to_string(),
                            offset: start,
                        })
                    }
                    _ => Err(invalid()),
                },
            }
        }
    }

    fn parse_string(&mut self) -> Result<String, LiteralError> {
        let quote = self.expect_char()?;
        let mut out = String::new();
        loop {
            let offset = self.pos;
            match self.expect_char()? {
                c if c == quote => return Ok(out),
                '\\' => {
                    if let Some(ch) = self.parse_escape(offset, true)? {
                        out.push(ch);
                    }
                }
                '\n' => {
                    self.pos = offset;
                    return Err(self.unexpected('\n'));
                }
                c => out.push(c),
            }
        }
    }

    fn parse_byte_string(&mut self) -> Result<Vec<u8>, LiteralError> {
        let quote = self.expect_char()?;
        let mut out = Vec::new();
        loop {
            let offset = self.pos;
            match self.expect_char()? {
                c if c == quote => return Ok(out),
                '\\' => {
                    if let Some(ch) = self.parse_escape(offset, false)? {
                        out.push(u8::try_from(u32::from(ch)).map_err(|_| {
                            LiteralError::InvalidEscape { offset }
                        })?);
                    }
                }
                c if c.is_ascii() && c != '\n' => out.push(c as u8),
                c => {
                    self.pos = offset;
                    return Err(self.unexpected(c));
                }
            }
        }
    }

    /// Decodes the escape after a backslash at `offset`. Returns `None` for a
    /// line continuation.
    fn parse_escape(&mut self, offset: usize, unicode: bool) -> Result<Option<char>, LiteralError> {
        let ch = match self.expect_char()? {
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            '0' => '\0',
            'a' => '\u{07}',
            'b' => '\u{08}',
            'f' => '\u{0c}',
            'v' => '\u{0b}',
            '\\' => '\\',
            '\'' => '\'',
            '"' => '"',
            '\n' => return Ok(None),
            'x' => self.parse_hex(2, offset)?,
            'u' if unicode => self.parse_hex(4, offset)?,
            'U' if unicode => self.parse_hex(8, offset)?,
            _ => return Err(LiteralError::InvalidEscape { offset }),
        };
        Ok(Some(ch))
    }

    fn parse_hex(&mut self, digits: usize, offset: usize) -> Result<char, LiteralError> {
        let end = self.pos + digits;
        let text = self
            .src
            .get(self.pos..end)
            .filter(|text| text.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or(LiteralError::InvalidEscape { offset })?;
        let code =
            u32::from_str_radix(text, 16).map_err(|_| LiteralError::InvalidEscape { offset })?;
        self.pos = end;
        char::from_u32(code).ok_or(LiteralError::InvalidEscape { offset })
    }
}

/// Converts a parsed dict key to its string form.
fn dict_key(key: Value, offset: usize) -> Result<String, LiteralError> {
    match key {
        Value::Str(s) => Ok(s),
        scalar @ (Value::None | Value::Bool(_) | Value::Int(_) | Value::Float(_)) => {
            Ok(scalar.to_string())
        }
        other => Err(LiteralError::InvalidKey {
            found: other.type_name(),
            offset,
        }),
    }
}
