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

//! Codec error types.

use super::CodecVersion;
use crate::value::NativeKind;
use thiserror::Error;

/// Errors produced while writing or parsing literal payloads.
#[derive(Debug, Error)]
pub enum LiteralError {
    /// Input ended in the middle of a value.
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEnd {
        /// Byte offset where input ended
        offset: usize,
    },

    /// A character that cannot start or continue the current construct.
    #[error("unexpected character {ch:?} at offset {offset}")]
    UnexpectedChar {
        /// The offending character
        ch: char,
        /// Byte offset of the character
        offset: usize,
    },

    /// A numeric literal that does not parse.
    #[error("invalid number {text:?} at offset {offset}")]
    InvalidNumber {
        /// The literal text
        text: String,
        /// Byte offset of the literal
        offset: usize,
    },

    /// An integer literal outside the signed 64-bit range.
    #[error("integer {text} at offset {offset} does not fit in 64 bits")]
    IntegerOverflow {
        /// The literal text
        text: String,
        /// Byte offset of the literal
        offset: usize,
    },

    /// A malformed escape sequence in a string literal.
    #[error("invalid escape sequence at offset {offset}")]
    InvalidEscape {
        /// Byte offset of the backslash
        offset: usize,
    },

    /// The payload is not valid UTF-8.
    #[error("payload is not valid UTF-8")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// A dictionary key that has no string form.
    #[error("unsupported dict key of type {found} at offset {offset}")]
    InvalidKey {
        /// Type of the key
        found: &'static str,
        /// Byte offset of the key
        offset: usize,
    },

    /// Non-whitespace data after the top-level value.
    #[error("trailing data at offset {offset}")]
    TrailingData {
        /// Byte offset of the first trailing character
        offset: usize,
    },

    /// Containers nested deeper than the codec allows.
    #[error("nesting exceeds the limit of {limit} levels")]
    TooDeep {
        /// The nesting limit
        limit: usize,
    },

    /// A protocol-native value with no registered class converter.
    #[error("no class converter registered for {kind:?} values")]
    NoConverter {
        /// The kind of value that could not be written
        kind: NativeKind,
    },

    /// A value the wire format cannot represent.
    #[error("unsupported value: {reason}")]
    Unsupported {
        /// Why the value cannot be written
        reason: String,
    },

    /// Failure reported by the JSON engine.
    #[cfg(feature = "json")]
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while binding a literal codec to a serializer.
///
/// These are construction-time failures; they are fatal for the serializer
/// being built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The codec is older than the minimum supported version.
    #[error("{codec} {found} is too old, {required} or newer is required")]
    VersionTooOld {
        /// Codec name
        codec: &'static str,
        /// The version the codec reported
        found: CodecVersion,
        /// The minimum supported version
        required: CodecVersion,
    },

    /// The codec could not be loaded or initialized.
    #[error("{codec} is unavailable: {reason}")]
    Unavailable {
        /// Codec name
        codec: String,
        /// Why it is unavailable
        reason: String,
    },
}
