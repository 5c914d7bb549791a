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

//! Serpent, the Python-literal wire format.
//!
//! Payloads are a header comment followed by a single Python literal
//! expression: `None`, `True`/`False`, numbers, quoted strings, and list,
//! tuple, dict and set displays. Byte blobs and NaN have no literal form and
//! travel as the dictionaries described in [`materialize`](super::materialize).
//!
//! # Examples
//!
//! ```rust
//! use pyrowire::codec::{EncodeOptions, LiteralCodec, SerpentCodec};
//! use pyrowire::value::Value;
//!
//! let codec = SerpentCodec::new();
//! let bytes = codec.encode(&Value::List(vec![Value::from(1), Value::None]), &EncodeOptions::default())?;
//! assert_eq!(bytes, b"# serpent utf-8 python3.2\n[1,None]");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod parser;
mod writer;

use super::{ClassConverter, ClassConverters, CodecVersion, EncodeOptions, LiteralCodec, LiteralError};
use crate::value::{NativeKind, Value};
use parser::Parser;
use writer::Writer;

/// The header line every serpent payload starts with.
pub const HEADER: &str = "# serpent utf-8 python3.2\n";

/// Maximum container nesting accepted when writing or parsing.
pub const MAX_DEPTH: usize = 512;

/// The built-in serpent engine.
#[derive(Debug, Clone, Default)]
pub struct SerpentCodec {
    converters: ClassConverters,
}

impl SerpentCodec {
    /// The serpent release this engine is compatible with.
    pub const VERSION: CodecVersion = CodecVersion::new(1, 41, 0);

    /// Creates a codec with no class converters registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl LiteralCodec for SerpentCodec {
    fn name(&self) -> &'static str {
        "serpent"
    }

    fn version(&self) -> CodecVersion {
        Self::VERSION
    }

    fn register_class_converter(&mut self, kind: NativeKind, converter: ClassConverter) {
        self.converters.register(kind, converter);
    }

    fn encode(&self, value: &Value, options: &EncodeOptions) -> Result<Vec<u8>, LiteralError> {
        let mut writer = Writer::new(options, &self.converters, MAX_DEPTH);
        writer.write(value, 0)?;
        Ok(writer.finish())
    }

    fn parse(&self, bytes: &[u8]) -> Result<Value, LiteralError> {
        let text = std::str::from_utf8(bytes)?;
        Parser::new(text, MAX_DEPTH).parse_document()
    }
}
