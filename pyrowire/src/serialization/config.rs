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

//! Configuration types for serializers.

use crate::codec::EncodeOptions;

/// Configuration shared by the concrete serializers.
///
/// Neither option changes what a payload means; they only affect how it is
/// laid out on the wire.
///
/// # Examples
///
/// ```rust
/// use pyrowire::serialization::SerializerConfig;
///
/// // Use default configuration
/// let config = SerializerConfig::default();
/// assert!(!config.indent_output);
/// assert!(config.use_set_literals);
///
/// // Customize configuration
/// let config = SerializerConfig::new()
///     .with_indent_output(true)
///     .with_set_literals(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SerializerConfig {
    /// Pretty-print payloads.
    ///
    /// Useful when inspecting traffic by hand. Produces larger payloads.
    ///
    /// Default: false
    pub indent_output: bool,

    /// Write sets with set display syntax.
    ///
    /// Peers that predate set literals need this off; sets are then written
    /// as tuples.
    ///
    /// Default: true
    pub use_set_literals: bool,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            indent_output: false,
            use_set_literals: true,
        }
    }
}

impl SerializerConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether payloads are pretty-printed.
    #[must_use]
    pub fn with_indent_output(mut self, indent: bool) -> Self {
        self.indent_output = indent;
        self
    }

    /// Sets whether sets are written with set display syntax.
    #[must_use]
    pub fn with_set_literals(mut self, enabled: bool) -> Self {
        self.use_set_literals = enabled;
        self
    }

    pub(crate) fn encode_options(&self) -> EncodeOptions {
        EncodeOptions {
            indent: self.indent_output,
            set_literals: self.use_set_literals,
        }
    }
}
