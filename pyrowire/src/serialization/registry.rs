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

//! Serializer registry.
//!
//! The registry maps a Pyro5 protocol tag to the live serializer for that
//! wire format. Serializers are built lazily from registered factories, at
//! most once per tag, and then shared as `Arc<dyn Serializer>`.

use crate::codec::CodecError;
#[cfg(feature = "json")]
use crate::serialization::JsonSerializer;
use crate::serialization::{Serializer, SerializerConfig, SerpentSerializer};
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Builds the serializer for one protocol tag.
pub type SerializerFactory =
    Arc<dyn Fn() -> Result<Arc<dyn Serializer>, CodecError> + Send + Sync + 'static>;

/// Errors returned by [`SerializerRegistry::get_for`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No factory is registered for the requested tag.
    #[error("unsupported serializer id {serializer_id}")]
    UnsupportedSerializerId {
        /// The requested tag
        serializer_id: u16,
    },

    /// The factory for the requested tag failed.
    ///
    /// Nothing was published; a later request tries again.
    #[error("failed to initialize serializer {serializer_id}: {source}")]
    Initialization {
        /// The requested tag
        serializer_id: u16,
        /// Why construction failed
        #[source]
        source: CodecError,
    },

    /// The factory built a serializer announcing a different tag.
    #[error("serializer registered for id {requested} reports id {actual}")]
    IdMismatch {
        /// The requested tag
        requested: u16,
        /// The tag the constructed serializer reported
        actual: u16,
    },
}

impl RegistryError {
    /// Returns the tag that was requested.
    #[must_use]
    pub const fn serializer_id(&self) -> u16 {
        match self {
            Self::UnsupportedSerializerId { serializer_id }
            | Self::Initialization { serializer_id, .. } => *serializer_id,
            Self::IdMismatch { requested, .. } => *requested,
        }
    }
}

/// Thread-safe map from protocol tag to serializer.
///
/// Lookups of an already constructed serializer only take a read lock.
/// Construction is serialized by a separate mutex that is held only while a
/// factory runs, so each tag is built at most once even when many threads
/// ask for it at the same time. A failed construction publishes nothing.
///
/// # Examples
///
/// ```rust
/// use pyrowire::serialization::{SerializerRegistry, SerpentSerializer};
/// use std::sync::Arc;
///
/// let registry = SerializerRegistry::new();
/// registry.register_factory(1, || Ok(Arc::new(SerpentSerializer::default())));
///
/// let first = registry.get_for(1)?;
/// let second = registry.get_for(1)?;
/// assert!(Arc::ptr_eq(&first, &second));
/// assert!(registry.get_for(2).is_err());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct SerializerRegistry {
    instances: RwLock<HashMap<u16, Arc<dyn Serializer>>>,
    factories: RwLock<HashMap<u16, SerializerFactory>>,
    construction: Mutex<()>,
}

impl Default for SerializerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SerializerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut registered: Vec<u16> = self.factories.read().keys().copied().collect();
        registered.sort_unstable();
        let mut initialized: Vec<u16> = self.instances.read().keys().copied().collect();
        initialized.sort_unstable();
        f.debug_struct("SerializerRegistry")
            .field("registered", &registered)
            .field("initialized", &initialized)
            .finish()
    }
}

static GLOBAL: LazyLock<SerializerRegistry> = LazyLock::new(SerializerRegistry::with_builtin);

impl SerializerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
            factories: RwLock::new(HashMap::new()),
            construction: Mutex::new(()),
        }
    }

    /// Creates a registry with factories for the built-in wire formats.
    ///
    /// Tag 1 is serpent; tag 3 is JSON when the `json` feature is enabled.
    /// Both use the default [`SerializerConfig`].
    #[must_use]
    pub fn with_builtin() -> Self {
        let registry = Self::new();
        registry.register_factory(<SerpentSerializer>::SERIALIZER_ID, || {
            Ok(Arc::new(SerpentSerializer::new(SerializerConfig::default())))
        });
        #[cfg(feature = "json")]
        registry.register_factory(JsonSerializer::SERIALIZER_ID, || {
            Ok(Arc::new(JsonSerializer::with_config(SerializerConfig::default())))
        });
        registry
    }

    /// Returns the process-wide registry.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Registers the factory used to build the serializer for `serializer_id`.
    ///
    /// Replaces any earlier factory for the tag. A serializer that was already
    /// constructed for the tag stays in place.
    pub fn register_factory<F>(&self, serializer_id: u16, factory: F)
    where
        F: Fn() -> Result<Arc<dyn Serializer>, CodecError> + Send + Sync + 'static,
    {
        debug!(serializer_id, "registering serializer factory");
        self.factories.write().insert(serializer_id, Arc::new(factory));
    }

    /// Returns `true` if a serializer has been constructed for `serializer_id`.
    #[must_use]
    pub fn is_initialized(&self, serializer_id: u16) -> bool {
        self.instances.read().contains_key(&serializer_id)
    }

    /// Returns the serializer for `serializer_id`, constructing it on first use.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::UnsupportedSerializerId`] if no factory is registered
    /// - [`RegistryError::Initialization`] if the factory fails
    /// - [`RegistryError::IdMismatch`] if the constructed serializer reports
    ///   another tag
    pub fn get_for(&self, serializer_id: u16) -> Result<Arc<dyn Serializer>, RegistryError> {
        if let Some(serializer) = self.instances.read().get(&serializer_id) {
            return Ok(Arc::clone(serializer));
        }

        let factory = self
            .factories
            .read()
            .get(&serializer_id)
            .cloned()
            .ok_or(RegistryError::UnsupportedSerializerId { serializer_id })?;

        let _guard = self.construction.lock();
        if let Some(serializer) = self.instances.read().get(&serializer_id) {
            return Ok(Arc::clone(serializer));
        }

        debug!(serializer_id, "constructing serializer");
        let serializer = factory().map_err(|source| {
            error!(serializer_id, error = %source, "serializer construction failed");
            RegistryError::Initialization {
                serializer_id,
                source,
            }
        })?;

        let actual = serializer.serializer_id();
        if actual != serializer_id {
            warn!(
                requested = serializer_id,
                actual,
                "constructed serializer reports a different id"
            );
            return Err(RegistryError::IdMismatch {
                requested: serializer_id,
                actual,
            });
        }

        self.instances
            .write()
            .insert(serializer_id, Arc::clone(&serializer));
        info!(serializer_id, name = serializer.name(), "serializer initialized");
        Ok(serializer)
    }
}

/// Returns the serializer for `serializer_id` from the global registry.
///
/// # Errors
///
/// See [`SerializerRegistry::get_for`].
///
/// # Examples
///
/// ```rust
/// use pyrowire::serialization::{get_for, RegistryError};
///
/// let serializer = get_for(1).unwrap();
/// assert_eq!(serializer.name(), "serpent");
///
/// let error = get_for(9999).err().unwrap();
/// assert_eq!(error, RegistryError::UnsupportedSerializerId { serializer_id: 9999 });
/// ```
pub fn get_for(serializer_id: u16) -> Result<Arc<dyn Serializer>, RegistryError> {
    SerializerRegistry::global().get_for(serializer_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_builtin_tags() {
        let registry = SerializerRegistry::with_builtin();
        assert_eq!(registry.get_for(1).unwrap().name(), "serpent");
        #[cfg(feature = "json")]
        assert_eq!(registry.get_for(3).unwrap().name(), "json");
        assert!(registry.is_initialized(1));
        assert!(!registry.is_initialized(2));
    }

    #[test]
    fn test_unknown_tag_named_in_error() {
        let registry = SerializerRegistry::new();
        let error = registry.get_for(9999).err().unwrap();
        assert_eq!(error.serializer_id(), 9999);
        assert!(error.to_string().contains("9999"));
    }

    #[test]
    fn test_lookup_reuses_instance() {
        let built = Arc::new(AtomicUsize::new(0));
        let registry = SerializerRegistry::new();
        let counter = Arc::clone(&built);
        registry.register_factory(1, move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(SerpentSerializer::default()))
        });

        let first = registry.get_for(1).unwrap();
        let second = registry.get_for(1).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(built.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failed_construction_is_retried() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let registry = SerializerRegistry::new();
        let counter = Arc::clone(&attempts);
        registry.register_factory(1, move || {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                return Err(CodecError::Unavailable {
                    codec: "serpent".to_string(),
                    reason: "not installed".to_string(),
                });
            }
            Ok(Arc::new(SerpentSerializer::default()))
        });

        let error = registry.get_for(1).err().unwrap();
        assert!(matches!(error, RegistryError::Initialization { serializer_id: 1, .. }));
        assert!(!registry.is_initialized(1));

        assert!(registry.get_for(1).is_ok());
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_id_mismatch_not_published() {
        let registry = SerializerRegistry::new();
        registry.register_factory(7, || Ok(Arc::new(SerpentSerializer::default())));

        let error = registry.get_for(7).err().unwrap();
        assert_eq!(error, RegistryError::IdMismatch { requested: 7, actual: 1 });
        assert!(!registry.is_initialized(7));
    }

    #[test]
    fn test_debug_lists_tags() {
        let registry = SerializerRegistry::with_builtin();
        registry.get_for(1).unwrap();
        let debug = format!("{registry:?}");
        assert!(debug.contains("initialized: [1]"));
    }
}
