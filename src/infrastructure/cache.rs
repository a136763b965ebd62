//! Process-wide reference schema, built once on first use

use crate::error::SchemaError;
use crate::infrastructure::repositories::{SchemaSource, build_schema};
use crate::types::ConfigSchema;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Lazily built, shared, read-only schema
///
/// The first `get_or_load` builds the schema while holding the lock, so
/// concurrent first callers never build twice. Later calls hand out the
/// same `Arc`.
#[derive(Default)]
pub struct SchemaCache {
    slot: Mutex<Option<Arc<ConfigSchema>>>,
}

impl SchemaCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache that already holds a schema
    pub fn with_schema(schema: ConfigSchema) -> Self {
        Self {
            slot: Mutex::new(Some(Arc::new(schema))),
        }
    }

    pub async fn get_or_load(
        &self,
        source: &dyn SchemaSource,
    ) -> Result<Arc<ConfigSchema>, SchemaError> {
        let mut slot = self.slot.lock().await;
        if let Some(schema) = slot.as_ref() {
            log::trace!("Schema cache hit");
            return Ok(Arc::clone(schema));
        }

        log::debug!("Schema cache miss, building reference schema");
        let schema = Arc::new(build_schema(source).await?);
        *slot = Some(Arc::clone(&schema));
        Ok(schema)
    }

    /// Cached schema, if it was loaded already
    pub async fn get(&self) -> Option<Arc<ConfigSchema>> {
        self.slot.lock().await.clone()
    }

    /// Drop the cached schema; the next access rebuilds it
    pub async fn reset(&self) {
        *self.slot.lock().await = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repositories::InMemorySchemaSource;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSource {
        loads: AtomicUsize,
    }

    #[async_trait]
    impl SchemaSource for CountingSource {
        async fn load_reference(&self) -> Result<String, SchemaError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok("[System]\nnValue = 1\n".to_string())
        }
    }

    #[tokio::test]
    async fn loads_once_and_shares() {
        let cache = SchemaCache::new();
        let source = CountingSource {
            loads: AtomicUsize::new(0),
        };

        let first = cache.get_or_load(&source).await.unwrap();
        let second = cache.get_or_load(&source).await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(source.loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn reset_forces_rebuild() {
        let cache = SchemaCache::new();
        let source = CountingSource {
            loads: AtomicUsize::new(0),
        };

        cache.get_or_load(&source).await.unwrap();
        cache.reset().await;
        assert!(cache.get().await.is_none());

        cache.get_or_load(&source).await.unwrap();
        assert_eq!(source.loads.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn failed_load_leaves_cache_empty() {
        let cache = SchemaCache::new();
        let broken = InMemorySchemaSource::new("");

        assert!(cache.get_or_load(&broken).await.is_err());
        assert!(cache.get().await.is_none());
    }

    #[tokio::test]
    async fn preloaded_cache_skips_source() {
        let cache = SchemaCache::with_schema(ConfigSchema::new());
        let source = CountingSource {
            loads: AtomicUsize::new(0),
        };

        cache.get_or_load(&source).await.unwrap();
        assert_eq!(source.loads.load(Ordering::SeqCst), 0);
    }
}
