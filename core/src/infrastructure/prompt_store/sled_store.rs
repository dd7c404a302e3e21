// Sled Prompt Store
//
// Embedded key-value store standing in for a managed prompt table.
// Keys and values are UTF-8 strings; writes are independent atomic puts.

use std::path::Path;

use async_trait::async_trait;

use crate::domain::prompt::{Prompt, PromptStore, PromptStoreError};

pub struct SledPromptStore {
    db: sled::Db,
}

impl SledPromptStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PromptStoreError> {
        let db = sled::open(path.as_ref())
            .map_err(|e| PromptStoreError::Io(format!("open {}: {}", path.as_ref().display(), e)))?;
        Ok(Self { db })
    }

    fn decode(key: &[u8], value: &[u8]) -> Result<Prompt, PromptStoreError> {
        let id = String::from_utf8(key.to_vec())
            .map_err(|_| PromptStoreError::Corrupt(String::from_utf8_lossy(key).into_owned()))?;
        let text = String::from_utf8(value.to_vec())
            .map_err(|_| PromptStoreError::Corrupt(id.clone()))?;
        Ok(Prompt { id, text })
    }
}

#[async_trait]
impl PromptStore for SledPromptStore {
    async fn get(&self, id: &str) -> Result<Option<String>, PromptStoreError> {
        let value = self
            .db
            .get(id)
            .map_err(|e| PromptStoreError::Io(e.to_string()))?;

        value
            .map(|bytes| {
                String::from_utf8(bytes.to_vec())
                    .map_err(|_| PromptStoreError::Corrupt(id.to_string()))
            })
            .transpose()
    }

    async fn put(&self, id: &str, text: &str) -> Result<(), PromptStoreError> {
        self.db
            .insert(id, text.as_bytes())
            .map_err(|e| PromptStoreError::Io(e.to_string()))?;
        self.db
            .flush_async()
            .await
            .map_err(|e| PromptStoreError::Io(e.to_string()))?;
        Ok(())
    }

    async fn scan(&self) -> Result<Vec<Prompt>, PromptStoreError> {
        let mut prompts = Vec::new();
        for entry in self.db.iter() {
            let (key, value) = entry.map_err(|e| PromptStoreError::Io(e.to_string()))?;
            prompts.push(Self::decode(&key, &value)?);
        }
        Ok(prompts)
    }
}
