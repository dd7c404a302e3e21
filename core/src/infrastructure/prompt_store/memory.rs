// In-Memory Prompt Store
//
// HashMap-backed store for unit tests and ephemeral runs. Nothing
// survives a restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::prompt::{Prompt, PromptStore, PromptStoreError};

pub struct MemoryPromptStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryPromptStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryPromptStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PromptStore for MemoryPromptStore {
    async fn get(&self, id: &str) -> Result<Option<String>, PromptStoreError> {
        Ok(self.entries.read().await.get(id).cloned())
    }

    async fn put(&self, id: &str, text: &str) -> Result<(), PromptStoreError> {
        self.entries
            .write()
            .await
            .insert(id.to_string(), text.to_string());
        Ok(())
    }

    async fn scan(&self) -> Result<Vec<Prompt>, PromptStoreError> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .map(|(id, text)| Prompt {
                id: id.clone(),
                text: text.clone(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_then_get_round_trips() {
        let store = MemoryPromptStore::new();
        store.put("claude-sonnet-german", "Rate it.").await.unwrap();

        assert_eq!(
            store.get("claude-sonnet-german").await.unwrap().as_deref(),
            Some("Rate it.")
        );
        assert_eq!(store.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn put_overwrites_in_place() {
        let store = MemoryPromptStore::new();
        store.put("k", "old").await.unwrap();
        store.put("k", "new").await.unwrap();

        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("new"));
        assert_eq!(store.scan().await.unwrap().len(), 1);
    }
}
