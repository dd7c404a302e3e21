// Prompt Seeding Bootstrap
//
// One-time load of initial prompt records: every file in the prompts
// directory is stored under its filename stem, so `claude-sonnet-german.txt`
// becomes the prompt id `claude-sonnet-german`. Existing records with the
// same id are overwritten.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::domain::prompt::PromptStore;

pub async fn seed_from_dir(store: &dyn PromptStore, dir: &Path) -> Result<usize> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("reading prompt directory {}", dir.display()))?;

    let mut seeded = 0;
    for entry in entries {
        let entry = entry.context("reading prompt directory entry")?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let Some(id) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("reading prompt file {}", path.display()))?;
        store
            .put(id, &text)
            .await
            .with_context(|| format!("storing prompt '{}'", id))?;

        info!(id, "seeded prompt");
        seeded += 1;
    }

    Ok(seeded)
}
