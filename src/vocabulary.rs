use log::debug;
use std::collections::HashSet;
use std::path::Path;
use tokio::fs;

use crate::error::{FinderError, InputError};

/// Allow-list of ingredient names used to check free-text input before it
/// reaches the pantry. An empty vocabulary accepts any non-blank name.
#[derive(Debug, Clone, Default)]
pub struct IngredientVocabulary {
    names: HashSet<String>,
}

impl IngredientVocabulary {
    /// Read one name per line. Blank lines and `#` comments are skipped.
    pub async fn load(path: &Path) -> Result<Self, FinderError> {
        let content = fs::read_to_string(path).await?;
        let vocabulary = Self::parse(&content);
        debug!(
            "Loaded {} ingredient names from {}",
            vocabulary.len(),
            path.display()
        );
        Ok(vocabulary)
    }

    pub fn parse(content: &str) -> Self {
        let names = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .collect();
        IngredientVocabulary { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name.trim().to_lowercase())
    }

    /// Trimmed name if it is acceptable
    pub fn check(&self, raw: &str) -> Result<String, InputError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(InputError::EmptyName);
        }
        if !self.is_empty() && !self.contains(name) {
            return Err(InputError::UnknownIngredient(name.to_string()));
        }
        Ok(name.to_string())
    }
}
