//! Seed data
//!
//! Pages are built from a JSON document of sections and documents per
//! framework. The built-in set is compiled into the binary; `--data` or
//! `data_path` can point at a replacement file of the same shape.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::domain::{Document, Framework, Section};
use crate::model::{PageConfig, PageModel};

const BUILTIN_SEED: &str = include_str!("../data/seed.json");

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    pub pages: Vec<PageSeed>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSeed {
    pub framework: Framework,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub documents: Vec<Document>,
}

impl SeedData {
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_SEED).context("Built-in seed data is invalid")
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_json(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("Invalid seed file {}", path.display()))
    }

    pub fn page(&self, framework: Framework) -> Option<&PageSeed> {
        self.pages.iter().find(|p| p.framework == framework)
    }

    /// Build one page per framework, in the order the seed lists them.
    ///
    /// A framework listed twice keeps its first entry.
    pub fn into_pages(self, config: &Config) -> Vec<PageModel> {
        let mut seen = Vec::new();
        let mut pages = Vec::new();

        for seed in self.pages {
            if seen.contains(&seed.framework) {
                tracing::warn!(framework = seed.framework.as_str(), "duplicate page in seed data");
                continue;
            }
            seen.push(seed.framework);

            let mut page_config = PageConfig::for_framework(seed.framework);
            if let Some(mode) = config.initial_view_mode {
                page_config.initial_view_mode = mode;
            }
            let mut page_config = page_config.with_overrides(&config.page_overrides(seed.framework));
            if let Some(mode) = config.forced_view_mode {
                page_config.initial_view_mode = mode;
            }

            tracing::debug!(
                framework = seed.framework.as_str(),
                sections = seed.sections.len(),
                documents = seed.documents.len(),
                "building page"
            );
            let page = PageModel::new(page_config, &seed.sections, seed.documents)
                .with_sort(config.default_sort)
                .with_prune_selection(config.prune_selection_on_navigate);
            pages.push(page);
        }

        pages
    }
}
