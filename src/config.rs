use std::{
    collections::{BTreeSet, HashMap},
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".lingorc.json";

/// Language tags and mapping entries must look like locale tags
/// (`en`, `zh-CN`, `pt_BR`); anything else in the config is a typo.
const LANGUAGE_TAG_PATTERN: &str = r"^[A-Za-z][A-Za-z0-9]*([_-][A-Za-z0-9]+)*$";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Root of the static translation tree (one folder per language).
    #[serde(default = "default_translations_root")]
    pub translations_root: String,
    /// Language used when no viewer is known or nothing else resolves.
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Alias language -> canonical language (many-to-one).
    #[serde(default)]
    pub language_mappings: HashMap<String, String>,
    /// Content ids that must never be translated, whatever the catalog says.
    #[serde(default)]
    pub disabled_ids: BTreeSet<String>,
    /// Root of the bundled default documents used by `extract`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundled_root: Option<String>,
}

fn default_translations_root() -> String {
    "./translations".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translations_root: default_translations_root(),
            default_language: default_language(),
            language_mappings: HashMap::new(),
            disabled_ids: BTreeSet::new(),
            bundled_root: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error when the default language or any mapping entry is
    /// not a plausible language tag.
    pub fn validate(&self) -> Result<()> {
        let tag = Regex::new(LANGUAGE_TAG_PATTERN).expect("pattern is valid");

        if !tag.is_match(&self.default_language) {
            anyhow::bail!("Invalid 'defaultLanguage': \"{}\"", self.default_language);
        }

        for (alias, canonical) in &self.language_mappings {
            if !tag.is_match(alias) || !tag.is_match(canonical) {
                anyhow::bail!(
                    "Invalid entry in 'languageMappings': \"{}\" -> \"{}\"",
                    alias,
                    canonical
                );
            }
        }

        Ok(())
    }

    pub fn translations_root(&self) -> PathBuf {
        PathBuf::from(&self.translations_root)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
