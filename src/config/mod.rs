use crate::core::path::{config_file, CONFIG_FILE_NAME};
use crate::core::{DebarError, DebarResult};
use crate::di::ConfigProvider;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Mirror location and the slice of it Debar indexes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoConfig {
    /// Repository base URL (the directory holding `dists/` and `pool/`)
    pub url: String,

    /// Components to index, in priority order
    ///
    /// When a package exists in several components, the one listed first wins.
    pub components: Vec<String>,

    /// Target architecture (e.g. amd64, arm64)
    pub arch: String,

    /// Release codename (e.g. focal, bookworm)
    pub release_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub repo: RepoConfig,

    /// Packages that are never resolved, fetched, or shown in a graph
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
}

fn default_components() -> Vec<String> {
    ["main", "restricted", "universe", "multiverse"]
        .iter()
        .map(|c| c.to_string())
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repo: RepoConfig {
                url: "https://mirrors.tuna.tsinghua.edu.cn/ubuntu/".to_string(),
                components: default_components(),
                arch: "amd64".to_string(),
                release_name: "focal".to_string(),
            },
            exclude: Vec::new(),
        }
    }
}

impl Config {
    /// Load config.yaml from a work directory
    pub fn load(root: &Path) -> DebarResult<Self> {
        let config_path = config_file(root);

        if !config_path.exists() {
            return Err(DebarError::Config(format!(
                "{} not found in {}. The work directory is not initialized, run `debar init` first.",
                CONFIG_FILE_NAME,
                root.display()
            )));
        }

        let content = fs::read_to_string(&config_path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate a config document
    pub fn from_yaml(content: &str) -> DebarResult<Self> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| DebarError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config.yaml into a work directory
    pub fn save(&self, root: &Path) -> DebarResult<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| DebarError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(config_file(root), content)?;
        Ok(())
    }

    /// Check that every setting needed to build URLs is present
    pub fn validate(&self) -> DebarResult<()> {
        if self.repo.url.trim().is_empty() {
            return Err(DebarError::Config("repo.url must not be empty".to_string()));
        }
        if self.repo.arch.trim().is_empty() {
            return Err(DebarError::Config("repo.arch must not be empty".to_string()));
        }
        if self.repo.release_name.trim().is_empty() {
            return Err(DebarError::Config(
                "repo.release_name must not be empty".to_string(),
            ));
        }
        if self.repo.components.is_empty() {
            return Err(DebarError::Config(
                "repo.components must list at least one component".to_string(),
            ));
        }
        if let Some(bad) = self
            .repo
            .components
            .iter()
            .find(|c| c.is_empty() || c.contains('/'))
        {
            return Err(DebarError::Config(format!(
                "Invalid component name '{}'",
                bad
            )));
        }
        Ok(())
    }
}

// Implement ConfigProvider trait
impl ConfigProvider for Config {
    fn repo_url(&self) -> &str {
        &self.repo.url
    }

    fn release_name(&self) -> &str {
        &self.repo.release_name
    }

    fn arch(&self) -> &str {
        &self.repo.arch
    }

    fn components(&self) -> &[String] {
        &self.repo.components
    }

    fn exclusions(&self) -> &[String] {
        &self.exclude
    }
}
