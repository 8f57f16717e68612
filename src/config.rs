use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub workspace_dir: String,
    pub language: String,
    pub editor: String,
    #[serde(default)]
    pub author: String,
    /// Per-generator settings keyed by language slug.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub languages: BTreeMap<String, LanguageConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LanguageConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workspace_dir: "~/leetcode".to_string(),
            language: "rust".to_string(),
            editor: "vim".to_string(),
            author: String::new(),
            languages: BTreeMap::new(),
        }
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Could not find home directory")
}

impl Config {
    pub fn config_dir() -> Result<PathBuf> {
        Ok(home_dir()?.join(".leetgen"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn load() -> Result<Option<Config>> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        Self::parse(&contents).map(Some)
    }

    pub fn parse(contents: &str) -> Result<Config> {
        toml::from_str(contents).with_context(|| "Failed to parse config.toml")
    }

    pub fn save(&self) -> Result<PathBuf> {
        let dir = Self::config_dir()?;
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config dir {}", dir.display()))?;
        let path = Self::config_path()?;
        let contents =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(path)
    }

    /// Project root with a leading `~` expanded.
    pub fn expanded_workspace(&self) -> Result<PathBuf> {
        if self.workspace_dir == "~" {
            return home_dir();
        }
        match self.workspace_dir.strip_prefix("~/") {
            Some(rest) => Ok(home_dir()?.join(rest)),
            None => Ok(PathBuf::from(&self.workspace_dir)),
        }
    }

    /// Output directory overrides keyed by language slug.
    pub fn out_dirs(&self) -> BTreeMap<String, String> {
        self.languages
            .iter()
            .filter_map(|(slug, lang)| Some((slug.clone(), lang.out_dir.clone()?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_config() {
        let config = Config::parse(
            r#"
workspace_dir = "/tmp/lc"
language = "python3"
editor = "nvim"
"#,
        )
        .unwrap();
        assert_eq!(config.language, "python3");
        assert_eq!(config.author, "");
        assert!(config.out_dirs().is_empty());
        assert_eq!(config.expanded_workspace().unwrap(), PathBuf::from("/tmp/lc"));
    }

    #[test]
    fn parses_language_overrides() {
        let config = Config::parse(
            r#"
workspace_dir = "~/lc"
language = "go"
editor = "code"
author = "alice"

[languages.golang]
out_dir = "go-solutions"

[languages.rust]
"#,
        )
        .unwrap();
        let out_dirs = config.out_dirs();
        assert_eq!(out_dirs.len(), 1);
        assert_eq!(out_dirs["golang"], "go-solutions");
    }

    #[test]
    fn expands_home() {
        let config = Config {
            workspace_dir: "~/leetcode".into(),
            ..Default::default()
        };
        let home = dirs::home_dir().unwrap();
        assert_eq!(config.expanded_workspace().unwrap(), home.join("leetcode"));
    }

    #[test]
    fn serializes_back() {
        let mut config = Config::default();
        config.languages.insert(
            "golang".into(),
            LanguageConfig {
                out_dir: Some("go".into()),
            },
        );
        let text = toml::to_string_pretty(&config).unwrap();
        let back = Config::parse(&text).unwrap();
        assert_eq!(back.out_dirs()["golang"], "go");
        assert_eq!(back.workspace_dir, "~/leetcode");
    }

    #[test]
    fn rejects_invalid_toml() {
        assert!(Config::parse("workspace_dir = ").is_err());
    }
}
