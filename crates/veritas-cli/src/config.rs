use anyhow::{bail, Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;

/// Name of the configuration file searched for upward from the working directory
pub const CONFIG_FILE_NAME: &str = "veritas.toml";

/// The veritas configuration file structure (veritas.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VeritasConfig {
    /// Default output format when --format is not given
    pub format: Option<OutputFormat>,

    /// Named requirements, referenced on the command line as @name
    pub requirements: IndexMap<String, String>,
}

impl VeritasConfig {
    /// Load configuration from veritas.toml, searching upward from the given directory
    pub fn load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);

            if config_path.exists() {
                let config = Self::load_file(&config_path)?;
                return Ok(Some((config, config_path)));
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load configuration from an explicit path
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: VeritasConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Resolve a requirement argument: `@name` is looked up in [requirements],
    /// anything else is returned unchanged
    pub fn resolve_requirement<'a>(&'a self, argument: &'a str) -> Result<&'a str> {
        let Some(name) = argument.strip_prefix('@') else {
            return Ok(argument);
        };

        match self.requirements.get(name) {
            Some(requirement) => {
                log::debug!("Resolved @{} to {}", name, requirement);
                Ok(requirement.as_str())
            }
            None => bail!("Unknown requirement \"@{}\" (not defined in [requirements])", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_empty_config() {
        let config: VeritasConfig = toml::from_str("").unwrap();
        assert!(config.format.is_none());
        assert!(config.requirements.is_empty());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
format = "json"

[requirements]
php = ">=8.1, <9"
node = "^20"
"#;
        let config: VeritasConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.format, Some(OutputFormat::Json));
        assert_eq!(config.requirements.get("php"), Some(&">=8.1, <9".to_string()));
        let names: Vec<&String> = config.requirements.keys().collect();
        assert_eq!(names, vec!["php", "node"]);
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        assert!(toml::from_str::<VeritasConfig>("format = \"xml\"").is_err());
    }

    #[test]
    fn test_resolve_requirement() {
        let mut config = VeritasConfig::default();
        config.requirements.insert("php".to_string(), ">=8.1".to_string());

        assert_eq!(config.resolve_requirement("^1.2").unwrap(), "^1.2");
        assert_eq!(config.resolve_requirement("@php").unwrap(), ">=8.1");
        assert!(config.resolve_requirement("@ruby").is_err());
    }

    #[test]
    fn test_load_searches_upward() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[requirements]\nphp = \"8\"\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let (config, path) = VeritasConfig::load(&nested).unwrap().unwrap();
        assert_eq!(path, dir.path().join(CONFIG_FILE_NAME));
        assert_eq!(config.resolve_requirement("@php").unwrap(), "8");
    }

    #[test]
    fn test_load_file_reports_parse_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "requirements = 3").unwrap();

        let err = VeritasConfig::load_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
