use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub model: ModelConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub sandbox: SandboxConfig,

    #[serde(default)]
    pub env: EnvConfig,

    /// Verbose mode - show verbose output including Docker logs (not stored in config file)
    #[serde(skip)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Chat model used for every completion
    #[serde(default = "default_model_name")]
    pub name: String,

    /// Token budget per request chunk
    #[serde(default = "default_chunk_tokens")]
    pub chunk_tokens: usize,

    /// Completion cap, leaving headroom under the model's context window
    #[serde(default = "default_completion_tokens")]
    pub completion_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: default_model_name(),
            chunk_tokens: default_chunk_tokens(),
            completion_tokens: default_completion_tokens(),
            temperature: default_temperature(),
        }
    }
}

fn default_model_name() -> String {
    "gpt-4o".to_string()
}

fn default_chunk_tokens() -> usize {
    3000
}

fn default_completion_tokens() -> u32 {
    1500
}

fn default_temperature() -> f64 {
    0.2
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.openai.com".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SandboxConfig {
    #[serde(default = "default_image")]
    pub image: String,

    #[serde(default = "default_tag")]
    pub tag: String,
}

impl SandboxConfig {
    /// Full image reference passed to the engine, e.g. `review-agent:latest`
    pub fn reference(&self) -> String {
        format!("{}:{}", self.image, self.tag)
    }
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            image: default_image(),
            tag: default_tag(),
        }
    }
}

fn default_image() -> String {
    "review-agent".to_string()
}

fn default_tag() -> String {
    "latest".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvConfig {
    /// Dotenv file loaded before reviewing and forwarded into the sandbox
    #[serde(default = "default_env_file")]
    pub file: String,

    /// Host variables forwarded when set (proxies by default)
    #[serde(default = "default_inherit")]
    pub inherit: Vec<String>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            file: default_env_file(),
            inherit: default_inherit(),
        }
    }
}

fn default_env_file() -> String {
    ".env".to_string()
}

fn default_inherit() -> Vec<String> {
    vec!["HTTP_PROXY".to_string(), "HTTPS_PROXY".to_string()]
}

impl Config {
    /// Load configuration with precedence:
    /// 1. CLI flags (applied later via with_verbose)
    /// 2. Environment variables
    /// 3. Local config (.review-agent.toml in the current directory)
    /// 4. Global config (~/.review-agent.toml)
    /// 5. Built-in defaults
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        // 1. Load global config
        if let Some(home) = home_dir() {
            let global_config = home.join(".review-agent.toml");
            if global_config.exists() {
                config = config.merge(Self::from_file(&global_config)?);
            }
        }

        // 2. Load local config
        let local_config = PathBuf::from(".review-agent.toml");
        if local_config.exists() {
            config = config.merge(Self::from_file(&local_config)?);
        }

        // 3. Apply environment variables
        Ok(config.merge_env())
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(mut self, other: Self) -> Self {
        if other.model.name != default_model_name() {
            self.model.name = other.model.name;
        }
        if other.model.chunk_tokens != default_chunk_tokens() {
            self.model.chunk_tokens = other.model.chunk_tokens;
        }
        if other.model.completion_tokens != default_completion_tokens() {
            self.model.completion_tokens = other.model.completion_tokens;
        }
        if (other.model.temperature - default_temperature()).abs() > f64::EPSILON {
            self.model.temperature = other.model.temperature;
        }

        if other.api.base_url != default_base_url() {
            self.api.base_url = other.api.base_url;
        }

        if other.sandbox.image != default_image() {
            self.sandbox.image = other.sandbox.image;
        }
        if other.sandbox.tag != default_tag() {
            self.sandbox.tag = other.sandbox.tag;
        }

        if other.env.file != default_env_file() {
            self.env.file = other.env.file;
        }
        if other.env.inherit != default_inherit() {
            self.env.inherit = other.env.inherit;
        }

        self
    }

    /// Apply environment variable overrides
    pub(crate) fn merge_env(mut self) -> Self {
        if let Ok(model) = std::env::var("REVIEW_AGENT_MODEL") {
            if !model.is_empty() {
                self.model.name = model;
            }
        }

        if let Ok(image) = std::env::var("REVIEW_AGENT_IMAGE") {
            if !image.is_empty() {
                match image.split_once(':') {
                    Some((name, tag)) => {
                        self.sandbox.image = name.to_string();
                        self.sandbox.tag = tag.to_string();
                    }
                    None => self.sandbox.image = image,
                }
            }
        }

        if let Ok(base_url) = std::env::var("OPENAI_BASE_URL") {
            if !base_url.is_empty() {
                self.api.base_url = base_url.trim_end_matches('/').to_string();
            }
        }

        self
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.model.name, "gpt-4o");
        assert_eq!(config.model.chunk_tokens, 3000);
        assert_eq!(config.model.completion_tokens, 1500);
        assert_eq!(config.api.base_url, "https://api.openai.com");
        assert_eq!(config.sandbox.reference(), "review-agent:latest");
        assert_eq!(config.env.file, ".env");
        assert!(config.env.inherit.contains(&"HTTP_PROXY".to_string()));
    }

    #[test]
    fn test_merge_overrides_changed_fields_only() {
        let base = Config::default();
        let overlay: Config = toml::from_str(
            r#"
            [model]
            name = "gpt-4.1"

            [sandbox]
            tag = "dev"
            "#,
        )
        .unwrap();

        let merged = base.merge(overlay);
        assert_eq!(merged.model.name, "gpt-4.1");
        assert_eq!(merged.model.chunk_tokens, 3000);
        assert_eq!(merged.sandbox.reference(), "review-agent:dev");
    }

    #[test]
    fn test_merge_later_layer_wins() {
        let global: Config = toml::from_str("[model]\nname = \"gpt-4.1\"").unwrap();
        let local: Config = toml::from_str("[model]\nname = \"gpt-4o-mini\"").unwrap();

        let merged = Config::default().merge(global).merge(local);
        assert_eq!(merged.model.name, "gpt-4o-mini");
    }

    #[test]
    fn test_from_file_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[model\nname = ").unwrap();

        let result = Config::from_file(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_unknown_section_is_ignored() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[something_else]\nkey = \"value\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.model.name, "gpt-4o");
    }

    #[test]
    #[serial_test::serial]
    fn test_merge_env_model_override() {
        std::env::set_var("REVIEW_AGENT_MODEL", "gpt-4o-mini");
        let config = Config::default().merge_env();
        std::env::remove_var("REVIEW_AGENT_MODEL");

        assert_eq!(config.model.name, "gpt-4o-mini");
    }

    #[test]
    #[serial_test::serial]
    fn test_merge_env_image_with_tag() {
        std::env::set_var("REVIEW_AGENT_IMAGE", "my-reviewer:nightly");
        let config = Config::default().merge_env();
        std::env::remove_var("REVIEW_AGENT_IMAGE");

        assert_eq!(config.sandbox.image, "my-reviewer");
        assert_eq!(config.sandbox.tag, "nightly");
    }

    #[test]
    #[serial_test::serial]
    fn test_merge_env_base_url_trims_trailing_slash() {
        std::env::set_var("OPENAI_BASE_URL", "http://localhost:8080/");
        let config = Config::default().merge_env();
        std::env::remove_var("OPENAI_BASE_URL");

        assert_eq!(config.api.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_with_verbose() {
        let config = Config::default().with_verbose(true);
        assert!(config.verbose);
    }
}
