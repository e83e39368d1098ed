use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::GreeterError;
use crate::greeter::GREETING;
use crate::template::DEFAULT_TEMPLATE;

#[derive(Debug, Clone, Deserialize)]
pub struct GreeterConfig {
    #[serde(default = "default_greeting")]
    pub greeting: String,
    #[serde(default = "default_template")]
    pub template: String,
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for GreeterConfig {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            template: default_template(),
            log: LogConfig::default(),
        }
    }
}

impl GreeterConfig {
    pub fn validate(&self) -> Result<(), GreeterError> {
        if self.greeting.is_empty() {
            return Err(GreeterError::Config("greeting must not be empty".into()));
        }
        // 问候语必须是单独一行
        if self.greeting.contains('\n') {
            return Err(GreeterError::Config(
                "greeting must not contain a newline".into(),
            ));
        }
        if self.template.trim().is_empty() {
            return Err(GreeterError::Config("template must not be empty".into()));
        }
        if self.log.level.parse::<tracing::Level>().is_err() {
            return Err(GreeterError::Config(format!(
                "unknown log level '{}'",
                self.log.level
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_greeting() -> String {
    GREETING.to_string()
}

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// 解析配置文本：先尝试 JSON，再尝试 YAML
pub fn parse_config(content: &str) -> Result<GreeterConfig, GreeterError> {
    let config: GreeterConfig = match serde_json::from_str(content) {
        Ok(c) => c,
        Err(json_err) => serde_yml::from_str(content).map_err(|yaml_err| {
            GreeterError::Config(format!(
                "not valid JSON ({json_err}) or YAML ({yaml_err})"
            ))
        })?,
    };
    config.validate()?;
    Ok(config)
}

pub fn load_config(path: impl AsRef<Path>) -> Result<GreeterConfig, GreeterError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let config = parse_config(&content)
        .map_err(|e| GreeterError::Config(format!("{}: {e}", path.display())))?;
    debug!(path = %path.display(), "config loaded");
    Ok(config)
}
