//! Console configuration.

use serde::Deserialize;

/// Prompt and startup behaviour of the console.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleConfig {
    /// Prompt shown before every line (default: "hookshell # ").
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Command lines executed, in order, before the interactive loop starts.
    #[serde(default)]
    pub startup_commands: Vec<String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            startup_commands: Vec::new(),
        }
    }
}

fn default_prompt() -> String {
    "hookshell # ".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_correct() {
        let config = ConsoleConfig::default();
        assert_eq!(config.prompt, "hookshell # ");
        assert!(config.startup_commands.is_empty());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: ConsoleConfig = toml::from_str(r#"startup_commands = ["env"]"#).unwrap();
        assert_eq!(config.prompt, "hookshell # ");
        assert_eq!(config.startup_commands, vec!["env".to_string()]);
    }
}
