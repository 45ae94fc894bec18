//! Output configuration

use serde::Deserialize;

/// Controls how the snapshot is written to stdout
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

fn default_pretty() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_defaults() {
        assert!(OutputConfig::default().pretty);
    }

    #[test]
    fn test_missing_field_uses_default() {
        let config: OutputConfig = serde_json::from_str("{}").unwrap();
        assert!(config.pretty);
    }
}
