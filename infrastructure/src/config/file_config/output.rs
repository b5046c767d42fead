//! How results are rendered (`[output]` section)
//!
//! ```toml
//! [output]
//! format = "json"   # "text" (default) prints the result card
//! color = false
//! ```

use hike_domain::OutputFormat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Result rendering; `--output` overrides it
    pub format: Option<OutputFormat>,
    /// ANSI colors on the stage screens and the result card
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl FileOutputConfig {
    /// Format in effect when neither the file nor the CLI chose one.
    pub fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    /// JSON reports are meant for pipes and never carry color codes.
    pub fn use_color(&self) -> bool {
        self.color && self.format() == OutputFormat::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::file_config::FileConfig;

    #[test]
    fn test_json_reports_disable_color() {
        let config: FileConfig = toml::from_str(
            r#"
[output]
format = "json"
"#,
        )
        .unwrap();
        assert_eq!(config.output.format(), OutputFormat::Json);
        assert!(config.output.color);
        assert!(!config.output.use_color());
    }

    #[test]
    fn test_defaults_to_colored_result_card() {
        let output = FileOutputConfig::default();
        assert_eq!(output.format(), OutputFormat::Text);
        assert!(output.use_color());
    }

    #[test]
    fn test_color_can_be_turned_off() {
        let config: FileConfig = toml::from_str("[output]\ncolor = false\n").unwrap();
        assert!(!config.output.use_color());
    }
}
