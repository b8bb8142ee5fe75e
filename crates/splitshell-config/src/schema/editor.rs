//! Editor highlighter configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Words highlighted when they appear as whole words.
    pub keywords: Vec<String>,
    /// CSS color used for highlighted keywords.
    pub highlight_color: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            keywords: [
                "public", "class", "void", "int", "string", "if", "else", "for", "while", "return",
            ]
            .iter()
            .map(|k| k.to_string())
            .collect(),
            highlight_color: "blue".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_config_partial_toml() {
        let config: EditorConfig = toml::from_str(r#"keywords = ["fn", "let"]"#).unwrap();
        assert_eq!(config.keywords, vec!["fn", "let"]);
        assert_eq!(config.highlight_color, "blue");
    }
}
