//! `[editor]` and `[theme]` constraints.

use crate::schema::SplitShellConfig;

use super::helpers::Violations;

fn is_plain_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_alphanumeric() || c == '_')
}

pub(crate) fn validate_editor(v: &mut Violations, config: &SplitShellConfig) {
    for keyword in &config.editor.keywords {
        v.check(
            is_plain_word(keyword),
            "editor.keywords",
            format_args!("'{keyword}' is not a plain word"),
        );
    }
    v.non_empty("theme.storage_key", &config.theme.storage_key);
    v.non_empty("theme.default_theme", &config.theme.default_theme);
    v.non_empty("theme.attribute", &config.theme.attribute);
}
