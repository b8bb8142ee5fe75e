//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Splitshell Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[layout]
# default_min_ratio = 0.1       # 0.0-1.0, used when a panel declares no minimum
# default_max_ratio = 0.8       # 0.0-1.0, used when a panel declares no maximum
# small_step = 0.01             # arrow key step
# large_step = 0.1              # shift+arrow key step
# drag_epsilon = 0.001          # ignore drags smaller than this ratio change
# separator_width = 4           # 0-32 px
# keyboard_policy = "symmetric" # or "asymmetric"
# storage_key_prefix = "split-layout:"

[theme]
# default_theme = "light"
# storage_key = "theme"
# attribute = "data-theme"

[editor]
# keywords = ["public", "class", "void", "int", "string", "if", "else", "for", "while", "return"]
# highlight_color = "blue"

[logging]
# level = "info"                # trace, debug, info, warn, error
"##
    .to_string()
}
