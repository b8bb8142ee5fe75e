//! `[layout]` constraints: ratio defaults, step sizes, separator width.

use crate::schema::LayoutConfig;

use super::helpers::Violations;

pub(crate) fn validate_layout(v: &mut Violations, layout: &LayoutConfig) {
    v.bounded("layout.default_min_ratio", layout.default_min_ratio, 0.0, 1.0);
    v.bounded("layout.default_max_ratio", layout.default_max_ratio, 0.0, 1.0);
    v.check(
        layout.default_min_ratio <= layout.default_max_ratio,
        "layout.default_min_ratio",
        format_args!(
            "{} exceeds layout.default_max_ratio ({})",
            layout.default_min_ratio, layout.default_max_ratio
        ),
    );
    v.bounded("layout.small_step", layout.small_step, 0.001, 0.5);
    v.bounded("layout.large_step", layout.large_step, 0.001, 0.5);
    v.bounded("layout.drag_epsilon", layout.drag_epsilon, 0.0, 0.05);
    v.bounded("layout.separator_width", layout.separator_width, 0, 32);
    v.non_empty("layout.storage_key_prefix", &layout.storage_key_prefix);
}
