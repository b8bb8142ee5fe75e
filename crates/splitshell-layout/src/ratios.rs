//! Ratio arithmetic: normalization under bounds, drag and keyboard updates.
//!
//! Everything here is pure. The engine owns the ratio vector and calls in
//! with the panel bounds and the hidden mask.

use splitshell_config::KeyboardPolicy;

use crate::panel::ResolvedPanel;

/// Slack allowed when comparing ratios against bounds.
pub const TOLERANCE: f64 = 1e-9;

/// `1/n` for each of `n` panels.
pub fn equal_split(n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    vec![1.0 / n as f64; n]
}

/// Ratios as rendered: hidden panels get 0, visible panels are clamped to
/// their bounds and redistributed to sum to 1.
///
/// When the visible bounds admit a solution (`sum(min) <= 1 <= sum(max)`)
/// every visible result lies within its bounds. Otherwise the clamped
/// values are scaled proportionally and bounds may be exceeded.
pub fn normalize(ratios: &[f64], panels: &[ResolvedPanel], hidden: &[bool]) -> Vec<f64> {
    let n = ratios.len();
    let mut out = vec![0.0; n];
    let visible: Vec<usize> = (0..n).filter(|&i| !hidden[i]).collect();
    if visible.is_empty() {
        return out;
    }

    let clamped: Vec<f64> = (0..n)
        .map(|i| {
            if hidden[i] {
                0.0
            } else {
                panels[i].clamp(sanitize(ratios[i]))
            }
        })
        .collect();
    let total: f64 = visible.iter().map(|&i| clamped[i]).sum();

    if total <= 0.0 {
        let share = 1.0 / visible.len() as f64;
        for &i in &visible {
            out[i] = share;
        }
    } else {
        for &i in &visible {
            out[i] = clamped[i] / total;
        }
    }

    let within = visible.iter().all(|&i| {
        out[i] >= panels[i].min_ratio - TOLERANCE && out[i] <= panels[i].max_ratio + TOLERANCE
    });
    if within {
        return out;
    }

    let min_sum: f64 = visible.iter().map(|&i| panels[i].min_ratio).sum();
    let max_sum: f64 = visible.iter().map(|&i| panels[i].max_ratio).sum();
    if min_sum > 1.0 + TOLERANCE || max_sum < 1.0 - TOLERANCE {
        return out;
    }

    fit_within_bounds(&clamped, panels, &visible, &mut out);
    out
}

fn sanitize(ratio: f64) -> f64 {
    if ratio.is_finite() {
        ratio.max(0.0)
    } else {
        0.0
    }
}

/// Find `scale` such that `sum(clamp(weight[i] * scale)) == 1` by bisection.
/// The sum is monotone in `scale`, so this converges for feasible bounds.
fn fit_within_bounds(
    clamped: &[f64],
    panels: &[ResolvedPanel],
    visible: &[usize],
    out: &mut [f64],
) {
    const MIN_WEIGHT: f64 = 1e-9;
    let weight = |i: usize| clamped[i].max(MIN_WEIGHT);
    let fitted = |scale: f64, i: usize| panels[i].clamp(weight(i) * scale);
    let sum_at = |scale: f64| visible.iter().map(|&i| fitted(scale, i)).sum::<f64>();

    let mut lo = 0.0;
    let mut hi = visible
        .iter()
        .map(|&i| panels[i].max_ratio / weight(i))
        .fold(1.0, f64::max);
    for _ in 0..200 {
        let mid = (lo + hi) / 2.0;
        if sum_at(mid) < 1.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    for &i in visible {
        out[i] = fitted(hi, i);
    }
}

/// `floor(track_width * ratio)` for each rendered ratio.
pub fn pixel_widths(rendered: &[f64], track_width: f64) -> Vec<u32> {
    rendered
        .iter()
        .map(|r| (track_width * r).floor().max(0.0) as u32)
        .collect()
}

/// Whether any entry moved by more than `epsilon`.
pub fn changed_beyond(old: &[f64], new: &[f64], epsilon: f64) -> bool {
    old.len() != new.len() || old.iter().zip(new).any(|(a, b)| (a - b).abs() > epsilon)
}

/// Feasible range for the left panel of the pair at `separator` when the
/// pair's combined ratio `pair` is held fixed.
fn pair_range(panels: &[ResolvedPanel], separator: usize, pair: f64) -> Option<(f64, f64)> {
    let left = &panels[separator];
    let right = &panels[separator + 1];
    let lo = left.min_ratio.max(pair - right.max_ratio);
    let hi = left.max_ratio.min(pair - right.min_ratio);
    if lo > hi + TOLERANCE {
        return None;
    }
    Some((lo, hi.max(lo)))
}

/// New `(left, right)` ratios for the pair at `separator` when the boundary
/// between them is dragged to `boundary` (a fraction of the track measured
/// from its left edge).
///
/// The pair's sum is conserved and both panels stay within their bounds.
/// Hidden panels before the separator contribute nothing to the offset.
/// Returns `None` when the bounds leave no room to move.
pub fn drag_pair(
    ratios: &[f64],
    panels: &[ResolvedPanel],
    hidden: &[bool],
    separator: usize,
    boundary: f64,
) -> Option<(f64, f64)> {
    let before: f64 = (0..separator)
        .filter(|&k| !hidden[k])
        .map(|k| ratios[k])
        .sum();
    let pair = ratios[separator] + ratios[separator + 1];
    let (lo, hi) = pair_range(panels, separator, pair)?;
    let left = (boundary - before).clamp(lo, hi);
    Some((left, pair - left))
}

/// New `(left, right)` ratios after an arrow-key step on `separator`.
///
/// `delta > 0` grows the left panel (ArrowRight), `delta < 0` shrinks it
/// (ArrowLeft). Returns `None` when the step changes nothing.
pub fn keyboard_pair(
    ratios: &[f64],
    panels: &[ResolvedPanel],
    separator: usize,
    delta: f64,
    policy: KeyboardPolicy,
) -> Option<(f64, f64)> {
    let left = ratios[separator];
    let right = ratios[separator + 1];
    let lp = &panels[separator];
    let rp = &panels[separator + 1];
    let step = delta.abs();

    let (new_left, new_right) = match policy {
        KeyboardPolicy::Symmetric => {
            let room = if delta > 0.0 {
                (lp.max_ratio - left).min(right - rp.min_ratio)
            } else {
                (left - lp.min_ratio).min(rp.max_ratio - right)
            };
            let d = step.min(room);
            if d <= TOLERANCE {
                return None;
            }
            if delta > 0.0 {
                (left + d, right - d)
            } else {
                (left - d, right + d)
            }
        }
        KeyboardPolicy::Asymmetric => {
            if delta > 0.0 {
                let shrunk = (right - step).max(rp.min_ratio);
                let d = right - shrunk;
                if d <= TOLERANCE {
                    return None;
                }
                (left + d, shrunk)
            } else {
                let shrunk = (left - step).max(lp.min_ratio);
                let d = left - shrunk;
                if d <= TOLERANCE {
                    return None;
                }
                (shrunk, right + d)
            }
        }
    };
    Some((new_left, new_right))
}

/// Ratio as an integer percentage for `aria-value*` attributes.
pub fn percent(ratio: f64) -> i64 {
    (ratio * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panels(bounds: &[(f64, f64)]) -> Vec<ResolvedPanel> {
        bounds
            .iter()
            .enumerate()
            .map(|(i, (min, max))| ResolvedPanel {
                id: format!("p{i}"),
                min_ratio: *min,
                max_ratio: *max,
            })
            .collect()
    }

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn equal_split_sums_to_one() {
        let split = equal_split(3);
        assert_close(&split, &[1.0 / 3.0; 3]);
        assert!(equal_split(0).is_empty());
    }

    #[test]
    fn normalize_keeps_valid_ratios() {
        let p = panels(&[(0.1, 0.8); 3]);
        let out = normalize(&[0.2, 0.3, 0.5], &p, &[false; 3]);
        assert_close(&out, &[0.2, 0.3, 0.5]);
    }

    #[test]
    fn normalize_scales_unnormalized_input() {
        let p = panels(&[(0.1, 0.8); 2]);
        let out = normalize(&[1.0, 1.0], &p, &[false; 2]);
        assert_close(&out, &[0.5, 0.5]);
    }

    #[test]
    fn normalize_clamps_then_redistributes() {
        let p = panels(&[(0.1, 0.8); 3]);
        let out = normalize(&[0.9, 0.05, 0.05], &p, &[false; 3]);
        assert_close(&out, &[0.8, 0.1, 0.1]);
    }

    #[test]
    fn normalize_respects_bounds_after_rescale() {
        // Proportional rescale of [0.8, 0.8, 0.1] would give the third
        // panel 0.0588, below its minimum.
        let p = panels(&[(0.1, 0.8), (0.1, 0.8), (0.1, 0.8)]);
        let out = normalize(&[0.8, 0.8, 0.1], &p, &[false; 3]);
        assert!((out.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        assert!(out[2] >= 0.1 - 1e-9);
        assert!((out[0] - out[1]).abs() < 1e-9);
    }

    #[test]
    fn normalize_hidden_panel_is_zero() {
        let p = panels(&[(0.1, 0.8); 3]);
        let out = normalize(&[0.2, 0.3, 0.5], &p, &[false, true, false]);
        assert_eq!(out[1], 0.0);
        assert!((out[0] + out[2] - 1.0).abs() < 1e-9);
        assert!(out[2] <= 0.8 + 1e-9);
    }

    #[test]
    fn normalize_infeasible_bounds_fall_back_to_proportional() {
        // Two visible panels capped at 0.4 cannot fill the track.
        let p = panels(&[(0.1, 0.4), (0.1, 0.4), (0.1, 0.8)]);
        let out = normalize(&[0.3, 0.3, 0.4], &p, &[false, false, true]);
        assert_close(&out, &[0.5, 0.5, 0.0]);
    }

    #[test]
    fn normalize_all_hidden_is_all_zero() {
        let p = panels(&[(0.1, 0.8); 2]);
        assert_close(&normalize(&[0.5, 0.5], &p, &[true, true]), &[0.0, 0.0]);
    }

    #[test]
    fn normalize_ignores_non_finite_entries() {
        let p = panels(&[(0.0, 1.0); 2]);
        let out = normalize(&[f64::NAN, 1.0], &p, &[false; 2]);
        assert_close(&out, &[0.0, 1.0]);
    }

    #[test]
    fn pixel_widths_floor() {
        assert_eq!(pixel_widths(&[0.5, 0.5], 801.0), vec![400, 400]);
        assert_eq!(pixel_widths(&[0.2, 0.3, 0.5], 1000.0), vec![200, 300, 500]);
    }

    #[test]
    fn pixel_widths_do_not_round_up() {
        // 0.29 * 100.0 is 28.999999999999996 in binary floating point.
        assert_eq!(pixel_widths(&[0.29, 0.71], 100.0), vec![28, 71]);
    }

    #[test]
    fn drag_moves_boundary_and_conserves_pair() {
        let p = panels(&[(0.1, 0.8); 3]);
        let ratios = [0.2, 0.3, 0.5];
        let (l, r) = drag_pair(&ratios, &p, &[false; 3], 1, 0.6).unwrap();
        assert!((l - 0.4).abs() < 1e-9);
        assert!((l + r - 0.8).abs() < 1e-12);
    }

    #[test]
    fn drag_clamps_to_both_neighbours() {
        let p = panels(&[(0.1, 0.8), (0.3, 0.8)]);
        let (l, r) = drag_pair(&[0.5, 0.5], &p, &[false; 2], 0, 0.95).unwrap();
        assert!((l - 0.7).abs() < 1e-9);
        assert!((r - 0.3).abs() < 1e-9);

        let (l, _) = drag_pair(&[0.5, 0.5], &p, &[false; 2], 0, -0.2).unwrap();
        assert!((l - 0.2).abs() < 1e-9);
    }

    #[test]
    fn drag_without_room_is_none() {
        let p = panels(&[(0.3, 0.8), (0.3, 0.8), (0.1, 0.8)]);
        assert!(drag_pair(&[0.25, 0.25, 0.5], &p, &[false; 3], 0, 0.2).is_none());
    }

    #[test]
    fn drag_skips_hidden_offset() {
        let p = panels(&[(0.0, 1.0); 3]);
        let (l, _) = drag_pair(&[0.3, 0.5, 0.5], &p, &[true, false, false], 1, 0.25).unwrap();
        assert!((l - 0.25).abs() < 1e-9);
    }

    #[test]
    fn symmetric_step_moves_by_step() {
        let p = panels(&[(0.1, 0.8); 2]);
        let (l, r) =
            keyboard_pair(&[0.5, 0.5], &p, 0, 0.01, KeyboardPolicy::Symmetric).unwrap();
        assert!((l - 0.51).abs() < 1e-9);
        assert!((r - 0.49).abs() < 1e-9);
    }

    #[test]
    fn symmetric_step_stops_at_neighbour_bound() {
        let p = panels(&[(0.1, 0.8), (0.45, 0.8)]);
        let (l, r) = keyboard_pair(&[0.5, 0.5], &p, 0, 0.1, KeyboardPolicy::Symmetric).unwrap();
        assert!((l - 0.55).abs() < 1e-9);
        assert!((r - 0.45).abs() < 1e-9);
        assert!(keyboard_pair(&[l, r], &p, 0, 0.1, KeyboardPolicy::Symmetric).is_none());
    }

    #[test]
    fn symmetric_step_at_bound_is_none() {
        let p = panels(&[(0.1, 0.8); 2]);
        assert!(keyboard_pair(&[0.2, 0.8], &p, 0, -0.01, KeyboardPolicy::Symmetric).is_none());
    }

    #[test]
    fn asymmetric_step_only_floors_shrinking_panel() {
        let p = panels(&[(0.1, 0.8), (0.1, 0.6)]);
        // ArrowLeft shrinks the left panel; the right one grows past its 0.6 cap.
        let (l, r) =
            keyboard_pair(&[0.35, 0.65], &p, 0, -0.1, KeyboardPolicy::Asymmetric).unwrap();
        assert!((l - 0.25).abs() < 1e-9);
        assert!((r - 0.75).abs() < 1e-9);

        // ArrowRight shrinks the right panel, floored at its minimum.
        let (l, r) = keyboard_pair(&[0.85, 0.15], &p, 0, 0.1, KeyboardPolicy::Asymmetric).unwrap();
        assert!((r - 0.1).abs() < 1e-9);
        assert!((l - 0.9).abs() < 1e-9);
    }

    #[test]
    fn changed_beyond_uses_epsilon() {
        assert!(!changed_beyond(&[0.5, 0.5], &[0.5005, 0.4995], 0.001));
        assert!(changed_beyond(&[0.5, 0.5], &[0.502, 0.498], 0.001));
    }

    #[test]
    fn percent_rounds() {
        assert_eq!(percent(0.507), 51);
        assert_eq!(percent(0.1), 10);
    }
}
