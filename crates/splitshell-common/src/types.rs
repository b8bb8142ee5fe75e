use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in CSS pixels, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Whether `x` falls within the horizontal span `[left, right]`.
    pub fn contains_x(&self, x: f64) -> bool {
        x >= self.left() && x <= self.right()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_edge() {
        let rect = Rect::new(10.0, 0.0, 300.0, 200.0);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.right(), 310.0);
    }

    #[test]
    fn contains_x_is_inclusive() {
        let rect = Rect::new(10.0, 0.0, 100.0, 50.0);
        assert!(rect.contains_x(10.0));
        assert!(rect.contains_x(110.0));
        assert!(rect.contains_x(60.0));
        assert!(!rect.contains_x(9.9));
        assert!(!rect.contains_x(110.1));
    }

    #[test]
    fn serde_round_trip() {
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        let json = serde_json::to_string(&rect).unwrap();
        let parsed: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rect);
    }
}
