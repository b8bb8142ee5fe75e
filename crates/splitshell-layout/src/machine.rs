//! Drag/keyboard interaction state machine.
//!
//! Two states: `Idle` and `Dragging(separator)`. Idle accepts a drag start,
//! a keyboard step and a resize; Dragging accepts moves, the matching end
//! and a resize. Anything else is rejected without side effects.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Input device that started a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragSource {
    Pointer,
    Touch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging { separator: usize, source: DragSource },
}

/// Accepted transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Started { separator: usize, source: DragSource },
    Moved { separator: usize },
    Ended { separator: usize },
    Stepped { separator: usize },
    Resized,
}

/// Why an input was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    AlreadyDragging { separator: usize },
    NotDragging,
    SourceMismatch { active: DragSource },
    KeyboardWhileDragging { separator: usize },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyDragging { separator } => {
                write!(f, "separator {separator} is already being dragged")
            }
            Self::NotDragging => write!(f, "no drag in progress"),
            Self::SourceMismatch { active } => write!(f, "drag is owned by {active:?} input"),
            Self::KeyboardWhileDragging { separator } => {
                write!(f, "keyboard step ignored while separator {separator} is dragged")
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct DragMachine {
    phase: DragPhase,
    transitions: u64,
}

impl Default for DragMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl DragMachine {
    pub fn new() -> Self {
        Self {
            phase: DragPhase::Idle,
            transitions: 0,
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn dragging_index(&self) -> Option<usize> {
        match self.phase {
            DragPhase::Idle => None,
            DragPhase::Dragging { separator, .. } => Some(separator),
        }
    }

    /// Number of accepted transitions so far.
    pub fn transition_count(&self) -> u64 {
        self.transitions
    }

    pub fn start(&mut self, separator: usize, source: DragSource) -> Result<Transition, Rejection> {
        match self.phase {
            DragPhase::Idle => {
                self.phase = DragPhase::Dragging { separator, source };
                Ok(self.accept(Transition::Started { separator, source }))
            }
            DragPhase::Dragging { separator, .. } => Err(Rejection::AlreadyDragging { separator }),
        }
    }

    pub fn drag_move(&mut self, source: DragSource) -> Result<Transition, Rejection> {
        let separator = self.owned_by(source)?;
        Ok(self.accept(Transition::Moved { separator }))
    }

    pub fn end(&mut self, source: DragSource) -> Result<Transition, Rejection> {
        let separator = self.owned_by(source)?;
        self.phase = DragPhase::Idle;
        Ok(self.accept(Transition::Ended { separator }))
    }

    /// Drop any active drag regardless of source. Returns the separator that
    /// was being dragged.
    pub fn cancel(&mut self) -> Option<usize> {
        let separator = self.dragging_index()?;
        self.phase = DragPhase::Idle;
        self.accept(Transition::Ended { separator });
        Some(separator)
    }

    pub fn step(&mut self, separator: usize) -> Result<Transition, Rejection> {
        match self.phase {
            DragPhase::Idle => Ok(self.accept(Transition::Stepped { separator })),
            DragPhase::Dragging { separator, .. } => {
                Err(Rejection::KeyboardWhileDragging { separator })
            }
        }
    }

    pub fn resize(&mut self) -> Transition {
        self.accept(Transition::Resized)
    }

    fn owned_by(&self, source: DragSource) -> Result<usize, Rejection> {
        match self.phase {
            DragPhase::Idle => Err(Rejection::NotDragging),
            DragPhase::Dragging {
                separator,
                source: active,
            } => {
                if active == source {
                    Ok(separator)
                } else {
                    Err(Rejection::SourceMismatch { active })
                }
            }
        }
    }

    fn accept(&mut self, transition: Transition) -> Transition {
        self.transitions += 1;
        transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let machine = DragMachine::new();
        assert_eq!(machine.phase(), DragPhase::Idle);
        assert_eq!(machine.dragging_index(), None);
    }

    #[test]
    fn full_pointer_gesture() {
        let mut machine = DragMachine::new();
        assert_eq!(
            machine.start(1, DragSource::Pointer),
            Ok(Transition::Started {
                separator: 1,
                source: DragSource::Pointer
            })
        );
        assert_eq!(machine.dragging_index(), Some(1));
        assert_eq!(
            machine.drag_move(DragSource::Pointer),
            Ok(Transition::Moved { separator: 1 })
        );
        assert_eq!(
            machine.end(DragSource::Pointer),
            Ok(Transition::Ended { separator: 1 })
        );
        assert_eq!(machine.phase(), DragPhase::Idle);
        assert_eq!(machine.transition_count(), 3);
    }

    #[test]
    fn second_start_is_rejected() {
        let mut machine = DragMachine::new();
        machine.start(0, DragSource::Pointer).unwrap();
        assert_eq!(
            machine.start(1, DragSource::Touch),
            Err(Rejection::AlreadyDragging { separator: 0 })
        );
        assert_eq!(machine.dragging_index(), Some(0));
    }

    #[test]
    fn move_and_end_require_active_drag() {
        let mut machine = DragMachine::new();
        assert_eq!(
            machine.drag_move(DragSource::Pointer),
            Err(Rejection::NotDragging)
        );
        assert_eq!(machine.end(DragSource::Touch), Err(Rejection::NotDragging));
        assert_eq!(machine.transition_count(), 0);
    }

    #[test]
    fn other_source_cannot_drive_drag() {
        let mut machine = DragMachine::new();
        machine.start(0, DragSource::Touch).unwrap();
        assert_eq!(
            machine.end(DragSource::Pointer),
            Err(Rejection::SourceMismatch {
                active: DragSource::Touch
            })
        );
        assert_eq!(machine.dragging_index(), Some(0));
    }

    #[test]
    fn keyboard_only_when_idle() {
        let mut machine = DragMachine::new();
        assert_eq!(machine.step(2), Ok(Transition::Stepped { separator: 2 }));
        machine.start(0, DragSource::Pointer).unwrap();
        assert_eq!(
            machine.step(2),
            Err(Rejection::KeyboardWhileDragging { separator: 0 })
        );
    }

    #[test]
    fn resize_accepted_in_both_states() {
        let mut machine = DragMachine::new();
        assert_eq!(machine.resize(), Transition::Resized);
        machine.start(0, DragSource::Pointer).unwrap();
        assert_eq!(machine.resize(), Transition::Resized);
        assert_eq!(machine.dragging_index(), Some(0));
    }

    #[test]
    fn cancel_returns_to_idle() {
        let mut machine = DragMachine::new();
        assert_eq!(machine.cancel(), None);
        machine.start(3, DragSource::Touch).unwrap();
        assert_eq!(machine.cancel(), Some(3));
        assert_eq!(machine.phase(), DragPhase::Idle);
    }
}
