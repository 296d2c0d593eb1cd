//! Mouse gesture recognition.
//!
//! The terminal reports raw button presses, motion with a button held, and
//! releases. [`GestureTracker`] turns those into the gestures the board
//! reacts to: clicks, double-clicks, and card drags.

use std::time::{Duration, Instant};

use kanban_protocol::{CardId, ColumnId};

use crate::layout::HitTarget;

/// A recognized mouse interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gesture {
    /// A card was pressed and the pointer then left the pressed cell.
    DragStart {
        /// Column the card was dragged from.
        column: ColumnId,
        /// The dragged card.
        card: CardId,
    },
    /// The pointer moved during a drag.
    DragMove {
        /// Pointer column.
        x: u16,
        /// Pointer row.
        y: u16,
    },
    /// The button was released during a drag.
    Drop {
        /// Pointer column.
        x: u16,
        /// Pointer row.
        y: u16,
    },
    /// Press and release on the same target.
    Click(HitTarget),
    /// A second click on the same target within the double-click window.
    DoubleClick(HitTarget),
}

#[derive(Debug, Clone)]
struct Press {
    x: u16,
    y: u16,
    target: Option<HitTarget>,
}

/// Tracks button state across mouse events.
#[derive(Debug, Clone)]
pub struct GestureTracker {
    double_click: Duration,
    pressed: Option<Press>,
    dragging: bool,
    last_click: Option<(Instant, HitTarget)>,
}

impl GestureTracker {
    /// Creates a tracker with the given double-click window.
    #[must_use]
    pub fn new(double_click: Duration) -> Self {
        Self {
            double_click,
            pressed: None,
            dragging: false,
            last_click: None,
        }
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Records a button press on `target`.
    pub fn press(&mut self, x: u16, y: u16, target: Option<HitTarget>) {
        self.pressed = Some(Press { x, y, target });
        self.dragging = false;
    }

    /// Records pointer motion with the button held.
    ///
    /// Only a pressed card can be dragged; motion after pressing anything
    /// else is ignored.
    pub fn motion(&mut self, x: u16, y: u16) -> Option<Gesture> {
        if self.dragging {
            return Some(Gesture::DragMove { x, y });
        }

        let press = self.pressed.as_ref()?;
        if (press.x, press.y) == (x, y) {
            return None;
        }
        let Some(HitTarget::Card { column, card }) = &press.target else {
            return None;
        };

        let gesture = Gesture::DragStart {
            column: *column,
            card: card.clone(),
        };
        self.dragging = true;
        self.last_click = None;
        Some(gesture)
    }

    /// Records a button release over `target` at time `now`.
    pub fn release(
        &mut self,
        x: u16,
        y: u16,
        target: Option<HitTarget>,
        now: Instant,
    ) -> Option<Gesture> {
        let press = self.pressed.take()?;

        if std::mem::take(&mut self.dragging) {
            return Some(Gesture::Drop { x, y });
        }

        let target = target.filter(|t| press.target.as_ref() == Some(t))?;

        let is_double = self.last_click.as_ref().is_some_and(|(at, previous)| {
            *previous == target && now.saturating_duration_since(*at) <= self.double_click
        });

        if is_double {
            self.last_click = None;
            Some(Gesture::DoubleClick(target))
        } else {
            self.last_click = Some((now, target.clone()));
            Some(Gesture::Click(target))
        }
    }

    /// Abandons the current press or drag.
    ///
    /// Later motion and release events are ignored until the next press.
    pub fn cancel(&mut self) {
        self.pressed = None;
        self.dragging = false;
    }

    /// Abandons the current press and forgets the last click.
    pub fn reset(&mut self) {
        self.cancel();
        self.last_click = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(400);

    fn card(id: &str) -> HitTarget {
        HitTarget::Card {
            column: ColumnId::Todo,
            card: CardId::new(id),
        }
    }

    fn click(tracker: &mut GestureTracker, target: HitTarget, at: Instant) -> Option<Gesture> {
        tracker.press(3, 3, Some(target.clone()));
        tracker.release(3, 3, Some(target), at)
    }

    #[test]
    fn press_release_is_click() {
        let mut tracker = GestureTracker::new(WINDOW);
        let now = Instant::now();
        assert_eq!(
            click(&mut tracker, card("1"), now),
            Some(Gesture::Click(card("1")))
        );
    }

    #[test]
    fn second_click_within_window_is_double() {
        let mut tracker = GestureTracker::new(WINDOW);
        let start = Instant::now();
        click(&mut tracker, card("1"), start);

        assert_eq!(
            click(&mut tracker, card("1"), start + Duration::from_millis(200)),
            Some(Gesture::DoubleClick(card("1")))
        );
        // A third click starts over
        assert_eq!(
            click(&mut tracker, card("1"), start + Duration::from_millis(300)),
            Some(Gesture::Click(card("1")))
        );
    }

    #[test]
    fn slow_or_different_clicks_are_single() {
        let mut tracker = GestureTracker::new(WINDOW);
        let start = Instant::now();
        click(&mut tracker, card("1"), start);
        assert_eq!(
            click(&mut tracker, card("1"), start + Duration::from_millis(900)),
            Some(Gesture::Click(card("1")))
        );
        assert_eq!(
            click(&mut tracker, card("2"), start + Duration::from_millis(950)),
            Some(Gesture::Click(card("2")))
        );
    }

    #[test]
    fn release_elsewhere_is_not_a_click() {
        let mut tracker = GestureTracker::new(WINDOW);
        tracker.press(3, 3, Some(card("1")));
        let gesture = tracker.release(3, 3, Some(HitTarget::Column(ColumnId::Todo)), Instant::now());
        assert_eq!(gesture, None);
    }

    #[test]
    fn moving_a_pressed_card_starts_drag() {
        let mut tracker = GestureTracker::new(WINDOW);
        tracker.press(3, 3, Some(card("1")));

        assert_eq!(tracker.motion(3, 3), None);
        assert_eq!(
            tracker.motion(4, 3),
            Some(Gesture::DragStart {
                column: ColumnId::Todo,
                card: CardId::new("1"),
            })
        );
        assert!(tracker.is_dragging());
        assert_eq!(tracker.motion(40, 5), Some(Gesture::DragMove { x: 40, y: 5 }));
        assert_eq!(
            tracker.release(41, 5, None, Instant::now()),
            Some(Gesture::Drop { x: 41, y: 5 })
        );
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn only_cards_can_be_dragged() {
        let mut tracker = GestureTracker::new(WINDOW);
        tracker.press(3, 3, Some(HitTarget::AddButton(ColumnId::Todo)));
        assert_eq!(tracker.motion(10, 3), None);
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn cancel_ignores_rest_of_gesture() {
        let mut tracker = GestureTracker::new(WINDOW);
        tracker.press(3, 3, Some(card("1")));
        tracker.motion(8, 3);
        tracker.cancel();

        assert!(!tracker.is_dragging());
        assert_eq!(tracker.motion(9, 3), None);
        assert_eq!(tracker.release(9, 3, None, Instant::now()), None);
    }

    #[test]
    fn reset_forgets_last_click() {
        let mut tracker = GestureTracker::new(WINDOW);
        let start = Instant::now();
        click(&mut tracker, card("1"), start);
        tracker.reset();
        assert_eq!(
            click(&mut tracker, card("1"), start + Duration::from_millis(100)),
            Some(Gesture::Click(card("1")))
        );
    }
}
