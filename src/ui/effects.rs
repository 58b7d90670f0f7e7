// SPDX-License-Identifier: MPL-2.0
//! Decorative animation state: entrance stagger, modal title reveal, block
//! hover easing, and the cursor-trailing indicator.
//!
//! Everything in this module is presentational. The gallery invokes the
//! hooks on load/open/close and forgets about them; no modal or drag
//! decision ever reads back from here.

use crate::ui::gallery::subcomponents::swipe;
use iced::Point;
use std::time::{Duration, Instant};

/// Total duration of one block's entrance reveal.
const ENTRANCE_DURATION: Duration = Duration::from_secs(1);
/// Window over which block entrance starts are staggered.
const ENTRANCE_STAGGER: Duration = Duration::from_millis(500);
/// Duration of the modal title character reveal.
const TITLE_DURATION: Duration = Duration::from_millis(600);
/// Window over which title character starts are staggered.
const TITLE_STAGGER: Duration = Duration::from_millis(200);
/// Per-frame interpolation factor for the cursor trail.
const CURSOR_LERP: f32 = 0.15;
/// Hover ease-in/out rate, in progress units per second.
const HOVER_RATE: f32 = 1.0 / 0.35;

/// Decorative effects state.
#[derive(Debug, Clone)]
pub struct State {
    reduced_motion: bool,
    block_count: usize,
    entrance_started: Option<Instant>,
    title_started: Option<Instant>,
    hovered_block: Option<usize>,
    hover_progress: f32,
    cursor_target: Point,
    cursor_position: Point,
    cursor_seen: bool,
    last_tick: Option<Instant>,
}

impl State {
    #[must_use]
    pub fn new(block_count: usize, reduced_motion: bool) -> Self {
        Self {
            reduced_motion,
            block_count,
            entrance_started: None,
            title_started: None,
            hovered_block: None,
            hover_progress: 0.0,
            cursor_target: Point::ORIGIN,
            cursor_position: Point::ORIGIN,
            cursor_seen: false,
            last_tick: None,
        }
    }

    /// Hook: the gallery finished loading. Starts the entrance stagger.
    pub fn on_load(&mut self) {
        if !self.reduced_motion {
            self.entrance_started = Some(Instant::now());
        }
    }

    /// Hook: the modal opened (or re-opened on navigation). Restarts the
    /// title reveal.
    pub fn on_modal_opened(&mut self) {
        if !self.reduced_motion {
            self.title_started = Some(Instant::now());
        }
    }

    /// Hook: the modal closed.
    pub fn on_modal_closed(&mut self) {
        self.title_started = None;
    }

    /// Hook: a block gained or lost pointer hover.
    pub fn on_hover(&mut self, block: Option<usize>) {
        if block != self.hovered_block {
            self.hovered_block = block;
            if self.reduced_motion {
                self.hover_progress = if block.is_some() { 1.0 } else { 0.0 };
            }
        }
    }

    /// Hook: the pointer moved. Feeds the cursor trail target.
    pub fn on_cursor_moved(&mut self, position: Point) {
        self.cursor_target = position;
        if !self.cursor_seen {
            // First sighting jumps the trail so it does not sweep in from the origin.
            self.cursor_position = position;
            self.cursor_seen = true;
        }
    }

    /// Advances per-frame interpolation. Returns whether any animation is
    /// still live and the tick subscription should stay on.
    pub fn tick(&mut self, now: Instant) -> bool {
        let dt = self
            .last_tick
            .map_or(0.0, |last| now.duration_since(last).as_secs_f32());
        self.last_tick = Some(now);

        if self.reduced_motion {
            return false;
        }

        // Hover progress eases toward the hovered/unhovered end state.
        let hover_target = if self.hovered_block.is_some() { 1.0 } else { 0.0 };
        let step = HOVER_RATE * dt;
        if self.hover_progress < hover_target {
            self.hover_progress = (self.hover_progress + step).min(hover_target);
        } else if self.hover_progress > hover_target {
            self.hover_progress = (self.hover_progress - step).max(hover_target);
        }

        // Cursor trail interpolates toward the last seen pointer position.
        self.cursor_position = Point::new(
            self.cursor_position.x + (self.cursor_target.x - self.cursor_position.x) * CURSOR_LERP,
            self.cursor_position.y + (self.cursor_target.y - self.cursor_position.y) * CURSOR_LERP,
        );

        self.is_animating(now)
    }

    /// Whether any decorative animation still needs frames.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        if self.reduced_motion {
            return false;
        }
        let entrance_live = self.entrance_started.is_some_and(|started| {
            now.duration_since(started) < ENTRANCE_DURATION + ENTRANCE_STAGGER
        });
        let title_live = self
            .title_started
            .is_some_and(|started| now.duration_since(started) < TITLE_DURATION + TITLE_STAGGER);
        let hover_target = if self.hovered_block.is_some() { 1.0 } else { 0.0 };
        let hover_live = (self.hover_progress - hover_target).abs() > 0.001;
        let cursor_live = self.cursor_seen
            && ((self.cursor_position.x - self.cursor_target.x).abs() > 0.5
                || (self.cursor_position.y - self.cursor_target.y).abs() > 0.5);

        entrance_live || title_live || hover_live || cursor_live
    }

    /// Entrance reveal progress for block `index`, in `0.0..=1.0`.
    #[must_use]
    pub fn block_reveal(&self, index: usize) -> f32 {
        if self.reduced_motion {
            return 1.0;
        }
        let Some(started) = self.entrance_started else {
            return 1.0;
        };
        let delay = if self.block_count > 1 {
            ENTRANCE_STAGGER.mul_f32(index as f32 / (self.block_count - 1) as f32)
        } else {
            Duration::ZERO
        };
        ramp(started + delay, ENTRANCE_DURATION)
    }

    /// Reveal progress for character `index` of a `total`-character modal
    /// title, in `0.0..=1.0`.
    #[must_use]
    pub fn title_char_reveal(&self, index: usize, total: usize) -> f32 {
        if self.reduced_motion {
            return 1.0;
        }
        let Some(started) = self.title_started else {
            return 1.0;
        };
        let delay = if total > 1 {
            TITLE_STAGGER.mul_f32(index as f32 / (total - 1) as f32)
        } else {
            Duration::ZERO
        };
        ramp(started + delay, TITLE_DURATION)
    }

    /// Eased hover progress for block `index` (`0.0` idle, `1.0` hovered).
    #[must_use]
    pub fn hover_scale(&self, index: usize) -> f32 {
        if self.hovered_block == Some(index) {
            self.hover_progress
        } else {
            0.0
        }
    }

    /// Interpolated cursor-trail position; `None` while inactive or on
    /// compact viewports, which use the native cursor.
    #[must_use]
    pub fn cursor_trail(&self, viewport_width: f32) -> Option<Point> {
        if self.reduced_motion || !self.cursor_seen || swipe::is_compact(viewport_width) {
            return None;
        }
        Some(self.cursor_position)
    }

    #[must_use]
    pub fn hovered_block(&self) -> Option<usize> {
        self.hovered_block
    }
}

/// Linear 0→1 ramp starting at `start` over `duration`; clamped at both ends.
fn ramp(start: Instant, duration: Duration) -> f32 {
    let now = Instant::now();
    if now < start {
        return 0.0;
    }
    (now.duration_since(start).as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_motion_disables_everything() {
        let mut state = State::new(8, true);
        state.on_load();
        state.on_modal_opened();
        assert_eq!(state.block_reveal(0), 1.0);
        assert_eq!(state.title_char_reveal(0, 10), 1.0);
        assert!(!state.tick(Instant::now()));
    }

    #[test]
    fn reveal_is_complete_before_load() {
        let state = State::new(8, false);
        assert_eq!(state.block_reveal(3), 1.0);
    }

    #[test]
    fn entrance_starts_dim_and_staggers() {
        let mut state = State::new(8, false);
        state.on_load();
        // Immediately after load the first block has barely revealed and the
        // last block has not started.
        assert!(state.block_reveal(0) < 0.1);
        assert_eq!(state.block_reveal(7), 0.0);
    }

    #[test]
    fn entrance_completes_after_stagger_window() {
        let mut state = State::new(8, false);
        state.entrance_started =
            Some(Instant::now() - (ENTRANCE_DURATION + ENTRANCE_STAGGER + Duration::from_millis(50)));
        for index in 0..8 {
            assert_eq!(state.block_reveal(index), 1.0);
        }
        assert!(!state.is_animating(Instant::now()));
    }

    #[test]
    fn title_reveal_restarts_on_open() {
        let mut state = State::new(8, false);
        state.title_started =
            Some(Instant::now() - (TITLE_DURATION + TITLE_STAGGER + Duration::from_millis(50)));
        assert_eq!(state.title_char_reveal(0, 5), 1.0);

        state.on_modal_opened();
        assert!(state.title_char_reveal(4, 5) < 1.0);
    }

    #[test]
    fn cursor_trail_jumps_on_first_sighting_then_lerps() {
        let mut state = State::new(8, false);
        state.on_cursor_moved(Point::new(100.0, 100.0));
        assert_eq!(state.cursor_trail(1280.0), Some(Point::new(100.0, 100.0)));

        state.on_cursor_moved(Point::new(200.0, 100.0));
        state.tick(Instant::now());
        let trailed = state.cursor_trail(1280.0).unwrap();
        assert!(trailed.x > 100.0 && trailed.x < 200.0);
    }

    #[test]
    fn cursor_trail_is_desktop_only() {
        let mut state = State::new(8, false);
        state.on_cursor_moved(Point::new(100.0, 100.0));
        assert!(state.cursor_trail(800.0).is_none());
        assert!(state.cursor_trail(1280.0).is_some());
    }

    #[test]
    fn hover_progress_ramps_and_decays() {
        let mut state = State::new(8, false);
        let start = Instant::now();
        state.tick(start);

        state.on_hover(Some(2));
        state.tick(start + Duration::from_millis(100));
        let mid = state.hover_scale(2);
        assert!(mid > 0.0 && mid < 1.0);
        assert_eq!(state.hover_scale(3), 0.0);

        state.tick(start + Duration::from_secs(2));
        assert_eq!(state.hover_scale(2), 1.0);

        state.on_hover(None);
        state.tick(start + Duration::from_secs(4));
        assert_eq!(state.hover_scale(2), 0.0);
    }
}
