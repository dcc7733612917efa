//! Animated sprite base
//!
//! Shared animation state embedded by value in every entity (player,
//! patrol enemy, falling hazard). No dispatch: each entity type drives
//! its own update and delegates frame cycling here.

use crate::geom::Rect;

/// Seconds between animation frames
pub const ANIM_INTERVAL: f32 = 0.15;

/// A looping frame animation pinned to a world-space rectangle.
///
/// Frames are image names resolved by the sprite bank at draw time.
/// The frame sequence can be swapped wholesale (e.g. idle -> walk);
/// the frame index deliberately survives the swap so the animation
/// doesn't pop back to frame 0 on every facing change.
#[derive(Debug, Clone)]
pub struct AnimatedSprite {
    frames: &'static [&'static str],
    frame: usize,
    pub rect: Rect,
    anim_interval: f32,
    timer: f32,
}

impl AnimatedSprite {
    /// Create a sprite over `frames` with its rect at (x, y), size w x h.
    ///
    /// Panics if `frames` is empty or the dimensions are not positive;
    /// frame tables are compile-time constants so this is a programmer
    /// error, not a runtime condition.
    pub fn new(frames: &'static [&'static str], x: f32, y: f32, w: f32, h: f32) -> Self {
        assert!(!frames.is_empty(), "sprite needs at least one frame");
        assert!(w > 0.0 && h > 0.0, "sprite dimensions must be positive");
        Self {
            frames,
            frame: 0,
            rect: Rect::new(x, y, w, h),
            anim_interval: ANIM_INTERVAL,
            timer: 0.0,
        }
    }

    /// Advance the animation timer; steps at most one frame per call.
    pub fn tick(&mut self, dt: f32) {
        self.timer += dt;
        if self.timer >= self.anim_interval {
            self.timer = 0.0;
            self.frame = (self.frame + 1) % self.frames.len();
        }
    }

    /// Swap the frame sequence without resetting the frame index.
    /// The index is folded into the new range so switching from a long
    /// set to a short one stays in bounds.
    pub fn set_frames(&mut self, frames: &'static [&'static str]) {
        assert!(!frames.is_empty(), "sprite needs at least one frame");
        if !std::ptr::eq(self.frames, frames) {
            self.frames = frames;
            self.frame %= frames.len();
        }
    }

    pub fn current_image(&self) -> &'static str {
        self.frames[self.frame]
    }

    /// Screen-space blit position: bottom-anchored, horizontally centered,
    /// shifted up by the camera scroll.
    pub fn draw_pos(&self, scroll_y: f32) -> (f32, f32) {
        let x = self.rect.center_x() - self.rect.w * 0.5;
        let y = self.rect.bottom() - self.rect.h - scroll_y;
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TWO: [&str; 2] = ["a1", "a2"];
    static FOUR: [&str; 4] = ["b1", "b2", "b3", "b4"];

    #[test]
    fn test_tick_advances_and_wraps() {
        let mut s = AnimatedSprite::new(&TWO, 0.0, 0.0, 10.0, 10.0);
        assert_eq!(s.current_image(), "a1");
        s.tick(ANIM_INTERVAL);
        assert_eq!(s.current_image(), "a2");
        s.tick(ANIM_INTERVAL);
        assert_eq!(s.current_image(), "a1");
    }

    #[test]
    fn test_tick_accumulates_small_dt() {
        let mut s = AnimatedSprite::new(&TWO, 0.0, 0.0, 10.0, 10.0);
        s.tick(0.1);
        assert_eq!(s.frame, 0);
        s.tick(0.1);
        assert_eq!(s.frame, 1);
    }

    #[test]
    fn test_frame_in_range_for_any_dt() {
        let mut s = AnimatedSprite::new(&FOUR, 0.0, 0.0, 10.0, 10.0);
        for dt in [0.0, 0.001, 0.15, 1.0, 1000.0, 0.0] {
            s.tick(dt);
            assert!(s.frame < 4);
        }
        // A huge dt still only steps one frame.
        let mut s = AnimatedSprite::new(&TWO, 0.0, 0.0, 10.0, 10.0);
        s.tick(1e6);
        assert_eq!(s.frame, 1);
    }

    #[test]
    fn test_swap_preserves_index() {
        let mut s = AnimatedSprite::new(&FOUR, 0.0, 0.0, 10.0, 10.0);
        s.tick(ANIM_INTERVAL);
        assert_eq!(s.frame, 1);
        s.set_frames(&TWO);
        assert_eq!(s.frame, 1);
        assert_eq!(s.current_image(), "a2");
    }

    #[test]
    fn test_swap_folds_index_into_shorter_set() {
        let mut s = AnimatedSprite::new(&FOUR, 0.0, 0.0, 10.0, 10.0);
        for _ in 0..3 {
            s.tick(ANIM_INTERVAL);
        }
        assert_eq!(s.frame, 3);
        s.set_frames(&TWO);
        assert!(s.frame < 2);
    }

    #[test]
    fn test_swap_same_set_is_noop() {
        let mut s = AnimatedSprite::new(&FOUR, 0.0, 0.0, 10.0, 10.0);
        s.tick(ANIM_INTERVAL);
        s.set_frames(&FOUR);
        assert_eq!(s.frame, 1);
    }

    #[test]
    fn test_draw_pos_is_bottom_anchored() {
        let s = AnimatedSprite::new(&TWO, 100.0, 200.0, 50.0, 70.0);
        let (x, y) = s.draw_pos(30.0);
        assert!((x - 100.0).abs() < 0.001);
        assert!((y - 170.0).abs() < 0.001);
    }
}
