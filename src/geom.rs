//! Rectangle type for collision and layout

/// An axis-aligned rectangle defined by position and size
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Top edge
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Center X
    pub fn center_x(&self) -> f32 {
        self.x + self.w * 0.5
    }

    /// Center Y
    pub fn center_y(&self) -> f32 {
        self.y + self.h * 0.5
    }

    /// Move the rect so its bottom edge sits at `bottom`
    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.h;
    }

    /// Check if point is inside
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// AABB overlap test. Strict interior overlap: rectangles that share
    /// only an edge do not collide.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Shrink by `dx` total width and `dy` total height, centered.
    /// Used to derive damage hitboxes tighter than the sprite bounds.
    pub fn inset(&self, dx: f32, dy: f32) -> Self {
        Self::new(
            self.x + dx * 0.5,
            self.y + dy * 0.5,
            (self.w - dx).max(0.0),
            (self.h - dy).max(0.0),
        )
    }

    /// Clamp the left edge into `[min_x, max_x]`
    pub fn clamp_x(&mut self, min_x: f32, max_x: f32) {
        self.x = self.x.clamp(min_x, max_x);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects_overlap() {
        let a = Rect::new(0.0, 0.0, 100.0, 50.0);
        let b = Rect::new(50.0, 25.0, 100.0, 50.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_intersects_shared_edge_is_not_collision() {
        let a = Rect::new(0.0, 0.0, 100.0, 50.0);
        let b = Rect::new(100.0, 0.0, 100.0, 50.0);
        assert!(!a.intersects(&b));
        let below = Rect::new(0.0, 50.0, 100.0, 50.0);
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_intersects_disjoint() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(200.0, 200.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_inset_is_centered() {
        let r = Rect::new(100.0, 100.0, 50.0, 70.0);
        let hitbox = r.inset(20.0, 10.0);
        assert!((hitbox.w - 30.0).abs() < 0.001);
        assert!((hitbox.h - 60.0).abs() < 0.001);
        assert!((hitbox.center_x() - r.center_x()).abs() < 0.001);
        assert!((hitbox.center_y() - r.center_y()).abs() < 0.001);
    }

    #[test]
    fn test_contains() {
        let r = Rect::new(300.0, 250.0, 200.0, 50.0);
        assert!(r.contains(400.0, 275.0));
        assert!(!r.contains(299.0, 275.0));
        assert!(!r.contains(400.0, 300.0));
    }

    #[test]
    fn test_set_bottom() {
        let mut r = Rect::new(0.0, 0.0, 50.0, 70.0);
        r.set_bottom(580.0);
        assert!((r.y - 510.0).abs() < 0.001);
        assert!((r.bottom() - 580.0).abs() < 0.001);
    }

    #[test]
    fn test_clamp_x() {
        let mut r = Rect::new(-30.0, 0.0, 50.0, 70.0);
        r.clamp_x(0.0, 750.0);
        assert!((r.x - 0.0).abs() < 0.001);
        r.x = 900.0;
        r.clamp_x(0.0, 750.0);
        assert!((r.x - 750.0).abs() < 0.001);
    }
}
