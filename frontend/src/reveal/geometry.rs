/// Axis-aligned box in viewport coordinates (px).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Fraction of this box's area that lies inside `viewport`, in [0, 1].
    ///
    /// A zero-area box counts as fully visible when it sits within the
    /// viewport's bounds and invisible otherwise.
    pub fn visible_fraction(&self, viewport: &Rect) -> f64 {
        let overlap_w = self.right().min(viewport.right()) - self.left.max(viewport.left);
        let overlap_h = self.bottom().min(viewport.bottom()) - self.top.max(viewport.top);

        let area = self.width * self.height;
        if !(area > 0.0) {
            return if overlap_w >= 0.0 && overlap_h >= 0.0 { 1.0 } else { 0.0 };
        }
        if overlap_w <= 0.0 || overlap_h <= 0.0 {
            return 0.0;
        }
        (overlap_w * overlap_h / area).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 1280.0, 800.0)
    }

    #[test]
    fn test_fully_inside() {
        assert_eq!(Rect::new(100.0, 100.0, 200.0, 200.0).visible_fraction(&viewport()), 1.0);
    }

    #[test]
    fn test_partially_below_fold() {
        // 100 of 400 px tall box above the bottom edge
        let rect = Rect::new(0.0, 700.0, 500.0, 400.0);
        assert_eq!(rect.visible_fraction(&viewport()), 0.25);
    }

    #[test]
    fn test_disjoint() {
        assert_eq!(Rect::new(0.0, 900.0, 100.0, 100.0).visible_fraction(&viewport()), 0.0);
        // touching edge only
        assert_eq!(Rect::new(0.0, 800.0, 100.0, 100.0).visible_fraction(&viewport()), 0.0);
    }

    #[test]
    fn test_zero_area() {
        assert_eq!(Rect::new(10.0, 10.0, 0.0, 0.0).visible_fraction(&viewport()), 1.0);
        assert_eq!(Rect::new(10.0, 1000.0, 0.0, 0.0).visible_fraction(&viewport()), 0.0);
    }
}
