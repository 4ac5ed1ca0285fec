use egui::{Pos2, Rect, Vec2};

/// Whether `pointer_y` lies strictly above the vertical midpoint of `bounds`.
///
/// This is the single comparison the placeholder resolution rules are built
/// on: a pointer exactly on the midpoint counts as *not* above, so a slot
/// only yields once the pointer has crossed into its upper half.
pub fn is_above(pointer_y: f32, bounds: Rect) -> bool {
    pointer_y < bounds.top() + bounds.height() / 2.0
}

/// Pointer offset from the top-left corner of `bounds`.
///
/// Captured once at gesture start so the grabbed point of the item keeps
/// tracking the pointer exactly while it is dragged.
pub fn grab_offset(pointer: Pos2, bounds: Rect) -> Vec2 {
    pointer - bounds.min
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    fn band(top: f32, height: f32) -> Rect {
        Rect::from_min_size(pos2(0.0, top), vec2(100.0, height))
    }

    #[test]
    fn above_midpoint() {
        assert!(is_above(74.9, band(50.0, 50.0)));
    }

    #[test]
    fn below_midpoint() {
        assert!(!is_above(75.1, band(50.0, 50.0)));
    }

    #[test]
    fn exactly_on_midpoint_is_not_above() {
        assert!(!is_above(75.0, band(50.0, 50.0)));
    }

    #[test]
    fn repeated_calls_agree() {
        let b = band(10.0, 30.0);
        let first = is_above(17.0, b);
        for _ in 0..8 {
            assert_eq!(is_above(17.0, b), first);
        }
    }

    #[test]
    fn grab_offset_from_corner() {
        let b = band(50.0, 50.0);
        assert_eq!(grab_offset(pos2(12.0, 58.0), b), vec2(12.0, 8.0));
    }
}
