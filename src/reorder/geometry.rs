use egui::{Pos2, Rect};

/// Where the dragged element lands relative to the element under the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Placement {
    /// Immediately before the target (pointer in the upper half).
    Before,

    /// Immediately after the target (pointer in the lower half).
    After,
}

impl Placement {
    /// Classify `pointer` against `target` with [`is_in_first_half`].
    pub fn from_pointer(target: Rect, pointer: Pos2) -> Self {
        if is_in_first_half(target, pointer) {
            Self::Before
        } else {
            Self::After
        }
    }
}

/// Half-plane test: is `pointer` in the upper half of `target`?
///
/// Only the top edge and the height of `target` are used; the horizontal extent is ignored.
/// The midline itself counts as the upper half.
pub fn is_in_first_half(target: Rect, pointer: Pos2) -> bool {
    let relative_y = pointer.y - target.top();
    relative_y <= target.height() / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    fn target() -> Rect {
        Rect::from_min_size(pos2(0.0, 100.0), vec2(200.0, 40.0))
    }

    #[test]
    fn midline_is_inclusive() {
        assert!(is_in_first_half(target(), pos2(10.0, 119.0)));
        assert!(is_in_first_half(target(), pos2(10.0, 120.0)));
        assert!(!is_in_first_half(target(), pos2(10.0, 121.0)));
    }

    #[test]
    fn horizontal_position_is_ignored() {
        // Far outside the rect on the x axis, still classified by y alone.
        assert!(is_in_first_half(target(), pos2(-500.0, 101.0)));
        assert!(!is_in_first_half(target(), pos2(9_000.0, 139.0)));
    }

    #[test]
    fn pointer_above_or_below_the_rect_still_classifies() {
        assert_eq!(
            Placement::from_pointer(target(), pos2(0.0, 50.0)),
            Placement::Before
        );
        assert_eq!(
            Placement::from_pointer(target(), pos2(0.0, 500.0)),
            Placement::After
        );
    }
}
