use egui::{Color32, Stroke, Vec2};

/// Visual configuration for [`SortableUi`](crate::SortableUi).
///
/// Everything has a sensible default derived from the active egui visuals;
/// overrides only need to be set where a list wants to deviate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SortableStyle {
    /// Padding between the list background and its rows.
    pub margin: Vec2,
    /// Tint the list background while it is the active drop target.
    pub highlight_while_dragging: bool,
    /// Placeholder fill; the theme's faint background color when `None`.
    pub placeholder_fill: Option<Color32>,
    /// Placeholder outline; the theme's inactive widget stroke when `None`.
    pub placeholder_stroke: Option<Stroke>,
}

impl Default for SortableStyle {
    fn default() -> Self {
        Self {
            margin: Vec2::splat(4.0),
            highlight_while_dragging: true,
            placeholder_fill: None,
            placeholder_stroke: None,
        }
    }
}

impl SortableStyle {
    #[must_use]
    pub fn with_margin(mut self, margin: Vec2) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn without_highlight(mut self) -> Self {
        self.highlight_while_dragging = false;
        self
    }

    #[must_use]
    pub fn with_placeholder_fill(mut self, fill: Color32) -> Self {
        self.placeholder_fill = Some(fill);
        self
    }

    #[must_use]
    pub fn with_placeholder_stroke(mut self, stroke: Stroke) -> Self {
        self.placeholder_stroke = Some(stroke);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    #[test]
    fn defaults_defer_to_theme() {
        let style = SortableStyle::default();
        assert!(style.placeholder_fill.is_none());
        assert!(style.placeholder_stroke.is_none());
        assert!(style.highlight_while_dragging);
    }

    #[test]
    fn builder_overrides() {
        let style = SortableStyle::default()
            .with_margin(vec2(8.0, 2.0))
            .without_highlight()
            .with_placeholder_fill(Color32::from_gray(40));
        assert_eq!(style.margin, vec2(8.0, 2.0));
        assert!(!style.highlight_while_dragging);
        assert_eq!(style.placeholder_fill, Some(Color32::from_gray(40)));
    }
}
