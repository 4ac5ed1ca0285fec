use egui::Vec2;

use crate::error::DragDropError;

/// Zero-content marker reserving the dragged item's slot in the list.
///
/// Sized to the item's last rendered footprint before it was detached from
/// normal flow; its position in the list lives in the drag session, not here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placeholder {
    size: Vec2,
}

impl Placeholder {
    /// Rendered size the placeholder reserves.
    pub fn size(&self) -> Vec2 {
        self.size
    }
}

/// Owner of the at-most-one live [`Placeholder`].
///
/// Creating a second placeholder without disposing the first, or disposing
/// when none is live, indicates a sequencing bug in the caller and is
/// reported as an error rather than papered over.
#[derive(Debug, Default)]
pub struct PlaceholderManager {
    live: Option<Placeholder>,
}

impl PlaceholderManager {
    /// Create the placeholder for a starting drag session.
    pub fn create(&mut self, size: Vec2) -> Result<&Placeholder, DragDropError> {
        if self.live.is_some() {
            return Err(DragDropError::PlaceholderExists);
        }
        Ok(self.live.insert(Placeholder { size }))
    }

    /// Remove and return the live placeholder.
    pub fn dispose(&mut self) -> Result<Placeholder, DragDropError> {
        self.live.take().ok_or(DragDropError::NoPlaceholder)
    }

    /// The live placeholder, if a session is holding one.
    pub fn live(&self) -> Option<&Placeholder> {
        self.live.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    #[test]
    fn create_then_dispose() {
        let mut slots = PlaceholderManager::default();
        let created = slots.create(vec2(80.0, 24.0)).unwrap().size();
        assert_eq!(created, vec2(80.0, 24.0));
        assert!(slots.live().is_some());

        let disposed = slots.dispose().unwrap();
        assert_eq!(disposed.size(), vec2(80.0, 24.0));
        assert!(slots.live().is_none());
    }

    #[test]
    fn second_create_is_an_error() {
        let mut slots = PlaceholderManager::default();
        slots.create(vec2(10.0, 10.0)).unwrap();
        assert_eq!(
            slots.create(vec2(20.0, 20.0)).unwrap_err(),
            DragDropError::PlaceholderExists
        );
        // the original placeholder survives the failed create
        assert_eq!(slots.live().unwrap().size(), vec2(10.0, 10.0));
    }

    #[test]
    fn dispose_without_live_is_an_error() {
        let mut slots = PlaceholderManager::default();
        assert_eq!(slots.dispose().unwrap_err(), DragDropError::NoPlaceholder);
    }
}
