use crate::state::{SortableItem, SortableUi};
use egui::{CursorIcon, Sense, Ui};

/// The interactive sub-regions of one list row.
///
/// Handed to the row closure by [`SortableUi::ui`]: [`Handle::ui`] draws the
/// grab region that starts a drag, [`Handle::delete_ui`] draws the region
/// that removes the row. Handles drawn inside the floating copy of the
/// dragged row are inert.
pub struct Handle<'a> {
    pub(crate) state: &'a mut SortableUi,
    pub(crate) floating: bool,
}

impl<'a> Handle<'a> {
    /// Draw the grab region for `item`.
    pub fn ui<T: SortableItem>(&mut self, ui: &mut Ui, item: &T, contents: impl FnOnce(&mut Ui)) {
        if self.floating {
            contents(ui);
            return;
        }

        let added_contents = ui.scope(contents);
        let response = ui.interact(
            added_contents.response.rect,
            item.id().with("grab"),
            Sense::drag(),
        );

        if response.hovered() {
            ui.output().cursor_icon = CursorIcon::Grab;
        }

        // the session itself starts once the enclosing row's bounds are
        // known; here we only note where the pointer grabbed
        if response.drag_started() {
            if let Some(pointer) = response.interact_pointer_pos() {
                self.state.queue_grab(pointer);
            }
        }
    }

    /// Draw the delete region for `item`.
    pub fn delete_ui<T: SortableItem>(
        &mut self,
        ui: &mut Ui,
        item: &T,
        contents: impl FnOnce(&mut Ui),
    ) {
        if self.floating {
            contents(ui);
            return;
        }

        let added_contents = ui.scope(contents);
        let response = ui.interact(
            added_contents.response.rect,
            item.id().with("delete"),
            Sense::click(),
        );

        if response.hovered() {
            ui.output().cursor_icon = CursorIcon::PointingHand;
        }

        if response.clicked() {
            self.state.queue_delete();
        }
    }
}
