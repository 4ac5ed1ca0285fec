use egui::{Pos2, Rect, Vec2};

use crate::error::DragDropError;
use crate::geometry::{grab_offset, is_above};
use crate::placeholder::{Placeholder, PlaceholderManager};

/// Source and target position of a finished (or in-flight) drag.
///
/// `target` is expressed against the list *before* the item is removed, so it
/// can be handed straight to [`shift_vec`](crate::utils::shift_vec).
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragIndices {
    pub source: usize,
    pub target: usize,
}

/// State of one drag gesture, created on grab and discarded on release.
#[derive(Debug, Clone, Copy)]
pub struct DragSession {
    /// Index of the dragged item in the list at gesture start.
    source: usize,
    /// Pointer offset from the item's top-left corner at grab time.
    grab: Vec2,
    /// Rendered size of the item when it left normal flow.
    size: Vec2,
    /// Current freeform position of the detached item.
    pos: Pos2,
    /// Slot the placeholder occupies among the remaining items,
    /// `0..=sibling_count`.
    slot: usize,
    /// Where the gesture began.
    origin: Pos2,
}

impl DragSession {
    pub fn source(&self) -> usize {
        self.source
    }

    pub fn item_size(&self) -> Vec2 {
        self.size
    }

    /// Top-left corner the detached item should be drawn at.
    pub fn item_pos(&self) -> Pos2 {
        self.pos
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn origin(&self) -> Pos2 {
        self.origin
    }
}

/// Per-move outcome handed back to the driving widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragUpdate {
    /// Where to draw the detached item this frame.
    pub item_pos: Pos2,
    /// Placeholder slot after rule resolution.
    pub slot: usize,
}

/// The `Idle -> Dragging -> Idle` gesture machine.
///
/// Owns the session and its placeholder; both exist together and are torn
/// down together, so a caller can observe "exactly one placeholder while
/// dragging, none at rest" at any point. Move and release events arriving
/// while idle are ignored.
#[derive(Debug, Default)]
pub struct DragState {
    session: Option<DragSession>,
    placeholders: PlaceholderManager,
}

impl DragState {
    /// Start a session for the item at `source`, grabbed at `pointer` inside
    /// `item_rect`.
    ///
    /// Fails with [`DragDropError::SessionActive`] while another gesture is
    /// in flight, and with [`DragDropError::PlaceholderExists`] if an earlier
    /// malformed teardown left a placeholder dangling.
    pub fn begin(
        &mut self,
        source: usize,
        pointer: Pos2,
        item_rect: Rect,
    ) -> Result<(), DragDropError> {
        if self.session.is_some() {
            return Err(DragDropError::SessionActive);
        }
        self.placeholders.create(item_rect.size())?;
        self.session = Some(DragSession {
            source,
            grab: grab_offset(pointer, item_rect),
            size: item_rect.size(),
            // the grab point tracks the pointer, so at grab time the item
            // has not moved yet
            pos: item_rect.min,
            slot: source,
            origin: pointer,
        });
        log::debug!("drag started: item {source}");
        Ok(())
    }

    /// Feed a pointer move. `siblings` are the current bounds of the
    /// non-dragged items in visual order.
    ///
    /// Returns `None` while idle.
    pub fn update(&mut self, pointer: Pos2, siblings: &[Rect]) -> Option<DragUpdate> {
        let session = self.session.as_mut()?;
        session.pos = pointer - session.grab;
        // a caller may have shrunk the list under us
        session.slot = session.slot.min(siblings.len());
        session.slot = resolve_slot(pointer.y, session.slot, siblings);
        Some(DragUpdate {
            item_pos: session.pos,
            slot: session.slot,
        })
    }

    /// Complete the gesture: the placeholder is replaced by the item at its
    /// final slot and the machine returns to idle.
    ///
    /// Returns `None` while idle, so a stray second release is harmless.
    pub fn finish(&mut self) -> Option<DragIndices> {
        let session = self.session.take()?;
        if self.placeholders.dispose().is_err() {
            log::warn!("drag finished without a live placeholder");
        }
        let indices = indices_of(&session);
        log::debug!(
            "drag finished: item {} -> {}",
            indices.source,
            indices.target
        );
        Some(indices)
    }

    /// Unconditional teardown, for component destruction while a gesture may
    /// still be in flight. Leaves no session and no placeholder behind.
    pub fn reset(&mut self) {
        if self.session.take().is_some() {
            log::debug!("drag session cleared during teardown");
        }
        let _ = self.placeholders.dispose();
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn placeholder(&self) -> Option<&Placeholder> {
        self.placeholders.live()
    }

    /// Source and current target of the in-flight gesture.
    pub fn indices(&self) -> Option<DragIndices> {
        self.session.as_ref().map(indices_of)
    }
}

fn indices_of(session: &DragSession) -> DragIndices {
    // slot counts positions among the remaining items; past the source the
    // pre-removal index is one higher
    let target = if session.slot > session.source {
        session.slot + 1
    } else {
        session.slot
    };
    DragIndices {
        source: session.source,
        target,
    }
}

/// Resolve the placeholder slot for one move event.
///
/// The rules run in fixed precedence and only the first match applies, which
/// keeps the placeholder from oscillating when the pointer sits near a
/// boundary:
///
/// 1. pointer below the last sibling's bottom edge -> end slot
/// 2. pointer above the first sibling's top edge -> slot 0
/// 3. pointer above the previous sibling's midpoint -> one slot up
/// 4. pointer at or below the next sibling's midpoint -> one slot down
/// 5. otherwise the slot is kept
fn resolve_slot(pointer_y: f32, slot: usize, siblings: &[Rect]) -> usize {
    let (first, last) = match (siblings.first(), siblings.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return slot,
    };
    if pointer_y > last.bottom() {
        return siblings.len();
    }
    if pointer_y < first.top() {
        return 0;
    }
    if slot > 0 && is_above(pointer_y, siblings[slot - 1]) {
        return slot - 1;
    }
    if slot < siblings.len() && !is_above(pointer_y, siblings[slot]) {
        return slot + 1;
    }
    slot
}
