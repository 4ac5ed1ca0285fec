use egui::{self, CursorIcon, Id, Order, Pos2, Rect, Sense, Shape, Ui, Vec2};
use std::hash::Hash;

use crate::handle::Handle;
use crate::session::{DragIndices, DragState};
use crate::style::SortableStyle;
use crate::utils::shift_vec;

pub trait SortableItem {
    fn id(&self) -> Id;
}

impl<T: Hash> SortableItem for T {
    fn id(&self) -> Id {
        Id::new(self)
    }
}

/// What happened to the list this frame.
///
/// `Dragging` is reported on every frame of an active gesture and carries
/// the indices the drop *would* produce right now; `Completed` is reported
/// exactly once, on the frame the pointer is released. Both use the
/// [`shift_vec`] index convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortableResponse {
    /// Nothing is in flight.
    Idle,
    /// A drag is in progress.
    Dragging(DragIndices),
    /// A drag finished this frame; apply it to the list.
    Completed(DragIndices),
    /// The delete handle of the item at this index was pressed.
    Deleted(usize),
}

impl SortableResponse {
    pub fn completed(&self) -> Option<DragIndices> {
        match self {
            SortableResponse::Completed(indices) => Some(*indices),
            _ => None,
        }
    }

    pub fn deleted(&self) -> Option<usize> {
        match self {
            SortableResponse::Deleted(index) => Some(*index),
            _ => None,
        }
    }
}

/// Interaction noted by a [`Handle`] while its row was drawn, resolved once
/// the row's bounds are known.
enum Pending {
    Grab { pointer: Pos2 },
    Delete,
}

/// [`SortableUi`] stores the state of a sortable drag & drop list.
///
/// `item_ui` draws one row. Its arguments are:
/// - a mutable reference to the row ui
/// - a [`Handle`] for drawing the grab and delete regions
/// - the index of the current item
/// - a reference to the current item
///
/// # Example
/// ```rust,no_run
/// use eframe::egui::CentralPanel;
/// use eframe::egui::Context;
/// use eframe::{App, Frame, NativeOptions};
/// use egui_sortable::{SortableResponse, SortableUi};
///
/// struct ListApp {
///     items: Vec<String>,
///     sortable: SortableUi,
/// }
///
/// impl App for ListApp {
///     fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
///         CentralPanel::default().show(ctx, |ui| {
///             let response = self.sortable.ui_vec(ui, &mut self.items, |ui, mut handle, _idx, item| {
///                 ui.horizontal(|ui| {
///                     handle.ui(ui, item, |ui| {
///                         ui.label("::");
///                     });
///                     handle.delete_ui(ui, item, |ui| {
///                         ui.label("x");
///                     });
///                     ui.label(item.clone());
///                 });
///             });
///             if let SortableResponse::Completed(moved) = response {
///                 println!("moved {} -> {}", moved.source, moved.target);
///             }
///         });
///     }
/// }
///
/// pub fn main() {
///     eframe::run_native(
///         "Sortable example",
///         NativeOptions::default(),
///         Box::new(|_| {
///             Box::new(ListApp {
///                 sortable: SortableUi::default(),
///                 items: vec!["a", "b", "c"].into_iter().map(String::from).collect(),
///             })
///         }),
///     );
/// }
/// ```
#[derive(Default)]
pub struct SortableUi {
    drag: DragState,
    style: SortableStyle,
    pending: Option<Pending>,
}

impl SortableUi {
    pub fn new(style: SortableStyle) -> Self {
        Self {
            style,
            ..Default::default()
        }
    }

    pub fn style_mut(&mut self) -> &mut SortableStyle {
        &mut self.style
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// Tear down any in-flight gesture, for component destruction.
    ///
    /// Safe to call at any time; afterwards the list is at rest with no
    /// session and no placeholder.
    pub fn reset(&mut self) {
        self.pending = None;
        self.drag.reset();
    }

    /// Draw the list and report what happened this frame. Reorders and
    /// deletions are left to the caller; see [`SortableUi::ui_vec`] for the
    /// self-applying variant.
    pub fn ui<'a, T: SortableItem + 'a>(
        &mut self,
        ui: &mut Ui,
        items: impl Iterator<Item = &'a T>,
        mut item_ui: impl FnMut(&mut Ui, Handle, usize, &T),
    ) -> SortableResponse {
        let list = items.enumerate().collect::<Vec<_>>();
        self.pending = None;

        // copy the session fields out so the row closures below may borrow
        // the whole widget state
        let active = self
            .drag
            .session()
            .map(|s| (s.source(), s.slot(), s.item_size(), s.item_pos()));

        match active {
            Some((source, slot, size, pos)) => {
                self.dragging_ui(ui, &list, source, slot, size, pos, &mut item_ui)
            }
            None => self.idle_ui(ui, &list, &mut item_ui),
        }
    }

    /// Like [`SortableUi::ui`], but applies completed drags and deletions to
    /// `items` directly.
    pub fn ui_vec<T: SortableItem>(
        &mut self,
        ui: &mut Ui,
        items: &mut Vec<T>,
        item_ui: impl FnMut(&mut Ui, Handle, usize, &T),
    ) -> SortableResponse {
        let response = self.ui(ui, items.iter(), item_ui);
        apply_to_vec(response, items);
        response
    }

    fn idle_ui<T: SortableItem>(
        &mut self,
        ui: &mut Ui,
        list: &[(usize, &T)],
        item_ui: &mut impl FnMut(&mut Ui, Handle, usize, &T),
    ) -> SortableResponse {
        let margin = self.style.margin;
        let mut response = SortableResponse::Idle;

        Self::draw_list(ui, margin, false, |list_ui| {
            for &(idx, item) in list {
                let rect = list_ui
                    .scope(|row_ui| {
                        item_ui(
                            row_ui,
                            Handle {
                                state: self,
                                floating: false,
                            },
                            idx,
                            item,
                        )
                    })
                    .response
                    .rect;

                // a handle inside this row may have noted an interaction;
                // resolve it now that the row's bounds are known
                match self.pending.take() {
                    Some(Pending::Grab { pointer }) => match self.drag.begin(idx, pointer, rect) {
                        Ok(()) => {}
                        Err(err) => log::warn!("grab on item {idx} ignored: {err}"),
                    },
                    Some(Pending::Delete) => response = SortableResponse::Deleted(idx),
                    None => {}
                }
            }
        });

        if let Some(indices) = self.drag.indices() {
            response = SortableResponse::Dragging(indices);
        }
        response
    }

    #[allow(clippy::too_many_arguments)]
    fn dragging_ui<T: SortableItem>(
        &mut self,
        ui: &mut Ui,
        list: &[(usize, &T)],
        source: usize,
        slot: usize,
        size: Vec2,
        pos: Pos2,
        item_ui: &mut impl FnMut(&mut Ui, Handle, usize, &T),
    ) -> SortableResponse {
        let dragged = match list.iter().find(|(idx, _)| *idx == source) {
            Some(&(idx, item)) => (idx, item),
            None => {
                // the caller swapped the list out underneath the gesture
                log::warn!("dragged item vanished from the list, clearing the session");
                self.drag.reset();
                return SortableResponse::Idle;
            }
        };

        ui.output().cursor_icon = CursorIcon::Grabbing;

        let margin = self.style.margin;
        let highlight = self.style.highlight_while_dragging;
        let placeholder_fill = self.style.placeholder_fill;
        let placeholder_stroke = self.style.placeholder_stroke;

        // bounds of the rows still in normal flow, in visual order
        let mut sibling_rects = Vec::with_capacity(list.len().saturating_sub(1));

        Self::draw_list(ui, margin, highlight, |list_ui| {
            let mut flow_slot = 0;
            for &(idx, item) in list {
                if idx == source {
                    continue;
                }
                if flow_slot == slot {
                    Self::draw_placeholder(list_ui, size, placeholder_fill, placeholder_stroke);
                }
                let rect = list_ui
                    .scope(|row_ui| {
                        item_ui(
                            row_ui,
                            Handle {
                                state: self,
                                floating: false,
                            },
                            idx,
                            item,
                        )
                    })
                    .response
                    .rect;
                sibling_rects.push(rect);
                flow_slot += 1;
            }
            if slot >= flow_slot {
                Self::draw_placeholder(list_ui, size, placeholder_fill, placeholder_stroke);
            }
        });

        // the dragged row draws above everything and tracks the pointer;
        // nothing on the tooltip layer is interactable, so its handles are
        // naturally inert on top of being marked floating
        egui::Area::new(Id::new("egui_sortable_floating_item"))
            .order(Order::Tooltip)
            .interactable(false)
            .fixed_pos(pos)
            .show(ui.ctx(), |float_ui| {
                float_ui.scope(|row_ui| {
                    item_ui(
                        row_ui,
                        Handle {
                            state: self,
                            floating: true,
                        },
                        dragged.0,
                        dragged.1,
                    )
                });
            });

        let pointer = ui.input().pointer.hover_pos();
        let released = ui.input().pointer.any_released();

        if let Some(pointer) = pointer {
            self.drag.update(pointer, &sibling_rects);
        }

        // a delete press that somehow arrives mid-gesture forces completion
        // at the current slot instead of deleting anything
        let force_finish = matches!(self.pending.take(), Some(Pending::Delete));

        if released || force_finish {
            return match self.drag.finish() {
                Some(indices) => SortableResponse::Completed(indices),
                None => SortableResponse::Idle,
            };
        }

        match self.drag.indices() {
            Some(indices) => SortableResponse::Dragging(indices),
            None => SortableResponse::Idle,
        }
    }

    pub(crate) fn queue_grab(&mut self, pointer: Pos2) {
        if self.drag.is_active() {
            log::warn!("grab ignored: a drag session is already active");
            return;
        }
        self.pending = Some(Pending::Grab { pointer });
    }

    pub(crate) fn queue_delete(&mut self) {
        self.pending = Some(Pending::Delete);
    }

    /// Draw the list background and body; highlighted while it is the
    /// active drop target.
    fn draw_list(
        ui: &mut Ui,
        margin: Vec2,
        highlight: bool,
        list_body: impl FnOnce(&mut Ui),
    ) -> egui::Response {
        let outer_bounds = ui.available_rect_before_wrap();
        let background = ui.painter().add(Shape::Noop);

        let mut content_ui = ui.child_ui(outer_bounds.shrink2(margin), *ui.layout());
        list_body(&mut content_ui);

        let outer = Rect::from_min_max(outer_bounds.min, content_ui.min_rect().max + margin);
        let (rect, response) = ui.allocate_at_least(outer.size(), Sense::hover());

        let visuals = if highlight && response.hovered() {
            ui.visuals().widgets.active
        } else {
            ui.visuals().widgets.inactive
        };
        ui.painter().set(
            background,
            epaint::RectShape {
                rounding: visuals.rounding,
                fill: visuals.bg_fill,
                stroke: visuals.bg_stroke,
                rect,
            },
        );

        response
    }

    /// Reserve the dragged item's footprint at the placeholder slot.
    fn draw_placeholder(
        ui: &mut Ui,
        size: Vec2,
        fill: Option<egui::Color32>,
        stroke: Option<egui::Stroke>,
    ) {
        let (rect, _response) = ui.allocate_exact_size(size, Sense::hover());
        let fill = fill.unwrap_or(ui.visuals().faint_bg_color);
        let stroke = stroke.unwrap_or(ui.visuals().widgets.inactive.bg_stroke);
        let rounding = ui.visuals().widgets.inactive.rounding;
        ui.painter().rect(rect, rounding, fill, stroke);
    }
}

/// Apply a frame's outcome to the backing vec.
fn apply_to_vec<T>(response: SortableResponse, items: &mut Vec<T>) {
    match response {
        SortableResponse::Completed(indices) => {
            shift_vec(indices.source, indices.target, items);
        }
        SortableResponse::Deleted(index) if index < items.len() => {
            items.remove(index);
        }
        _ => {}
    }
}
