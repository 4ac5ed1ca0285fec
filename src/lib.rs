pub use error::DragDropError;
pub use geometry::{grab_offset, is_above};
pub use handle::Handle;
pub use placeholder::{Placeholder, PlaceholderManager};
pub use session::{DragIndices, DragSession, DragState, DragUpdate};
pub use state::{SortableItem, SortableResponse, SortableUi};
pub use style::SortableStyle;

mod error;
mod geometry;
mod handle;
mod placeholder;
mod session;
pub mod sort;
mod state;
mod style;
pub mod utils;
