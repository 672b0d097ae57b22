//! 数据模型层

pub mod cursor;
pub mod edit_history;
pub mod edit_op;
pub mod rope;
pub mod selection;
pub mod utf8;

pub use cursor::CursorModel;
pub use edit_history::{EditCommandLog, DEFAULT_MAX_UNDO};
pub use edit_op::{CommandKind, EditCommand};
pub use rope::{Chunks, RopeBuffer, DEFAULT_LEAF_CAPACITY};
pub use selection::Selection;
