//! Folio Command - Page editing
//!
//! Interprets short natural-language edit commands ("make hero dramatic and
//! move pricing up") into pure page transforms, and keeps a linear
//! undo/redo history of the pages they produce.

mod diff;
mod history;
mod interpreter;
mod transforms;

pub use diff::{compute_page_diff, diff_lines};
pub use history::{History, Snapshot};
pub use interpreter::{split_clauses, CommandInterpreter, Interpretation};
pub use transforms::{Direction, Transform};
