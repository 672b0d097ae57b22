//! Editor domain: headless core + search index.

mod edit;
mod search;
mod state;

pub use search::{find_all, SearchIndex};
pub use state::TextEditorCore;
