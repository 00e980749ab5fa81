/// Presentation layer: immediate-mode widgets over [`crate::state::AppState`].
pub mod map;
pub mod panels;
pub mod table;
