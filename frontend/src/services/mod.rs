pub mod api;
pub mod editor;
