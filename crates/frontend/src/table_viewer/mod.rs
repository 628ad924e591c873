pub mod api;
pub mod ui;
pub mod view_model;

pub use ui::TableViewer;
