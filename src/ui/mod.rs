pub mod details;
pub mod headers_editor;
pub mod help;
pub mod layout;
pub mod popup;
pub mod response_viewer;
pub mod sidebar;
pub mod status_bar;
