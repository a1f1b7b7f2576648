pub mod app;
pub mod zoom_controls;
