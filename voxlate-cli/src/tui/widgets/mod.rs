pub mod input_area;
pub mod language_picker;
pub mod status_bar;
pub mod translation_panel;
