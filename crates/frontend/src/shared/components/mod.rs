pub mod loading_indicator;
pub mod ui;
