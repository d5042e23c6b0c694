pub mod panels;
pub mod tooltip;
