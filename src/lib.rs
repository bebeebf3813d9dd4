pub mod cards;
pub mod chart;
pub mod data;
pub mod format;
pub mod gui;
pub mod logging;
pub mod panels;
pub mod settings;
pub mod tabs;
pub mod tooltip;
