pub mod chart;
pub mod dashboard;
pub mod format;
pub mod view_models;
