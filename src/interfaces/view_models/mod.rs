pub mod analytics_view_model;
