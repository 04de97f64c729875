pub mod loading_gate;
pub mod page_views;
