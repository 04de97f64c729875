pub mod classify_region;
pub mod map_view;
