pub mod presets;
pub mod repositories;
