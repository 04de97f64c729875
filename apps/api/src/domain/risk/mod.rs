pub mod classifier;
pub mod level;
pub mod palette;
