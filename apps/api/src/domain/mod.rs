pub mod dashboard;
pub mod map;
pub mod region;
pub mod risk;
pub mod shared;
