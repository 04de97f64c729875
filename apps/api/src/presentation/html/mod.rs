//! Server-side rendering of the dashboard page and map.

pub mod dashboard;
pub mod map;
