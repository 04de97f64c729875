pub mod cards;
pub mod dashboard;
pub mod docs;
pub mod health;
pub mod regions;
