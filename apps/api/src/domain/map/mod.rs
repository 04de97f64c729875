pub mod hover;
pub mod projection;
pub mod view;
