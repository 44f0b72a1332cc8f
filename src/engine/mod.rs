pub mod lifecycle;
pub mod views;
