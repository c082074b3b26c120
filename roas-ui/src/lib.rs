pub mod app;
pub mod form;
pub mod screens;
pub mod widgets;

pub use app::BreakevenApp;
