mod app;
pub mod dialogs;
mod event_form;
pub mod theme;
pub mod views;

pub use app::PlannerApp;
