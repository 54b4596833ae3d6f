pub mod action_bindings;
pub mod app;
pub mod event;
pub mod form;
pub mod reducer;
pub mod state;
pub mod step;
pub mod wizard;
