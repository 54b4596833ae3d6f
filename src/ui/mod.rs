pub mod renderer;
pub mod span;
pub mod steps;
pub mod style;
pub mod theme;
