//! Small helpers shared by state and components.

pub mod outside_click;
pub mod text;
