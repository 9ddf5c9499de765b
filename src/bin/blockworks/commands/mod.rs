//! Command implementations

pub mod completions;
pub mod kinds;
pub mod make;
pub mod run;
