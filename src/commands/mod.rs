//! Command implementations

pub mod compare;

pub use compare::{compare_repositories, handle_compare_command, CompareArgs, Report};
