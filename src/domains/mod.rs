//! Domain modules: the tool catalog and its companion prompts.

pub mod prompts;
pub mod tools;
