//! Core command-processing building blocks: the line grammar (`parser`),
//! the ordered letter list (`list`), and the sequential driver
//! (`interpreter`). These are the primitives consumed by the high-level
//! `api` module and the CLI runner.
pub mod interpreter;
pub mod list;
pub mod parser;
