//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, parse, and list-engine errors so embedders can use
//! `?` across the whole library surface.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] crate::core::parser::ParseError),

    #[error("list error: {0}")]
    Engine(#[from] crate::core::list::EngineError),
}
