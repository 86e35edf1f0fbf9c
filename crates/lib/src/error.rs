use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid configuration")]
    ConfigError(#[from] crate::config::ConfigError),
    #[error("Parser error")]
    ParserError(#[from] crate::parser::ParserError),
}
