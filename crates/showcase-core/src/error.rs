use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Page set is empty: at least one page is required")]
    EmptyPageSet,

    #[error("Roster error: {0}")]
    Roster(String),
}

pub type Result<T> = std::result::Result<T, Error>;
