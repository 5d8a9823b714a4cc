/// Errors surfaced by the dashboard runtime. `Rejected` carries the
/// backend's human-readable message verbatim for the operator.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Feed(#[from] crowdcore::FeedError),
    #[error("export failure: {0}")]
    Export(#[from] csv::Error),
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;
