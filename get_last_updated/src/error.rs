use std::error::Error as _;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Terminal failures of a single invocation.
///
/// Decode failures are not represented here: a body that does not yield a
/// `last_updated` string degrades to an empty value instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("missing TAG_URL argument")]
    Usage,

    #[error("request failed")]
    Network(#[from] reqwest::Error),

    #[error("failed to write output")]
    Output(#[from] std::io::Error),
}

impl Error {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage => 1,
            Error::Network(_) | Error::Output(_) => 2,
        }
    }

    /// This error followed by every underlying cause, joined with `": "`.
    pub fn report(&self) -> String {
        let mut message = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}
