use pv_behavior::BehaviorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("duplicate channel name `{0}`")]
    DuplicateName(String),

    #[error("channel `{name}`: {source}")]
    Behavior {
        name: String,
        #[source]
        source: BehaviorError,
    },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ChannelResult<T> = Result<T, ChannelError>;
