use thiserror::Error;

use crate::form::SubscriptionError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Subscription error: {0}")]
    Subscription(#[from] SubscriptionError),
}

pub type Result<T> = std::result::Result<T, Error>;
