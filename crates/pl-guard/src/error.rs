use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuardError {
    #[error("Rate limit exceeded: {limit} requests per {window_secs}s {location}")]
    RateLimitExceeded {
        limit: u32,
        window_secs: u64,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, GuardError>;
