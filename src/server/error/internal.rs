use thiserror::Error;

/// Internal issues with stored data indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored credential digest does not follow the `scheme$salt$digest` layout.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Malformed credential digest: {reason}")]
    MalformedCredentialDigest {
        /// What part of the digest could not be read
        reason: String,
    },
}
