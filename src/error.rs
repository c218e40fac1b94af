// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Failures surfaced by the storage, session and aggregation layers.
#[derive(Debug, Error)]
pub enum Error {
    /// A stored record could not be turned into a valid transaction.
    #[error("Data integrity error: {0}")]
    DataIntegrity(String),
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("No user signed in; run `gofinances login` first")]
    NotSignedIn,
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
