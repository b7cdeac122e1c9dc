// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Tremor.

use thiserror::Error;

use crate::types::ServiceId;

/// Top-level error type for all Tremor operations.
#[derive(Debug, Error)]
pub enum TremorError {
    // -- Host / service locator --
    #[error("no provider registered for service {0}")]
    ServiceUnavailable(ServiceId),

    // -- Module registry --
    #[error("a module named {0:?} is already registered")]
    DuplicateModule(String),

    #[error("no module named {0:?} is registered")]
    ModuleNotFound(String),

    // -- Platform detector --
    #[error("motion detector failed to start: {0}")]
    Detector(String),

    // -- Payload encoding --
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, TremorError>;
