//! Repository signal and the fold that builds it from per-file updates

use crate::deployment::{RuntimeType, DEFAULT_PORT};
use serde::Serialize;

/// What repository inspection concluded about runtime type and port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RepoSignal {
    /// Nothing usable was found, or the repository could not be inspected
    Unknown,
    Detected {
        runtime_type: RuntimeType,
        port: u16,
    },
}

impl RepoSignal {
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

/// Partial conclusion drawn from a single file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignalUpdate {
    pub runtime_type: Option<RuntimeType>,
    pub port: Option<u16>,
}

impl SignalUpdate {
    pub fn runtime(runtime_type: RuntimeType, port: u16) -> Self {
        Self {
            runtime_type: Some(runtime_type),
            port: Some(port),
        }
    }

    pub fn port(port: u16) -> Self {
        Self {
            runtime_type: None,
            port: Some(port),
        }
    }
}

/// Last-writer-wins merge of file updates in walk order
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalAccumulator {
    runtime_type: Option<RuntimeType>,
    port: Option<u16>,
    fired: bool,
}

impl SignalAccumulator {
    pub fn apply(mut self, update: SignalUpdate) -> Self {
        if let Some(runtime_type) = update.runtime_type {
            self.runtime_type = Some(runtime_type);
        }
        if let Some(port) = update.port {
            self.port = Some(port);
        }
        self.fired |= update.runtime_type.is_some() || update.port.is_some();
        self
    }

    /// Unset fields fall back to python / 5000 once any detector has fired
    pub fn finish(self) -> RepoSignal {
        if !self.fired {
            return RepoSignal::Unknown;
        }
        RepoSignal::Detected {
            runtime_type: self.runtime_type.unwrap_or_default(),
            port: self.port.unwrap_or(DEFAULT_PORT),
        }
    }
}
