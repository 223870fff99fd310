//! Diagnostics report model.
//!
//! Each subsystem reports a small tagged status. Rendering to the
//! human-readable strings returned by the diagnostics endpoint happens through
//! the [`Display`](std::fmt::Display) impls, at the HTTP boundary only.

use std::fmt;

/// Maximum number of characters of an error kept in a status detail.
pub const MAX_DETAIL_CHARS: usize = 50;

/// Backend process status. If this code runs, the backend is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendStatus {
    Running,
}

impl fmt::Display for BackendStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Running => f.write_str("✅ Running"),
        }
    }
}

/// Database subsystem status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseStatus {
    /// Status could not be determined.
    Unavailable,
    /// No store was constructed (not configured or the startup connection failed).
    NotInitialized,
    /// Store reachable and listing collections succeeded.
    Connected,
    /// Store constructed but probing it failed.
    Error(String),
}

impl DatabaseStatus {
    /// Builds an [`DatabaseStatus::Error`] with the detail truncated to
    /// [`MAX_DETAIL_CHARS`] characters.
    pub fn error(detail: impl fmt::Display) -> Self {
        Self::Error(detail.to_string().chars().take(MAX_DETAIL_CHARS).collect())
    }
}

impl fmt::Display for DatabaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => f.write_str("❌ Not Available"),
            Self::NotInitialized => f.write_str("⚠️  Available but not initialized"),
            Self::Connected => f.write_str("✅ Connected & Working"),
            Self::Error(detail) => write!(f, "⚠️  Connected but Error: {detail}"),
        }
    }
}

/// Whether a handle to the store exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connected,
    NotConnected,
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connected => f.write_str("Connected"),
            Self::NotConnected => f.write_str("Not Connected"),
        }
    }
}

/// Presence of a configuration value. The value itself is never reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingStatus {
    Set,
    NotSet,
}

impl From<bool> for SettingStatus {
    fn from(present: bool) -> Self {
        if present { Self::Set } else { Self::NotSet }
    }
}

impl fmt::Display for SettingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Set => f.write_str("✅ Set"),
            Self::NotSet => f.write_str("❌ Not Set"),
        }
    }
}

/// Full diagnostics snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticsReport {
    pub backend: BackendStatus,
    pub database: DatabaseStatus,
    pub database_url: SettingStatus,
    pub database_name: SettingStatus,
    pub connection: ConnectionStatus,
    pub collections: Vec<String>,
}
