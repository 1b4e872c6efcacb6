//! Reconcile the disliked-albums playlist in Plex against the Lidarr catalog.
//!
//! A run reads the playlist and the full catalog, pairs albums by exact title,
//! and applies the configured [`RemediationMode`] to every pair.

pub mod catalog_snapshot;
pub mod matcher;
pub mod playlist_snapshot;
pub mod remediation;
pub mod runner;
pub mod tag_registrar;

pub use remediation::RemediationMode;
pub use runner::{SyncConfig, SyncResult, SyncRunner};
