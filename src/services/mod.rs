pub mod dislike_sync;
pub mod lidarr;
pub mod plex;
