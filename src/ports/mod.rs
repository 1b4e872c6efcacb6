pub mod lidarr;
pub mod plex;
