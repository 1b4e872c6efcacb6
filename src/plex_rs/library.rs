use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::error::SyncError;
use crate::plex_rs::{PlexResponse, plex_get};

/// `MediaContainer` for `/library/sections` which returns a `Directory` list.
#[derive(Debug, Deserialize)]
pub struct PlexLibrarySectionsContainer {
    #[serde(rename = "Directory", default)]
    pub directories: Vec<PlexLibrarySection>,
}

/// A Plex library section.
///
/// Notes
/// - `key` is the library section id.
/// - `section_type` is `artist` for music libraries.
#[derive(Debug, Clone, Deserialize)]
pub struct PlexLibrarySection {
    pub key: String,
    pub title: String,
    #[serde(rename = "type")]
    pub section_type: String,
}

/// Fetch all Plex library sections.
///
/// Endpoint
/// - `GET /library/sections`
pub async fn get_library_sections(
    client: &Client,
    base_url: &Url,
    user_token: &str,
) -> Result<Vec<PlexLibrarySection>, SyncError> {
    let url = base_url.join("library/sections")?;
    let res: PlexResponse<PlexLibrarySectionsContainer> =
        plex_get(client, url, user_token).await?;
    Ok(res.media_container.directories)
}

/// Find the music section with the given title. Titles are compared exactly.
pub fn find_music_section<'a>(
    sections: &'a [PlexLibrarySection],
    title: &str,
) -> Option<&'a PlexLibrarySection> {
    sections
        .iter()
        .find(|section| section.section_type == "artist" && section.title == title)
}
