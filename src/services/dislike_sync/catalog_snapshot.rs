use color_eyre::eyre::{Result, WrapErr};

use crate::ports::lidarr::{CatalogAlbum, CatalogClient};

/// Fetch the full Lidarr catalog. Any failure is fatal: a partial catalog
/// would leave disliked albums untouched without telling anyone.
pub async fn read_catalog<C: CatalogClient + ?Sized>(client: &C) -> Result<Vec<CatalogAlbum>> {
    log::info!("Fetching albums from Lidarr");
    let albums = client
        .get_albums()
        .await
        .wrap_err("Failed to read the Lidarr catalog")?;
    log::debug!("Lidarr returned {} albums", albums.len());
    Ok(albums)
}
