use crate::ports::lidarr::CatalogAlbum;
use crate::services::dislike_sync::playlist_snapshot::DislikedKeys;

/// A catalog album whose title equals a disliked key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedPair {
    pub key: String,
    pub album: CatalogAlbum,
}

/// Pair every catalog album with the disliked key equal to its title.
///
/// Titles are compared byte for byte: no case folding, no trimming. Artist is
/// ignored, so same-titled albums by different artists all match. Output
/// follows catalog order.
pub fn match_albums(disliked: &DislikedKeys, catalog: Vec<CatalogAlbum>) -> Vec<MatchedPair> {
    catalog
        .into_iter()
        .filter(|album| disliked.contains(&album.title))
        .map(|album| MatchedPair {
            key: album.title.clone(),
            album,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::lidarr::AlbumId;

    fn keys(titles: &[&str]) -> DislikedKeys {
        titles.iter().map(|t| t.to_string()).collect()
    }

    fn ids(pairs: &[MatchedPair]) -> Vec<AlbumId> {
        pairs.iter().map(|p| p.album.id).collect()
    }

    #[test]
    fn test_matches_only_disliked_titles() {
        let catalog = vec![
            CatalogAlbum::new(1, "X", Some("A")),
            CatalogAlbum::new(2, "Y", Some("B")),
        ];
        let pairs = match_albums(&keys(&["X"]), catalog);
        assert_eq!(ids(&pairs), vec![AlbumId(1)]);
        assert_eq!(pairs[0].key, "X");
    }

    #[test]
    fn test_same_title_different_artists_all_match() {
        let catalog = vec![
            CatalogAlbum::new(1, "X", Some("A")),
            CatalogAlbum::new(2, "Y", Some("A")),
            CatalogAlbum::new(3, "X", Some("B")),
        ];
        let pairs = match_albums(&keys(&["X"]), catalog);
        assert_eq!(ids(&pairs), vec![AlbumId(1), AlbumId(3)]);
    }

    #[test]
    fn test_match_is_case_and_whitespace_sensitive() {
        let catalog = vec![
            CatalogAlbum::new(1, "x", None),
            CatalogAlbum::new(2, "X ", None),
            CatalogAlbum::new(3, " X", None),
        ];
        assert!(match_albums(&keys(&["X"]), catalog).is_empty());
    }

    #[test]
    fn test_keeps_catalog_order() {
        let catalog = vec![
            CatalogAlbum::new(9, "B", None),
            CatalogAlbum::new(3, "A", None),
            CatalogAlbum::new(5, "B", None),
        ];
        let pairs = match_albums(&keys(&["A", "B"]), catalog);
        assert_eq!(ids(&pairs), vec![AlbumId(9), AlbumId(3), AlbumId(5)]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(match_albums(&keys(&[]), vec![CatalogAlbum::new(1, "X", None)]).is_empty());
        assert!(match_albums(&keys(&["X"]), vec![]).is_empty());
    }
}
