use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::SyncError;
use crate::lidarr_rs::{api_url, lidarr_get, send};

#[derive(Debug, Clone, Deserialize)]
pub struct LidarrTag {
    pub id: i64,
    pub label: String,
}

#[derive(Debug, Serialize)]
struct CreateTagRequest<'a> {
    label: &'a str,
}

/// Endpoint
/// - `GET /api/v1/tag`
pub async fn get_tags(
    client: &Client,
    base_url: &Url,
    api_key: &str,
) -> Result<Vec<LidarrTag>, SyncError> {
    lidarr_get(client, base_url, api_key, "tag").await
}

/// Create a tag and return it with the id Lidarr assigned.
///
/// Endpoint
/// - `POST /api/v1/tag`
pub async fn create_tag(
    client: &Client,
    base_url: &Url,
    api_key: &str,
    label: &str,
) -> Result<LidarrTag, SyncError> {
    let path = "tag";
    let url = api_url(base_url, path)?;

    log::debug!("POST Lidarr {}", path);
    send(
        client.post(url).json(&CreateTagRequest { label }),
        api_key,
        path,
    )
    .await?
    .json::<LidarrTag>()
    .await
    .map_err(|e| SyncError::upstream(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lidarr_rs::test_server::serve_once;

    #[test]
    fn test_create_tag_body() {
        let body = serde_json::to_value(CreateTagRequest { label: "disliked" }).unwrap();
        assert_eq!(body, serde_json::json!({"label": "disliked"}));
    }

    #[test]
    fn test_deserialize_tags() {
        let json = r#"[{"id":1,"label":"disliked"},{"id":2,"label":"keep"}]"#;
        let tags: Vec<LidarrTag> = serde_json::from_str(json).unwrap();
        assert_eq!(tags[1].id, 2);
        assert_eq!(tags[0].label, "disliked");
    }

    #[tokio::test]
    async fn test_create_tag_request() {
        let (base_url, server) = serve_once("201 Created", r#"{"id":3,"label":"disliked"}"#).await;

        let tag = create_tag(&Client::new(), &base_url, "KEY", "disliked")
            .await
            .unwrap();

        let request = server.await.unwrap();
        assert_eq!(request.request_line, "POST /api/v1/tag HTTP/1.1");
        assert_eq!(request.header("x-api-key"), Some("KEY"));
        assert_eq!(request.json(), serde_json::json!({"label": "disliked"}));
        assert_eq!(tag.id, 3);
        assert_eq!(tag.label, "disliked");
    }

    #[tokio::test]
    async fn test_get_tags_request() {
        let (base_url, server) = serve_once("200 OK", r#"[{"id":1,"label":"keep"}]"#).await;

        let tags = get_tags(&Client::new(), &base_url, "KEY").await.unwrap();

        let request = server.await.unwrap();
        assert_eq!(request.request_line, "GET /api/v1/tag HTTP/1.1");
        assert_eq!(tags[0].label, "keep");
    }
}
