use bollard::models::ImageSummary;
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

/// Tag the runtime reports for dangling layers
pub const PLACEHOLDER_TAG: &str = "<none>:<none>";

/// Source label for images held by the connected runtime
pub const LOCAL_SOURCE: &str = "local";

/// One repository tag of an image known to the runtime.
///
/// Field names follow the Docker Engine casing so the raw summary and the
/// flattened fields read consistently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ImageRecord {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "RepoTags")]
    pub repo_tag: String,
    #[serde(rename = "Source")]
    pub source: String,
    /// Summary exactly as returned by the runtime
    #[serde(rename = "APIImages")]
    #[schema(value_type = Object)]
    pub summary: ImageSummary,
}

impl ImageRecord {
    /// Flatten runtime summaries into one record per real tag.
    ///
    /// An image is dropped entirely when it has no tags or its first tag is
    /// the placeholder. Placeholder tags appearing later are skipped on their
    /// own. Output keeps the runtime's order.
    pub fn from_summaries(images: Vec<ImageSummary>) -> Vec<ImageRecord> {
        let mut records = Vec::new();

        for image in images {
            match image.repo_tags.first() {
                None => continue,
                Some(first) if first == PLACEHOLDER_TAG => continue,
                Some(_) => {}
            }

            for tag in image.repo_tags.iter().filter(|t| *t != PLACEHOLDER_TAG) {
                debug!("RepoTags: {}", tag);
                records.push(ImageRecord {
                    id: image.id.clone(),
                    repo_tag: tag.clone(),
                    source: LOCAL_SOURCE.to_string(),
                    summary: image.clone(),
                });
            }
        }

        records
    }
}

/// Where the image listing should come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Local,
    /// Any other registry name; nothing is served for these yet
    Other(String),
}

impl ImageSource {
    pub fn from_query(source: Option<&str>) -> Self {
        match source {
            None => ImageSource::Local,
            Some(s) if s == LOCAL_SOURCE => ImageSource::Local,
            Some(s) => ImageSource::Other(s.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(id: &str, tags: &[&str]) -> ImageSummary {
        ImageSummary {
            id: id.to_string(),
            repo_tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_one_record_per_tag() {
        let records =
            ImageRecord::from_summaries(vec![image("sha256:abc", &["app:v1", "app:latest"])]);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].repo_tag, "app:v1");
        assert_eq!(records[1].repo_tag, "app:latest");
        for record in &records {
            assert_eq!(record.id, "sha256:abc");
            assert_eq!(record.source, "local");
            assert_eq!(record.summary.id, "sha256:abc");
        }
    }

    #[test]
    fn test_placeholder_image_excluded() {
        let records = ImageRecord::from_summaries(vec![image("sha256:dangling", &[PLACEHOLDER_TAG])]);
        assert!(records.is_empty());
    }

    #[test]
    fn test_placeholder_first_drops_whole_image() {
        let records = ImageRecord::from_summaries(vec![image(
            "sha256:mixed",
            &[PLACEHOLDER_TAG, "app:v2"],
        )]);
        assert!(records.is_empty());
    }

    #[test]
    fn test_trailing_placeholder_not_emitted() {
        let records = ImageRecord::from_summaries(vec![image(
            "sha256:mixed",
            &["app:v2", PLACEHOLDER_TAG],
        )]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].repo_tag, "app:v2");
    }

    #[test]
    fn test_untagged_image_skipped() {
        let records = ImageRecord::from_summaries(vec![
            image("sha256:layer", &[]),
            image("sha256:web", &["web:1.0"]),
        ]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "sha256:web");
    }

    #[test]
    fn test_runtime_order_preserved() {
        let records = ImageRecord::from_summaries(vec![
            image("sha256:zzz", &["zeta:1"]),
            image("sha256:aaa", &["alpha:1"]),
        ]);
        let tags: Vec<&str> = records.iter().map(|r| r.repo_tag.as_str()).collect();
        assert_eq!(tags, vec!["zeta:1", "alpha:1"]);
    }

    #[test]
    fn test_serialized_field_names() {
        let records = ImageRecord::from_summaries(vec![image("sha256:abc", &["app:v1"])]);
        let value = serde_json::to_value(&records[0]).unwrap();

        assert_eq!(value["Id"], "sha256:abc");
        assert_eq!(value["RepoTags"], "app:v1");
        assert_eq!(value["Source"], "local");
        assert_eq!(value["APIImages"]["Id"], "sha256:abc");
    }

    #[test]
    fn test_source_from_query() {
        assert_eq!(ImageSource::from_query(None), ImageSource::Local);
        assert_eq!(ImageSource::from_query(Some("local")), ImageSource::Local);
        assert_eq!(
            ImageSource::from_query(Some("dockerhub")),
            ImageSource::Other("dockerhub".to_string())
        );
    }
}
