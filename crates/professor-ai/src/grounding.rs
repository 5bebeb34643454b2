//! Grounding metadata and the sources cited in an answer.
//!
//! When search grounding is on, Gemini attaches `groundingMetadata` to a
//! candidate. Only its web citations matter to the conversation; everything
//! else in the payload is ignored.

use serde::{Deserialize, Serialize};

/// Typed view of a candidate's `groundingMetadata`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GroundingMetadata {
    pub grounding_chunks: Vec<GroundingChunk>,
    pub web_search_queries: Vec<String>,
}

/// One citation chunk. Only web citations are understood.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundingChunk {
    pub web: Option<WebSource>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebSource {
    pub uri: String,
    pub title: Option<String>,
}

impl GroundingMetadata {
    /// Decode a raw payload, or `None` when it does not have the expected shape.
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        if value.is_null() {
            return None;
        }
        match serde_json::from_value(value.clone()) {
            Ok(metadata) => Some(metadata),
            Err(e) => {
                tracing::debug!(error = %e, "ignoring malformed grounding metadata");
                None
            }
        }
    }
}

/// A web page the answer was grounded on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub uri: String,
    pub title: Option<String>,
}

/// List the web sources cited by `metadata`, in the order given.
///
/// Absent metadata, or metadata without web citations, gives an empty list.
pub fn extract_sources(metadata: Option<&GroundingMetadata>) -> Vec<Source> {
    let Some(metadata) = metadata else {
        return Vec::new();
    };

    metadata
        .grounding_chunks
        .iter()
        .filter_map(|chunk| chunk.web.as_ref())
        .map(|web| Source {
            uri: web.uri.clone(),
            title: web.title.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn web(uri: &str, title: Option<&str>) -> GroundingChunk {
        GroundingChunk {
            web: Some(WebSource {
                uri: uri.into(),
                title: title.map(Into::into),
            }),
        }
    }

    #[test]
    fn absent_or_empty_metadata_gives_no_sources() {
        assert!(extract_sources(None).is_empty());
        assert!(extract_sources(Some(&GroundingMetadata::default())).is_empty());

        let decoded = GroundingMetadata::from_value(&json!({})).unwrap();
        assert!(extract_sources(Some(&decoded)).is_empty());
    }

    #[test]
    fn keeps_only_web_chunks_in_order() {
        let metadata = GroundingMetadata {
            grounding_chunks: vec![
                web("https://a.example/1", Some("A")),
                GroundingChunk { web: None },
                web("https://b.example/2", None),
                GroundingChunk::default(),
                web("https://c.example/3", Some("C")),
            ],
            web_search_queries: vec!["relatividade".into()],
        };

        let sources = extract_sources(Some(&metadata));
        assert_eq!(
            sources,
            vec![
                Source {
                    uri: "https://a.example/1".into(),
                    title: Some("A".into())
                },
                Source {
                    uri: "https://b.example/2".into(),
                    title: None
                },
                Source {
                    uri: "https://c.example/3".into(),
                    title: Some("C".into())
                },
            ]
        );
    }

    #[test]
    fn extraction_is_repeatable() {
        let metadata = GroundingMetadata {
            grounding_chunks: vec![web("https://a.example", Some("A"))],
            web_search_queries: Vec::new(),
        };
        let first = extract_sources(Some(&metadata));
        let second = extract_sources(Some(&metadata));
        assert_eq!(first, second);
        assert_eq!(metadata.grounding_chunks.len(), 1);
    }

    #[test]
    fn decodes_service_payload() {
        let payload = json!({
            "webSearchQueries": ["quem descobriu o brasil"],
            "groundingChunks": [
                { "web": { "uri": "https://vertexaisearch.example/r1", "title": "wikipedia.org" } },
                { "retrievedContext": { "uri": "gs://bucket/doc" } },
                { "web": { "uri": "https://vertexaisearch.example/r2" } }
            ],
            "groundingSupports": [{ "segment": { "startIndex": 0 } }]
        });

        let metadata = GroundingMetadata::from_value(&payload).unwrap();
        assert_eq!(metadata.web_search_queries, vec!["quem descobriu o brasil"]);

        let sources = extract_sources(Some(&metadata));
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].title.as_deref(), Some("wikipedia.org"));
        assert_eq!(sources[1].title, None);
    }

    #[test]
    fn malformed_payload_degrades_to_none() {
        assert!(GroundingMetadata::from_value(&json!(null)).is_none());
        assert!(GroundingMetadata::from_value(&json!("nope")).is_none());
        assert!(GroundingMetadata::from_value(&json!({ "groundingChunks": 3 })).is_none());
    }
}
