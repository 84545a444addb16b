//! Wire types for the Generative Language API.
//!
//! Structs mirror the JSON shapes of `models/{model}:generateContent`,
//! limited to the fields this app sends and reads: text parts, the
//! search/maps tools, the location hint, and grounding metadata.

use serde::{Deserialize, Serialize};

use compass_types::advice::{AdviceResponse, Citation, CitationKind};

/// Request body for a generateContent call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub tools: Vec<Tool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_config: Option<ToolConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// Text content; responses may carry non-text parts, left absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// A tool made available to the model. Exactly one field is set.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_search: Option<ToolStub>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_maps: Option<ToolStub>,
}

impl Tool {
    pub fn google_search() -> Self {
        Self {
            google_search: Some(ToolStub {}),
            ..Default::default()
        }
    }

    pub fn google_maps() -> Self {
        Self {
            google_maps: Some(ToolStub {}),
            ..Default::default()
        }
    }
}

/// Empty tool configuration object (`{}` on the wire).
#[derive(Debug, Clone, Serialize)]
pub struct ToolStub {}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolConfig {
    pub retrieval_config: RetrievalConfig,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrievalConfig {
    pub lat_lng: LatLng,
}

#[derive(Debug, Clone, Serialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

/// Response body for a generateContent call.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

/// One grounding source; either `web` or `maps` is set.
#[derive(Debug, Clone, Deserialize)]
pub struct GroundingChunk {
    #[serde(default)]
    pub web: Option<GroundingSource>,
    #[serde(default)]
    pub maps: Option<GroundingSource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroundingSource {
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl GenerateContentResponse {
    /// Collapse the wire shape into the domain response.
    ///
    /// Text is the first candidate's text parts concatenated; grounding
    /// chunks become citations in wire order, skipping chunks that carry
    /// neither a web nor a maps source, or no uri.
    pub fn into_advice(self) -> AdviceResponse {
        let Some(candidate) = self.candidates.into_iter().next() else {
            return AdviceResponse::default();
        };

        let text: String = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        let citations = candidate
            .grounding_metadata
            .map(|metadata| {
                metadata
                    .grounding_chunks
                    .into_iter()
                    .filter_map(|chunk| {
                        let (kind, source) = match (chunk.web, chunk.maps) {
                            (Some(web), _) => (CitationKind::Web, web),
                            (None, Some(maps)) => (CitationKind::Maps, maps),
                            (None, None) => return None,
                        };
                        let uri = source.uri?;
                        let title = source.title.unwrap_or_else(|| uri.clone());
                        Some(Citation { kind, uri, title })
                    })
                    .collect()
            })
            .unwrap_or_default();

        AdviceResponse {
            text: if text.is_empty() { None } else { Some(text) },
            citations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_tools_and_location() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some("hello".to_string()),
                }],
            }],
            tools: vec![Tool::google_search(), Tool::google_maps()],
            tool_config: Some(ToolConfig {
                retrieval_config: RetrievalConfig {
                    lat_lng: LatLng {
                        latitude: 40.4,
                        longitude: -3.7,
                    },
                },
            }),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["tools"][0]["googleSearch"], serde_json::json!({}));
        assert_eq!(json["tools"][1]["googleMaps"], serde_json::json!({}));
        assert_eq!(
            json["toolConfig"]["retrievalConfig"]["latLng"]["latitude"],
            serde_json::json!(40.4)
        );
    }

    #[test]
    fn request_omits_tool_config_without_location() {
        let request = GenerateContentRequest {
            contents: Vec::new(),
            tools: vec![Tool::google_search()],
            tool_config: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("toolConfig").is_none());
    }

    #[test]
    fn response_maps_text_and_citations_in_order() {
        let payload = serde_json::json!({
            "candidates": [{
                "content": {"parts": [{"text": "## Advice\n"}, {"text": "body"}], "role": "model"},
                "groundingMetadata": {
                    "groundingChunks": [
                        {"web": {"uri": "https://a.example", "title": "A"}},
                        {"maps": {"uri": "https://maps.example", "title": "M"}},
                        {},
                        {"web": {"title": "no uri"}}
                    ]
                }
            }]
        });

        let response: GenerateContentResponse = serde_json::from_value(payload).unwrap();
        let advice = response.into_advice();

        assert_eq!(advice.text.as_deref(), Some("## Advice\nbody"));
        assert_eq!(advice.citations.len(), 2);
        assert_eq!(advice.citations[0].kind, CitationKind::Web);
        assert_eq!(advice.citations[0].title, "A");
        assert_eq!(advice.citations[1].kind, CitationKind::Maps);
        assert_eq!(advice.citations[1].uri, "https://maps.example");
    }

    #[test]
    fn response_without_candidates_is_empty_advice() {
        let response: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({})).unwrap();
        let advice = response.into_advice();
        assert!(advice.text.is_none());
        assert!(advice.citations.is_empty());
    }

    #[test]
    fn citation_title_falls_back_to_uri() {
        let payload = serde_json::json!({
            "candidates": [{
                "groundingMetadata": {
                    "groundingChunks": [{"web": {"uri": "https://a.example"}}]
                }
            }]
        });
        let response: GenerateContentResponse = serde_json::from_value(payload).unwrap();
        let advice = response.into_advice();
        assert_eq!(advice.citations[0].title, "https://a.example");
    }
}
