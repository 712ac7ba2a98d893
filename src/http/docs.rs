//! Self-describing API documentation.
//!
//! Served with a 404 for any path that is not a known endpoint, so callers
//! who guess wrong learn the real interface from the error itself.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Current API version.
pub const API_VERSION: u32 = 1;

/// Documented usage example for the encode endpoint.
pub const ENCODE_EXAMPLE: &str = "text=evu";

const NOT_FOUND_MESSAGE: &str =
    "The API call you tried to make was not defined. Here's a definition of the API to help you get going :)";

/// Body returned for unknown paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotFoundBody {
    #[serde(rename = "404")]
    pub message: String,
    pub documentation: ApiDocumentation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiDocumentation {
    pub version: u32,
    /// Every version the service answers to.
    pub versions: Vec<u32>,
    /// Path → method → description.
    pub handlers: BTreeMap<String, BTreeMap<String, HandlerDoc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandlerDoc {
    pub usage: String,
    pub examples: Vec<String>,
    pub outputs: OutputDoc,
    pub inputs: BTreeMap<String, InputDoc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputDoc {
    pub format: String,
    pub content_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputDoc {
    #[serde(rename = "type")]
    pub kind: String,
    pub required: bool,
}

/// Describe every endpoint the service exposes.
pub fn api_documentation() -> ApiDocumentation {
    let encode = HandlerDoc {
        usage: "ROT13-encode the lowercase letters of `text`; other characters are dropped"
            .to_string(),
        examples: vec![format!("/v{API_VERSION}/encode?{ENCODE_EXAMPLE}")],
        outputs: OutputDoc {
            format: "JSON (Javascript Serialized Object Notation)".to_string(),
            content_type: "application/json".to_string(),
        },
        inputs: BTreeMap::from([(
            "text".to_string(),
            InputDoc {
                kind: "Basic text / string value".to_string(),
                required: false,
            },
        )]),
    };

    ApiDocumentation {
        version: API_VERSION,
        versions: vec![API_VERSION],
        handlers: BTreeMap::from([(
            "/encode".to_string(),
            BTreeMap::from([("GET".to_string(), encode)]),
        )]),
    }
}

pub fn not_found_body() -> NotFoundBody {
    NotFoundBody {
        message: NOT_FOUND_MESSAGE.to_string(),
        documentation: api_documentation(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_encode_endpoint() {
        let docs = api_documentation();
        assert_eq!(docs.version, 1);
        let encode = &docs.handlers["/encode"]["GET"];
        assert_eq!(encode.examples, vec!["/v1/encode?text=evu".to_string()]);
        assert!(encode.inputs.contains_key("text"));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(not_found_body()).unwrap();
        assert!(json["404"].as_str().unwrap().contains("not defined"));
        assert_eq!(json["documentation"]["version"], 1);
        assert_eq!(json["documentation"]["versions"], serde_json::json!([1]));
        assert_eq!(
            json["documentation"]["handlers"]["/encode"]["GET"]["inputs"]["text"]["type"],
            "Basic text / string value"
        );
    }
}
