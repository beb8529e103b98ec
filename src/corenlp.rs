// Remote constituency parsing over a CoreNLP-compatible endpoint.
// - POSTs the raw sentence with the annotator properties the service expects.
// - Extracts the bracketed parse of the first sentence from the response JSON.
// - Keeps JSON extraction separate from transport so it stays unit-testable.
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorenlpError {
    #[error("request to the parse endpoint failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("parse endpoint returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("parse endpoint response was not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("parse endpoint response carried no parse for the sentence")]
    MissingParse,
}

const ANNOTATOR_PROPERTIES: &str = r#"{"annotators": "tokenize,ssplit,pos,parse"}"#;

pub fn fetch_parse(
    endpoint: &str,
    sentence: &str,
    timeout: Duration,
) -> Result<String, CorenlpError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?;

    let response = client
        .post(endpoint)
        .query(&[
            ("properties", ANNOTATOR_PROPERTIES),
            ("pipelineLanguage", "en"),
        ])
        .body(sentence.to_string())
        .send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(CorenlpError::Status(status));
    }

    extract_parse(&response.text()?)
}

pub fn extract_parse(body: &str) -> Result<String, CorenlpError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    value
        .get("sentences")
        .and_then(|sentences| sentences.get(0))
        .and_then(|sentence| sentence.get("parse"))
        .and_then(|parse| parse.as_str())
        .map(str::to_string)
        .ok_or(CorenlpError::MissingParse)
}
