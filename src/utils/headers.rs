use serde_json::{Map, Value};

/// Build the Mandrill-specific `X-MC-*` headers for a message.
///
/// Tags collapse into a single comma-joined `X-MC-Tags` header and metadata
/// into a single `X-MC-Metadata` header holding a JSON object (insertion
/// order preserved). Callers add the returned pairs to the message before
/// serializing it; empty inputs contribute no headers.
pub fn mandrill_headers(tags: &[&str], metadata: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut headers = Vec::new();

    if !tags.is_empty() {
        headers.push(("X-MC-Tags".to_string(), tags.join(",")));
    }

    if !metadata.is_empty() {
        let object: Map<String, Value> = metadata
            .iter()
            .map(|(key, value)| ((*key).to_string(), Value::String((*value).to_string())))
            .collect();
        headers.push(("X-MC-Metadata".to_string(), Value::Object(object).to_string()));
    }

    headers
}
