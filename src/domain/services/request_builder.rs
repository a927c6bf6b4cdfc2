use crate::domain::entities::webhook::{HttpMethod, WebhookDefinition};
use std::collections::BTreeMap;
use url::form_urlencoded;

/// A request descriptor ready for transport, with disabled entries
/// filtered out and the body rules already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
}

/// Translate a webhook definition into a concrete request descriptor.
pub fn build_request(definition: &WebhookDefinition) -> BuiltRequest {
    // Step 1: Append enabled params to the URL query string.
    let mut url = definition.url.clone();
    let query: String = {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for param in definition.params.iter().filter(|p| p.enabled) {
            serializer.append_pair(&param.key, &param.value);
        }
        serializer.finish()
    };
    if !query.is_empty() {
        url.push(if url.contains('?') { '&' } else { '?' });
        url.push_str(&query);
    }

    // Step 2: Fold enabled headers, last-write-wins on duplicate keys.
    let mut headers = BTreeMap::new();
    for header in definition.headers.iter().filter(|h| h.enabled) {
        headers.insert(header.key.clone(), header.value.clone());
    }

    // Step 3: Attach the body unless the method forbids one. The content
    // is sent verbatim; a Content-Type is injected only when no enabled
    // header already sets one.
    let mut body = None;
    if !definition.method.forbids_body() {
        if let Some(spec) = &definition.body {
            if !spec.content.is_empty() {
                let has_content_type = headers
                    .keys()
                    .any(|key| key.eq_ignore_ascii_case("content-type"));
                if !has_content_type {
                    headers.insert("Content-Type".to_string(), spec.content_type.mime().to_string());
                }
                body = Some(spec.content.clone());
            }
        }
    }

    BuiltRequest {
        url,
        method: definition.method,
        headers,
        body,
    }
}

/// Editor-side JSON syntax check. The dispatcher never calls this; it
/// sends whatever string is stored.
pub fn validate_json_body(content: &str) -> Result<(), String> {
    serde_json::from_str::<serde_json::Value>(content)
        .map(|_| ())
        .map_err(|e| e.to_string())
}
