/// Re-pretty a response body that looks like JSON, for display only.
/// Anything that fails to parse falls back to the raw text unchanged.
pub fn preview_body(raw: &str) -> String {
    let trimmed = raw.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(raw) {
            if let Ok(pretty) = serde_json::to_string_pretty(&value) {
                return pretty;
            }
        }
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::preview_body;

    #[test]
    fn given_json_object_when_previewed_should_be_prettied() {
        let pretty = preview_body("{\"status\":\"healthy\"}");
        assert!(pretty.contains("\n"));
        assert!(pretty.contains("\"status\": \"healthy\""));
    }

    #[test]
    fn given_json_array_when_previewed_should_be_prettied() {
        let pretty = preview_body("[1,2]");
        assert!(pretty.starts_with('['));
        assert!(pretty.contains('\n'));
    }

    #[test]
    fn given_broken_json_when_previewed_should_fall_back_to_raw_text() {
        assert_eq!(preview_body("{broken"), "{broken");
    }

    #[test]
    fn given_plain_text_when_previewed_should_pass_through() {
        assert_eq!(preview_body("plain body"), "plain body");
    }
}
