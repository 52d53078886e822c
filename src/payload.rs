use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::NavigationPayload;

/// Reads the payload the quiz is started with. No path means no payload,
/// which the view turns into an empty quiz.
pub fn load_payload(path: Option<&Path>) -> Result<Option<NavigationPayload>> {
    let Some(path) = path else {
        log::info!("no payload given, starting empty");
        return Ok(None);
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("Cannot read payload file {}", path.display()))?;

    let payload = if is_json(path) {
        parse_json(&content)
    } else {
        parse_yaml(&content)
    }
    .with_context(|| format!("Invalid payload in {}", path.display()))?;

    log::info!(
        "loaded payload from {} ({} questions)",
        path.display(),
        payload.questions.len()
    );
    Ok(Some(payload))
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

pub fn parse_yaml(content: &str) -> Result<NavigationPayload> {
    if content.trim().is_empty() {
        return Ok(NavigationPayload::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

pub fn parse_json(content: &str) -> Result<NavigationPayload> {
    Ok(serde_json::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_missing_fields_default() {
        let payload = parse_yaml("passage: Hello\n").unwrap();
        assert_eq!(payload.passage, "Hello");
        assert!(payload.questions.is_empty());

        let payload = parse_yaml("questions:\n  - question_text: Q\n    choice1: a\n").unwrap();
        assert_eq!(payload.passage, "");
        assert_eq!(payload.questions[0].choice1, "a");
        assert_eq!(payload.questions[0].choice5, "");
    }

    #[test]
    fn empty_yaml_is_empty_payload() {
        assert_eq!(parse_yaml("  \n").unwrap(), NavigationPayload::default());
    }

    #[test]
    fn json_payload() {
        let payload = parse_json(
            r#"{"passage":"p","questions":[{"question_text":"q","choice1":"1","choice2":"2"}]}"#,
        )
        .unwrap();
        assert_eq!(payload.questions[0].choice2, "2");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_json("{\"passage\": 3").is_err());
    }

    #[test]
    fn no_path_is_no_payload() {
        assert!(load_payload(None).unwrap().is_none());
    }
}
