use crate::error::{FetchError, Result};
use reqwest::Url;
use serde_json::Value;

/// Payload of a `download` action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadSpec {
    pub url: String,
    pub target: Option<String>,
}

impl DownloadSpec {
    /// File name to store the download under: the explicit `target`, or the
    /// last non-empty path segment of the URL.
    pub fn file_name(&self) -> Result<String> {
        if let Some(target) = &self.target {
            return Ok(target.clone());
        }
        let url = Url::parse(&self.url).map_err(|e| invalid("download", e.to_string()))?;
        url.path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
            .map(str::to_string)
            .ok_or_else(|| {
                invalid(
                    "download",
                    format!("cannot derive a file name from {}", self.url),
                )
            })
    }
}

/// Payload of a `git` action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitSpec {
    pub url: String,
    pub commit: Option<String>,
}

/// One step of a dataset recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Download(DownloadSpec),
    Git(GitSpec),
    Command(String),
    License(String),
    Message(String),
    Cite(String),
    Unknown { kind: String },
}

impl Action {
    /// Interpret a `{kind: payload}` record. Only the first key counts.
    pub fn parse(value: &Value) -> Result<Self> {
        let Some((kind, payload)) = value.as_object().and_then(|m| m.iter().next()) else {
            return Err(FetchError::InvalidAction {
                kind: "?".into(),
                reason: format!("expected a single-key object, got {value}"),
            });
        };

        let action = match kind.as_str() {
            "download" => Action::Download(parse_download(payload)?),
            "git" => Action::Git(parse_git(payload)?),
            "command" => Action::Command(text(kind, payload)?),
            "license" => Action::License(text(kind, payload)?),
            "message" => Action::Message(text(kind, payload)?),
            "cite" => Action::Cite(text(kind, payload)?),
            other => Action::Unknown {
                kind: other.to_string(),
            },
        };
        Ok(action)
    }

    pub fn kind(&self) -> &str {
        match self {
            Action::Download(_) => "download",
            Action::Git(_) => "git",
            Action::Command(_) => "command",
            Action::License(_) => "license",
            Action::Message(_) => "message",
            Action::Cite(_) => "cite",
            Action::Unknown { kind } => kind,
        }
    }
}

fn parse_download(payload: &Value) -> Result<DownloadSpec> {
    match payload {
        Value::String(url) => Ok(DownloadSpec {
            url: url.clone(),
            target: None,
        }),
        Value::Object(map) => Ok(DownloadSpec {
            url: required_str("download", map, "url")?,
            target: optional_str("download", map, "target")?,
        }),
        other => Err(invalid("download", format!("unexpected payload {other}"))),
    }
}

fn parse_git(payload: &Value) -> Result<GitSpec> {
    match payload {
        Value::String(url) => Ok(GitSpec {
            url: url.clone(),
            commit: None,
        }),
        Value::Object(map) => Ok(GitSpec {
            url: required_str("git", map, "url")?,
            commit: optional_str("git", map, "commit")?,
        }),
        other => Err(invalid("git", format!("unexpected payload {other}"))),
    }
}

fn text(kind: &str, payload: &Value) -> Result<String> {
    payload
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| invalid(kind, format!("expected a string, got {payload}")))
}

fn required_str(kind: &str, map: &serde_json::Map<String, Value>, field: &str) -> Result<String> {
    optional_str(kind, map, field)?.ok_or_else(|| invalid(kind, format!("missing '{field}'")))
}

fn optional_str(
    kind: &str,
    map: &serde_json::Map<String, Value>,
    field: &str,
) -> Result<Option<String>> {
    match map.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(invalid(
            kind,
            format!("'{field}' must be a string, got {other}"),
        )),
    }
}

fn invalid(kind: &str, reason: String) -> FetchError {
    FetchError::InvalidAction {
        kind: kind.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_text_actions() {
        assert_eq!(
            Action::parse(&json!({"message": "hello"})).unwrap(),
            Action::Message("hello".into())
        );
        assert_eq!(
            Action::parse(&json!({"cite": "@paper"})).unwrap(),
            Action::Cite("@paper".into())
        );
        assert_eq!(
            Action::parse(&json!({"command": "make"})).unwrap(),
            Action::Command("make".into())
        );
        assert_eq!(
            Action::parse(&json!({"license": "LICENSE.txt"})).unwrap(),
            Action::License("LICENSE.txt".into())
        );
    }

    #[test]
    fn git_accepts_url_or_record() {
        assert_eq!(
            Action::parse(&json!({"git": "https://example.com/repo.git"})).unwrap(),
            Action::Git(GitSpec {
                url: "https://example.com/repo.git".into(),
                commit: None
            })
        );
        assert_eq!(
            Action::parse(&json!({"git": {"url": "https://example.com/repo.git", "commit": "abc123"}}))
                .unwrap(),
            Action::Git(GitSpec {
                url: "https://example.com/repo.git".into(),
                commit: Some("abc123".into())
            })
        );
    }

    #[test]
    fn unknown_kind_is_not_an_error() {
        let action = Action::parse(&json!({"teleport": {"x": 1}})).unwrap();
        assert_eq!(
            action,
            Action::Unknown {
                kind: "teleport".into()
            }
        );
        assert_eq!(action.kind(), "teleport");
    }

    #[test]
    fn malformed_actions_are_errors() {
        assert!(Action::parse(&json!({})).is_err());
        assert!(Action::parse(&json!("download")).is_err());
        assert!(Action::parse(&json!({"download": {"target": "x.zip"}})).is_err());
        assert!(Action::parse(&json!({"message": 42})).is_err());
        assert!(Action::parse(&json!({"git": {"url": "u", "commit": 5}})).is_err());
    }

    #[test]
    fn download_file_name_derivation() {
        let explicit = DownloadSpec {
            url: "https://example.com/a/b.zip".into(),
            target: Some("renamed.zip".into()),
        };
        assert_eq!(explicit.file_name().unwrap(), "renamed.zip");

        let derived = DownloadSpec {
            url: "https://example.com/files/data.tar.gz?token=1".into(),
            target: None,
        };
        assert_eq!(derived.file_name().unwrap(), "data.tar.gz");

        let trailing = DownloadSpec {
            url: "https://example.com/files/set/".into(),
            target: None,
        };
        assert_eq!(trailing.file_name().unwrap(), "set");

        let bare = DownloadSpec {
            url: "https://example.com/".into(),
            target: None,
        };
        assert!(bare.file_name().is_err());
    }
}
