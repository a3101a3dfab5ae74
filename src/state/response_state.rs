use std::time::Duration;

use chrono::{DateTime, Utc};
use humansize::{format_size, DECIMAL};

#[derive(Debug, Clone, PartialEq)]
pub struct ResponseState {
    pub status: u16,
    pub status_text: String,
    /// Header multimap; a name appears once per value.
    pub headers: Vec<(String, String)>,
    pub body: String,
    pub size_bytes: usize,
    pub elapsed: Duration,
    pub received_at: DateTime<Utc>,
}

/// What a dispatch produced, ready for the response popup.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseView {
    Received(ResponseState),
    Failed(String),
    UnknownMethod(String),
}

/// Status, timing and the `Response Headers:` title.
const SUMMARY_LINES: usize = 3;

impl ResponseView {
    pub fn is_success(&self) -> bool {
        matches!(self, ResponseView::Received(r) if (200..300).contains(&r.status))
    }

    pub fn lines(&self) -> Vec<String> {
        match self {
            ResponseView::Received(resp) => {
                let mut lines = vec![
                    format!("Response status: {} {}", resp.status, resp.status_text)
                        .trim_end()
                        .to_string(),
                    format!(
                        "Took {} · {} · {}",
                        humantime::format_duration(round_to_millis(resp.elapsed)),
                        format_size(resp.size_bytes as u64, DECIMAL),
                        resp.received_at.format("%H:%M:%S"),
                    ),
                    "Response Headers:".to_string(),
                ];
                lines.extend(
                    resp.headers
                        .iter()
                        .map(|(name, value)| format!("    {}: {}", name, value)),
                );
                lines.push(String::new());
                lines.extend(resp.body.lines().map(str::to_string));
                lines
            }
            ResponseView::Failed(msg) => vec![format!("ERROR: {}", msg)],
            ResponseView::UnknownMethod(method) => {
                vec![format!("UNKNOWN HTTP METHOD: {}", method)]
            }
        }
    }

    /// Same as `lines().len()` without formatting anything.
    pub fn line_count(&self) -> usize {
        match self {
            ResponseView::Received(resp) => {
                SUMMARY_LINES + resp.headers.len() + 1 + resp.body.lines().count()
            }
            ResponseView::Failed(_) | ResponseView::UnknownMethod(_) => 1,
        }
    }
}

fn round_to_millis(elapsed: Duration) -> Duration {
    Duration::from_millis(elapsed.as_millis() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResponseState {
        ResponseState {
            status: 201,
            status_text: "Created".into(),
            headers: vec![
                ("set-cookie".into(), "a=1".into()),
                ("set-cookie".into(), "b=2".into()),
            ],
            body: "line one\nline two".into(),
            size_bytes: 17,
            elapsed: Duration::from_micros(12_345),
            received_at: Utc::now(),
        }
    }

    #[test]
    fn test_lines_layout() {
        let view = ResponseView::Received(sample());
        let lines = view.lines();
        assert_eq!(lines[0], "Response status: 201 Created");
        assert!(lines[1].starts_with("Took 12ms"));
        assert_eq!(lines[2], "Response Headers:");
        assert_eq!(lines[3], "    set-cookie: a=1");
        assert_eq!(lines[4], "    set-cookie: b=2");
        assert_eq!(lines[5], "");
        assert_eq!(&lines[6..], ["line one", "line two"]);
        assert_eq!(view.line_count(), 8);
        assert!(view.is_success());
    }

    #[test]
    fn test_line_count_matches_lines() {
        for body in ["", "one", "one\n", "a\n\nb\r\nc"] {
            for headers in [Vec::new(), sample().headers] {
                let view = ResponseView::Received(ResponseState {
                    body: body.into(),
                    headers,
                    ..sample()
                });
                assert_eq!(view.line_count(), view.lines().len(), "body {:?}", body);
            }
        }
        let failed = ResponseView::Failed("multi\nline".into());
        assert_eq!(failed.line_count(), failed.lines().len());
    }

    #[test]
    fn test_error_views_are_single_line() {
        let failed = ResponseView::Failed("connection refused".into());
        assert_eq!(failed.lines(), vec!["ERROR: connection refused".to_string()]);
        assert!(!failed.is_success());
        let unknown = ResponseView::UnknownMethod("FETCH".into());
        assert_eq!(unknown.lines(), vec!["UNKNOWN HTTP METHOD: FETCH".to_string()]);
    }
}
