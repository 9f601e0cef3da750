//! Frames spoken between the page-side script and the daemon.
//!
//! One JSON object per text frame, tagged with `type`. The page reports
//! selections and pings; the daemon answers with `open` commands (the page
//! calls `window.open(url, "_blank")`), `dismissed` notices, pongs, and
//! `error` for frames it cannot decode.

use serde::{Deserialize, Serialize};
use tobira_types::{DismissReason, SelectionReport};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RequestBody {
    Selection(SelectionReport),
    Ping,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseBody {
    Open(OpenCommand),
    Dismissed(DismissedNotice),
    Pong,
    Error(ErrorNotice),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenCommand {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DismissedNotice {
    pub reason: DismissReason,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorNotice {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use tobira_types::SelectionTrigger;

    use super::*;

    #[test]
    fn parse_double_click_selection() {
        let raw = r#"{"type":"selection","text":"日本語","trigger":{"kind":"double_click","ctrl":true},"editable":false}"#;
        let request: RequestBody = serde_json::from_str(raw).unwrap();
        match request {
            RequestBody::Selection(report) => {
                assert_eq!(report.text, "日本語");
                assert!(!report.editable);
                assert_eq!(
                    report.trigger,
                    SelectionTrigger::DoubleClick {
                        ctrl: true,
                        meta: false
                    }
                );
            }
            other => panic!("expected selection frame, got {other:?}"),
        }
    }

    #[test]
    fn parse_pointer_release_defaults_to_primary_button() {
        let raw = r#"{"type":"selection","text":"提","trigger":{"kind":"pointer_release"},"editable":true}"#;
        let request: RequestBody = serde_json::from_str(raw).unwrap();
        match request {
            RequestBody::Selection(report) => {
                assert!(report.editable);
                assert_eq!(
                    report.trigger,
                    SelectionTrigger::PointerRelease { button: 0 }
                );
            }
            other => panic!("expected selection frame, got {other:?}"),
        }
    }

    #[test]
    fn open_and_dismissed_frames_serialize_with_tags() {
        let open = serde_json::to_string(&ResponseBody::Open(OpenCommand {
            url: "https://www.wanikani.com/kanji/%E6%8F%90".to_string(),
        }))
        .unwrap();
        assert!(open.contains(r#""type":"open""#));
        assert!(open.contains("/kanji/"));

        let dismissed = serde_json::to_string(&ResponseBody::Dismissed(DismissedNotice {
            reason: DismissReason::NotJapanese,
        }))
        .unwrap();
        assert!(dismissed.contains(r#""type":"dismissed""#));
        assert!(dismissed.contains(r#""reason":"not_japanese""#));
    }

    #[test]
    fn ping_pong_round_trip() {
        let request: RequestBody = serde_json::from_str(r#"{"type":"ping"}"#).unwrap();
        assert!(matches!(request, RequestBody::Ping));
        assert_eq!(
            serde_json::to_string(&ResponseBody::Pong).unwrap(),
            r#"{"type":"pong"}"#
        );
    }
}
