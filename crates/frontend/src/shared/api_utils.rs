//! API utilities for client-server communication
//!
//! Provides URL construction, multipart form building and a single decoder
//! for every endpoint answer.

use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use web_sys::FormData;

use super::error::ChatError;

/// Raw text kept in decode errors
const RAW_PREVIEW_CHARS: usize = 100;

/// Build a full API URL from a path
///
/// # Arguments
/// * `base` - configured base URL, empty for same origin
/// * `path` - endpoint path starting with "/"
///
/// # Example
/// ```ignore
/// let url = api_url("https://pdf.example.com/", "/chat");
/// assert_eq!(url, "https://pdf.example.com/chat");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

fn is_json(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.contains("application/json"))
}

/// Turn an HTTP answer into a typed payload.
///
/// JSON bodies are decoded whatever the status, so `{"error": ...}` answers
/// of failed requests keep the server's text. Everything else becomes an
/// error carrying the body.
pub fn decode_body<T: DeserializeOwned>(
    status: u16,
    ok: bool,
    content_type: Option<&str>,
    body: &str,
) -> Result<T, ChatError> {
    if !is_json(content_type) {
        log::warn!("Unexpected content type: {:?}", content_type);
        return Err(if ok {
            ChatError::UnexpectedContent {
                content_type: content_type.unwrap_or("unknown").to_string(),
                body: body.to_string(),
            }
        } else {
            ChatError::Http {
                status,
                body: body.to_string(),
            }
        });
    }

    serde_json::from_str(body).map_err(|e| {
        if ok {
            let preview: String = body.chars().take(RAW_PREVIEW_CHARS).collect();
            ChatError::Decode(format!("{}. Raw response: {}...", e, preview))
        } else {
            ChatError::Http {
                status,
                body: body.to_string(),
            }
        }
    })
}

/// Like [`decode_body`], but any non-2xx answer is an `Http` error even
/// when its body is JSON
pub fn decode_ok_body<T: DeserializeOwned>(
    status: u16,
    ok: bool,
    content_type: Option<&str>,
    body: &str,
) -> Result<T, ChatError> {
    if !ok {
        return Err(ChatError::Http {
            status,
            body: body.to_string(),
        });
    }
    decode_body(status, ok, content_type, body)
}

/// Read the body once and decode it
pub async fn read_response<T: DeserializeOwned>(response: Response) -> Result<T, ChatError> {
    let (status, ok, content_type, body) = read_parts(response).await?;
    decode_body(status, ok, content_type.as_deref(), &body)
}

/// Read the body once; non-2xx answers are errors whatever they carry
pub async fn read_ok_response<T: DeserializeOwned>(response: Response) -> Result<T, ChatError> {
    let (status, ok, content_type, body) = read_parts(response).await?;
    decode_ok_body(status, ok, content_type.as_deref(), &body)
}

async fn read_parts(response: Response) -> Result<(u16, bool, Option<String>, String), ChatError> {
    let status = response.status();
    let ok = response.ok();
    let content_type = response.headers().get("content-type");
    log::debug!("Response {} ({:?})", status, content_type);

    let body = response
        .text()
        .await
        .map_err(|e| ChatError::Transport(e.to_string()))?;
    Ok((status, ok, content_type, body))
}

/// Multipart body from text fields
pub fn form_data(fields: &[(&'static str, String)]) -> Result<FormData, ChatError> {
    let form = FormData::new().map_err(|e| ChatError::Transport(format!("{:?}", e)))?;
    for (name, value) in fields {
        form.append_with_str(name, value)
            .map_err(|e| ChatError::Transport(format!("{:?}", e)))?;
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u101_select_pdf::PdfLoadStatusResponse;
    use contracts::usecases::u102_ask_question::ChatResponse;

    const JSON: Option<&str> = Some("application/json; charset=utf-8");

    #[test]
    fn test_api_url() {
        assert_eq!(api_url("", "/chat"), "/chat");
        assert_eq!(api_url("https://pdf.example.com/", "/chat"), "https://pdf.example.com/chat");
        assert_eq!(api_url("http://localhost:5000", "/select_pdf"), "http://localhost:5000/select_pdf");
    }

    #[test]
    fn test_json_error_body_keeps_server_text() {
        let response: ChatResponse =
            decode_body(400, false, JSON, r#"{"error": "No question or image provided"}"#).unwrap();
        assert_eq!(response.error.as_deref(), Some("No question or image provided"));
    }

    #[test]
    fn test_strict_decoding_rejects_json_error_answers() {
        let err = decode_ok_body::<PdfLoadStatusResponse>(
            400,
            false,
            JSON,
            r#"{"error": "PDF ID not provided"}"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ChatError::Http {
                status: 400,
                body: r#"{"error": "PDF ID not provided"}"#.to_string()
            }
        );
        assert!(err.is_transport());

        let ready: PdfLoadStatusResponse =
            decode_ok_body(200, true, JSON, r#"{"success": true, "status": "ready"}"#).unwrap();
        assert!(ready.is_ready());
    }

    #[test]
    fn test_broken_json() {
        let err = decode_body::<ChatResponse>(200, true, JSON, "{\"success\": tru").unwrap_err();
        assert!(matches!(&err, ChatError::Decode(msg) if msg.contains("Raw response: {\"success\": tru")));

        let err = decode_body::<ChatResponse>(500, false, JSON, "{oops").unwrap_err();
        assert_eq!(
            err,
            ChatError::Http {
                status: 500,
                body: "{oops".to_string()
            }
        );
    }

    #[test]
    fn test_decode_preview_is_truncated() {
        let body = format!("[{}", "x".repeat(300));
        match decode_body::<ChatResponse>(200, true, JSON, &body) {
            Err(ChatError::Decode(msg)) => {
                let raw = msg.split("Raw response: ").nth(1).unwrap();
                assert_eq!(raw.len(), RAW_PREVIEW_CHARS + 3);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_non_json_bodies() {
        let err = decode_body::<ChatResponse>(200, true, Some("text/html"), "<p>hi</p>").unwrap_err();
        assert_eq!(
            err,
            ChatError::UnexpectedContent {
                content_type: "text/html".to_string(),
                body: "<p>hi</p>".to_string()
            }
        );

        let err = decode_body::<ChatResponse>(502, false, None, "Bad Gateway").unwrap_err();
        assert_eq!(
            err,
            ChatError::Http {
                status: 502,
                body: "Bad Gateway".to_string()
            }
        );

        let err = decode_body::<ChatResponse>(200, true, None, "").unwrap_err();
        assert!(matches!(err, ChatError::UnexpectedContent { content_type, .. } if content_type == "unknown"));
    }
}
