use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Identifier of a stored PDF as issued by the server.
///
/// The catalog may carry it either as a string or as a number, both are
/// normalised to a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PdfDocumentId(#[serde(deserialize_with = "string_or_number")] pub String);

impl PdfDocumentId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PdfDocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Catalog entry of a PDF the user can chat with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfDocument {
    pub id: PdfDocumentId,

    /// Stored file name, may carry an upload timestamp prefix ("1709123456_report.pdf")
    pub file_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PdfDocument {
    pub fn new(id: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            id: PdfDocumentId::new(id),
            file_name: file_name.into(),
            title: None,
            description: None,
        }
    }

    /// Name shown in the title bar, list and toasts
    pub fn display_name(&self) -> String {
        match self.title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => strip_upload_prefix(&self.file_name).to_string(),
        }
    }
}

/// "1709123456_report.pdf" -> "report.pdf"; anything else is returned unchanged
fn strip_upload_prefix(file_name: &str) -> &str {
    let base = file_name.rsplit('/').next().unwrap_or(file_name);
    match base.split_once('_') {
        Some((prefix, rest))
            if !prefix.is_empty() && !rest.is_empty() && prefix.chars().all(|c| c.is_ascii_digit()) =>
        {
            rest
        }
        _ => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_title() {
        let mut doc = PdfDocument::new("7", "1709123456_report.pdf");
        assert_eq!(doc.display_name(), "report.pdf");

        doc.title = Some("Annual report".to_string());
        assert_eq!(doc.display_name(), "Annual report");

        doc.title = Some("   ".to_string());
        assert_eq!(doc.display_name(), "report.pdf");
    }

    #[test]
    fn test_strip_upload_prefix() {
        assert_eq!(strip_upload_prefix("pdfs/1709123456_notes.pdf"), "notes.pdf");
        assert_eq!(strip_upload_prefix("my_notes.pdf"), "my_notes.pdf");
        assert_eq!(strip_upload_prefix("123_"), "123_");
        assert_eq!(strip_upload_prefix("plain.pdf"), "plain.pdf");
    }

    #[test]
    fn test_catalog_accepts_numeric_ids() {
        let json = r#"[
            {"id": 42, "file_name": "a.pdf"},
            {"id": "b9c1", "file_name": "b.pdf", "title": "B", "description": "PDF file"}
        ]"#;
        let docs: Vec<PdfDocument> = serde_json::from_str(json).unwrap();
        assert_eq!(docs[0].id.as_str(), "42");
        assert_eq!(docs[1].id, PdfDocumentId::new("b9c1"));
        assert_eq!(docs[1].title.as_deref(), Some("B"));
    }
}
