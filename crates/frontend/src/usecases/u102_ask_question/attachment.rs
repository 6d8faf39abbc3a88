use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use wasm_bindgen_futures::JsFuture;

use crate::shared::error::{AttachmentError, ChatError};
use crate::shared::session::PickedFile;

/// Image waiting to be sent with the next message
#[derive(Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
    /// `data:` URL used for the preview and the optimistic bubble
    pub data_url: String,
}

impl ImageAttachment {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        let mime = mime.into();
        let data_url = format!("data:{};base64,{}", mime, STANDARD.encode(&bytes));
        Self {
            name: name.into(),
            mime,
            bytes,
            data_url,
        }
    }
}

impl std::fmt::Debug for ImageAttachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageAttachment")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Check type and size before anything is read
pub fn validate_image(mime: &str, size: u64, max_bytes: u64) -> Result<(), AttachmentError> {
    if !mime.starts_with("image/") {
        return Err(AttachmentError::NotAnImage {
            mime: mime.to_string(),
        });
    }
    if size > max_bytes {
        return Err(AttachmentError::TooLarge {
            size,
            limit: max_bytes,
        });
    }
    Ok(())
}

/// Validate a picked file and read it into an attachment
pub async fn load_attachment(
    file: &dyn PickedFile,
    max_bytes: u64,
) -> Result<ImageAttachment, ChatError> {
    let mime = file.mime();
    validate_image(&mime, file.size(), max_bytes)?;

    let bytes = file.read_bytes().await?;
    log::debug!("Attachment read: {} ({}, {} bytes)", file.name(), mime, bytes.len());
    Ok(ImageAttachment::new(file.name(), mime, bytes))
}

#[async_trait(?Send)]
impl PickedFile for web_sys::File {
    fn name(&self) -> String {
        web_sys::File::name(self)
    }

    fn mime(&self) -> String {
        web_sys::Blob::type_(self)
    }

    fn size(&self) -> u64 {
        web_sys::Blob::size(self) as u64
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, ChatError> {
        let buffer = JsFuture::from(web_sys::Blob::array_buffer(self))
            .await
            .map_err(|e| ChatError::File(format!("{:?}", e)))?;
        Ok(js_sys::Uint8Array::new(&buffer).to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::session::testing::FakeFile;

    const LIMIT: u64 = 5 * 1024 * 1024;

    #[test]
    fn test_non_images_are_rejected() {
        for mime in ["application/pdf", "text/plain", "", "video/mp4", "imagex/png"] {
            assert!(
                matches!(
                    validate_image(mime, 10, LIMIT),
                    Err(AttachmentError::NotAnImage { .. })
                ),
                "mime {:?}",
                mime
            );
        }
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        assert!(validate_image("image/png", LIMIT, LIMIT).is_ok());
        assert_eq!(
            validate_image("image/png", LIMIT + 1, LIMIT),
            Err(AttachmentError::TooLarge {
                size: LIMIT + 1,
                limit: LIMIT
            })
        );
        assert!(validate_image("image/jpeg", 0, LIMIT).is_ok());
    }

    #[test]
    fn test_data_url() {
        let attachment = ImageAttachment::new("dot.png", "image/png", vec![1, 2, 3]);
        assert_eq!(attachment.data_url, "data:image/png;base64,AQID");
        assert_eq!(format!("{:?}", attachment), "ImageAttachment { name: \"dot.png\", mime: \"image/png\", len: 3 }");
    }

    #[tokio::test]
    async fn test_oversized_file_is_never_read() {
        let file = FakeFile::new("big.png", "image/png", vec![0; 16]).with_declared_size(LIMIT + 1);
        let result = load_attachment(&file, LIMIT).await;
        assert!(matches!(
            result,
            Err(ChatError::Attachment(AttachmentError::TooLarge { .. }))
        ));
        assert_eq!(file.reads(), 0);
    }

    #[tokio::test]
    async fn test_valid_file_is_read() {
        let file = FakeFile::new("cat.gif", "image/gif", b"GIF89a".to_vec());
        let attachment = load_attachment(&file, LIMIT).await.unwrap();
        assert_eq!(attachment.name, "cat.gif");
        assert_eq!(attachment.bytes, b"GIF89a".to_vec());
        assert!(attachment.data_url.starts_with("data:image/gif;base64,"));
        assert_eq!(file.reads(), 1);
    }
}
