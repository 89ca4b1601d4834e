use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Raised when an image payload cannot be decoded
#[derive(Debug, thiserror::Error)]
#[error("image payload is not valid base64: {0}")]
pub struct InvalidImage(#[from] base64::DecodeError);

/// Decoded image bytes, opaque to the pipeline
///
/// The pipeline never inspects the image format; bytes go to the vision
/// capabilities and, when enabled, to image-capable model backends.
#[derive(Clone, PartialEq, Eq)]
pub struct ImagePayload {
    bytes: Vec<u8>,
    media_type: Option<String>,
}

impl ImagePayload {
    pub const fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            media_type: None,
        }
    }

    /// Decode a base64 string, accepting an optional `data:` URL prefix
    ///
    /// `data:image/png;base64,iVBOR...` keeps `image/png` as the media type;
    /// a bare base64 string leaves it unset.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidImage`] if the payload is not valid base64.
    pub fn from_base64(input: &str) -> Result<Self, InvalidImage> {
        let input = input.trim();

        let (media_type, data) = match input.strip_prefix("data:").and_then(|rest| rest.split_once(',')) {
            Some((header, data)) => {
                let mime = header.strip_suffix(";base64").unwrap_or(header);
                let mime = (!mime.is_empty()).then(|| mime.to_owned());
                (mime, data)
            }
            None => (None, input),
        };

        let bytes = STANDARD.decode(data)?;

        Ok(Self { bytes, media_type })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Base64 encoding of the raw bytes, without any `data:` prefix
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }
}

impl std::fmt::Debug for ImagePayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePayload")
            .field("len", &self.bytes.len())
            .field("media_type", &self.media_type)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_base64_decodes() {
        let payload = ImagePayload::from_base64("aGVhcnQ=").unwrap();
        assert_eq!(payload.bytes(), b"heart");
        assert_eq!(payload.media_type(), None);
    }

    #[test]
    fn data_url_prefix_is_stripped() {
        let payload = ImagePayload::from_base64("data:image/png;base64,aGVhcnQ=").unwrap();
        assert_eq!(payload.bytes(), b"heart");
        assert_eq!(payload.media_type(), Some("image/png"));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(ImagePayload::from_base64("not base64 at all!").is_err());
    }

    #[test]
    fn debug_does_not_dump_bytes() {
        let payload = ImagePayload::new(vec![0xff; 64]);
        assert_eq!(format!("{payload:?}"), "ImagePayload { len: 64, media_type: None }");
    }
}
