/// An image returned by an image-generating endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    url: String,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

impl Image {
    pub fn new(url: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            url: url.into(),
            content_type,
            bytes,
        }
    }

    /// The URL the image was fetched from, with any `key` parameter masked.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Value of the `Content-Type` header, e.g. `image/png`.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for Image {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
