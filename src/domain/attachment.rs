/// A file ready to be sent as a multipart part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAttachmentRequest {
    pub filename: String,
    pub content_type: String,
    pub content: Vec<u8>,
    pub size: u64,
}
