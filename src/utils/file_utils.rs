use crate::domain::CreateAttachmentRequest;
use crate::utils::error::{NylasError, Result};
use reqwest::multipart::{Form, Part};
use std::path::Path;

/// Reads a file from disk into an attachment, guessing its content type from
/// the extension (`application/octet-stream` when unknown).
pub fn attach_file_request_builder<P: AsRef<Path>>(file_path: P) -> Result<CreateAttachmentRequest> {
    let path = file_path.as_ref();
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| NylasError::InvalidConfigValueError {
            field: "file_path".to_string(),
            value: path.display().to_string(),
            reason: "Path has no valid file name".to_string(),
        })?
        .to_string();

    let size = std::fs::metadata(path)?.len();
    let content = std::fs::read(path)?;
    let content_type = mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string();

    Ok(CreateAttachmentRequest {
        filename,
        content_type,
        content,
        size,
    })
}

/// Multipart body for payloads carrying attachments: a `message` part with
/// the JSON body (minus `attachments`) and one `file{index}` part per file.
pub fn build_form_request(
    mut request_body: serde_json::Value,
    attachments: Vec<CreateAttachmentRequest>,
) -> Result<Form> {
    if let Some(body) = request_body.as_object_mut() {
        body.remove("attachments");
    }
    let message_payload = serde_json::to_string(&request_body)?;

    let mut form = Form::new().text("message", message_payload);
    for (index, attachment) in attachments.into_iter().enumerate() {
        let part = Part::bytes(attachment.content)
            .file_name(attachment.filename)
            .mime_str(&attachment.content_type)?;
        form = form.part(format!("file{}", index), part);
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_attach_file_request_builder_guesses_type() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("agenda.pdf");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"%PDF-1.4 test")
            .unwrap();

        let attachment = attach_file_request_builder(&path).unwrap();
        assert_eq!(attachment.filename, "agenda.pdf");
        assert_eq!(attachment.content_type, "application/pdf");
        assert_eq!(attachment.size, 13);
        assert_eq!(attachment.content, b"%PDF-1.4 test");
    }

    #[test]
    fn test_attach_file_request_builder_unknown_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("blob.zzzunknown");
        std::fs::write(&path, [0u8, 1, 2]).unwrap();

        let attachment = attach_file_request_builder(&path).unwrap();
        assert_eq!(attachment.content_type, "application/octet-stream");
    }

    #[test]
    fn test_attach_missing_file_is_io_error() {
        let err = attach_file_request_builder("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, NylasError::Io(_)));
    }

    #[test]
    fn test_build_form_request_boundary_is_set() {
        let body = serde_json::json!({"subject": "hi", "attachments": []});
        let attachment = CreateAttachmentRequest {
            filename: "a.txt".to_string(),
            content_type: "text/plain".to_string(),
            content: b"hello".to_vec(),
            size: 5,
        };

        let form = build_form_request(body, vec![attachment]).unwrap();
        assert!(!form.boundary().is_empty());
    }

    fn text_attachment(filename: &str, content: &[u8]) -> CreateAttachmentRequest {
        CreateAttachmentRequest {
            filename: filename.to_string(),
            content_type: "text/plain".to_string(),
            content: content.to_vec(),
            size: content.len() as u64,
        }
    }

    #[tokio::test]
    async fn test_build_form_request_parts_on_the_wire() {
        use crate::core::http_client::HttpClient;
        use httpmock::prelude::*;
        use std::time::Duration;

        let server = MockServer::start();
        let upload_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v3/grants/grant-1/messages/send")
                .header_exists("content-type")
                .body_contains("name=\"message\"")
                .body_contains(r#"{"subject":"hi"}"#)
                .body_contains(r#"name="file0"; filename="a.txt""#)
                .body_contains(r#"name="file1"; filename="b.txt""#)
                .body_contains("hello")
                .body_contains("world");
            then.status(200);
        });

        let body = serde_json::json!({"subject": "hi", "attachments": [{"filename": "a.txt"}]});
        let form = build_form_request(
            body,
            vec![text_attachment("a.txt", b"hello"), text_attachment("b.txt", b"world")],
        )
        .unwrap();

        let http = HttpClient::new(&server.base_url(), "key", Duration::from_secs(5)).unwrap();
        http.post("/v3/grants/grant-1/messages/send")
            .form(form)
            .send_empty()
            .await
            .unwrap();

        upload_mock.assert();
    }

    #[test]
    fn test_build_form_request_rejects_bad_mime() {
        let attachment = CreateAttachmentRequest {
            filename: "a.bin".to_string(),
            content_type: "not a mime".to_string(),
            content: vec![],
            size: 0,
        };
        assert!(build_form_request(serde_json::json!({}), vec![attachment]).is_err());
    }
}
