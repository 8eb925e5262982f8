//! Browser glue: server-rendered page data and document metadata

use shared_types::ServerData;

/// Id of the `<script type="application/json">` element the server renders
pub const SERVER_DATA_ELEMENT_ID: &str = "server-data";

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("document unavailable")]
    NoDocument,
    #[error("missing #{0} element")]
    MissingElement(&'static str),
    #[error("invalid server data: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Read the session and page props the server embedded in the page.
pub fn read_server_data() -> Result<ServerData, BootstrapError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(BootstrapError::NoDocument)?;

    let element = document
        .get_element_by_id(SERVER_DATA_ELEMENT_ID)
        .ok_or(BootstrapError::MissingElement(SERVER_DATA_ELEMENT_ID))?;

    parse_server_data(&element.text_content().unwrap_or_default())
}

pub fn parse_server_data(raw: &str) -> Result<ServerData, BootstrapError> {
    Ok(serde_json::from_str(raw)?)
}

pub fn page_title(post_number: i64, post_title: &str) -> String {
    format!("#{post_number} {post_title}")
}

/// Title for the first render; `None` leaves the server's title in place.
pub fn initial_page_title(server_data: Option<&ServerData>) -> Option<String> {
    server_data.map(|data| page_title(data.props.post.number, &data.props.post.title))
}

pub fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_page_with_anonymous_session() {
        let raw = r#"{
            "props": {
                "post": {
                    "id": 1,
                    "number": 42,
                    "title": "Old",
                    "description": "A",
                    "createdOn": "2026-03-01T09:30:00Z",
                    "user": { "id": 9, "name": "Sansa" }
                },
                "subscribed": false,
                "comments": [],
                "tags": []
            }
        }"#;

        let data = parse_server_data(raw).expect("should parse");
        assert!(!data.session.is_authenticated);
        assert_eq!(data.props.post.number, 42);
        assert_eq!(data.props.post.title, "Old");
    }

    #[test]
    fn malformed_page_data_errors() {
        let err = parse_server_data("{\"props\": 3}").expect_err("must fail");
        assert!(err.to_string().starts_with("invalid server data"));
    }

    #[test]
    fn page_title_prefixes_number() {
        assert_eq!(page_title(42, "Dark mode"), "#42 Dark mode");
    }

    #[test]
    fn initial_title_comes_from_page_data() {
        let raw = r#"{
            "props": {
                "post": {
                    "id": 1,
                    "number": 7,
                    "title": "Export to CSV",
                    "createdOn": "2026-03-01T09:30:00Z",
                    "user": { "id": 9, "name": "Sansa" }
                },
                "subscribed": false,
                "comments": [],
                "tags": []
            }
        }"#;
        let data = parse_server_data(raw).expect("should parse");
        assert_eq!(
            initial_page_title(Some(&data)).as_deref(),
            Some("#7 Export to CSV")
        );
        assert_eq!(initial_page_title(None), None);
    }
}
