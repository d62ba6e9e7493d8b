//! JSON:API response envelope shared by the Explorer and registry endpoints

use log::debug;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{Result, TfeError};

/// One page of a list response
#[derive(Deserialize, Debug)]
pub struct Envelope<A> {
    pub data: Vec<ResourceObject<A>>,
    #[serde(default)]
    pub links: Links,
    #[serde(default)]
    pub meta: Meta,
}

/// Element of the `data` array
#[derive(Deserialize, Debug)]
pub struct ResourceObject<A> {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default)]
    pub resource_type: String,
    pub attributes: A,
}

/// Top-level `links` block
#[derive(Deserialize, Debug, Default, Clone)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_link: Option<String>,
    pub first: Option<String>,
    pub last: Option<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
}

/// Top-level `meta` block
#[derive(Deserialize, Debug, Default, Clone)]
pub struct Meta {
    #[serde(default)]
    pub pagination: PaginationMeta,
}

/// `meta.pagination` details
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct PaginationMeta {
    pub current_page: Option<u32>,
    pub page_size: Option<u32>,
    pub next_page: Option<u32>,
    pub prev_page: Option<u32>,
    pub total_pages: Option<u32>,
    pub total_count: Option<u32>,
}

impl<A> Envelope<A> {
    /// URL of the following page, or `None` when the walk is over
    ///
    /// Both `links.next` and `meta.pagination.next-page` are consulted and
    /// either one being null ends the walk.
    pub fn next_page_url(&self) -> Option<&str> {
        let next_link = self.links.next.as_deref();
        let next_page = self.meta.pagination.next_page;

        match (next_link, next_page) {
            (Some(url), Some(_)) => Some(url),
            (Some(url), None) => {
                debug!(
                    "links.next is '{}' but meta.pagination.next-page is null, stopping",
                    url
                );
                None
            }
            (None, Some(page)) => {
                debug!(
                    "meta.pagination.next-page is {} but links.next is null, stopping",
                    page
                );
                None
            }
            (None, None) => None,
        }
    }
}

/// Decode a raw response body into an envelope
///
/// `context` names the resource and page for the error message.
pub fn decode_envelope<A>(body: &[u8], context: &str) -> Result<Envelope<A>>
where
    A: DeserializeOwned,
{
    serde_json::from_slice(body).map_err(|e| TfeError::Decode {
        context: context.to_string(),
        message: e.to_string(),
    })
}

/// Conversion from a decoded `data` element into a caller-facing record
///
/// Implement this for any record type to use it with
/// `ExplorerClient::fetch_all_pages()`.
pub trait PageRecord: Sized {
    /// Shape of the `attributes` object on the wire
    type Attributes: DeserializeOwned;

    /// Build the record; an `Err` message becomes a decode error for the page
    fn from_resource(
        resource: ResourceObject<Self::Attributes>,
    ) -> std::result::Result<Self, String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize, Debug)]
    struct TestAttributes {
        name: String,
    }

    fn envelope_json(next: serde_json::Value, next_page: serde_json::Value) -> Vec<u8> {
        serde_json::to_vec(&serde_json::json!({
            "data": [
                {"id": "a-1", "type": "test", "attributes": {"name": "one"}}
            ],
            "links": {
                "self": "https://example.com/page1",
                "first": "https://example.com/page1",
                "last": "https://example.com/page2",
                "prev": null,
                "next": next
            },
            "meta": {
                "pagination": {
                    "current-page": 1,
                    "page-size": 100,
                    "next-page": next_page,
                    "prev-page": null,
                    "total-pages": 2,
                    "total-count": 101
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_decode_full_envelope() {
        let body = envelope_json(
            serde_json::json!("https://example.com/page2"),
            serde_json::json!(2),
        );
        let env: Envelope<TestAttributes> = decode_envelope(&body, "test").unwrap();

        assert_eq!(env.data.len(), 1);
        assert_eq!(env.data[0].id, "a-1");
        assert_eq!(env.data[0].resource_type, "test");
        assert_eq!(env.data[0].attributes.name, "one");
        assert_eq!(env.meta.pagination.total_count, Some(101));
        assert_eq!(
            env.links.self_link.as_deref(),
            Some("https://example.com/page1")
        );
        assert_eq!(env.next_page_url(), Some("https://example.com/page2"));
    }

    #[test]
    fn test_minimal_empty_envelope() {
        let body = br#"{"data":[],"links":{"next":null},"meta":{"pagination":{"next-page":null}}}"#;
        let env: Envelope<TestAttributes> = decode_envelope(body, "test").unwrap();
        assert!(env.data.is_empty());
        assert!(env.next_page_url().is_none());
    }

    #[test]
    fn test_next_link_without_next_page_stops() {
        let body = envelope_json(
            serde_json::json!("https://example.com/page2"),
            serde_json::Value::Null,
        );
        let env: Envelope<TestAttributes> = decode_envelope(&body, "test").unwrap();
        assert!(env.next_page_url().is_none());
    }

    #[test]
    fn test_next_page_without_next_link_stops() {
        let body = envelope_json(serde_json::Value::Null, serde_json::json!(2));
        let env: Envelope<TestAttributes> = decode_envelope(&body, "test").unwrap();
        assert!(env.next_page_url().is_none());
    }

    #[test]
    fn test_missing_links_and_meta_stop() {
        let body = br#"{"data":[{"attributes":{"name":"x"}}]}"#;
        let env: Envelope<TestAttributes> = decode_envelope(body, "test").unwrap();
        assert_eq!(env.data.len(), 1);
        assert!(env.next_page_url().is_none());
    }

    #[test]
    fn test_invalid_json_is_decode_error() {
        let result = decode_envelope::<TestAttributes>(b"not json", "modules (page 4)");
        match result.unwrap_err() {
            TfeError::Decode { context, .. } => assert_eq!(context, "modules (page 4)"),
            other => panic!("Expected TfeError::Decode, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_required_attribute_is_decode_error() {
        let body = br#"{"data":[{"id":"x","type":"t","attributes":{}}]}"#;
        let result = decode_envelope::<TestAttributes>(body, "test");
        match result.unwrap_err() {
            TfeError::Decode { message, .. } => assert!(message.contains("name")),
            other => panic!("Expected TfeError::Decode, got {:?}", other),
        }
    }

    #[test]
    fn test_mistyped_attribute_is_decode_error() {
        let body = br#"{"data":[{"attributes":{"name":42}}]}"#;
        assert!(decode_envelope::<TestAttributes>(body, "test").is_err());
    }
}
