//! Message bodies: plain text or ordered text/image parts.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Image reference attached to a message.
///
/// `url` holds either a remote URL or base64-encoded image data; the two are
/// not distinguished here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageUrl {
    /// Remote URL or base64 payload.
    pub url: String,
    /// Processing fidelity hint such as `low` or `high`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ImageUrl {
    /// Image reference with the provider's default detail.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            detail: None,
        }
    }

    /// Set the detail hint.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// One piece of a multi-part message body.
///
/// Provider keys beyond `type` and the payload field are carried in `extra`
/// so a part survives a pass-through copy unchanged. `extra` must not repeat
/// `type`, `text` or `image_url`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// Text segment.
    Text {
        text: String,
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
    /// Image reference.
    ImageUrl {
        image_url: ImageUrl,
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
}

impl ContentPart {
    pub fn text(text: impl Into<String>) -> Self {
        ContentPart::Text {
            text: text.into(),
            extra: Map::new(),
        }
    }

    pub fn image(image_url: ImageUrl) -> Self {
        ContentPart::ImageUrl {
            image_url,
            extra: Map::new(),
        }
    }

    /// Attach a provider key. `type` and the payload key are ignored.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        let (payload_key, extra) = match &mut self {
            ContentPart::Text { extra, .. } => ("text", extra),
            ContentPart::ImageUrl { extra, .. } => ("image_url", extra),
        };
        if key != "type" && key != payload_key {
            extra.insert(key, value.into());
        }
        self
    }
}

/// Message body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Content {
    /// Single plain string.
    Text(String),
    /// Ordered text and image parts.
    Parts(Vec<ContentPart>),
}

impl Content {
    /// Flatten to plain text. Text parts are joined with newlines; images are skipped.
    pub fn as_text(&self) -> String {
        match self {
            Content::Text(text) => text.clone(),
            Content::Parts(parts) => parts
                .iter()
                .filter_map(|part| match part {
                    ContentPart::Text { text, .. } => Some(text.as_str()),
                    ContentPart::ImageUrl { .. } => None,
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// Image references in body order.
    pub fn images(&self) -> impl Iterator<Item = &ImageUrl> {
        let parts: &[ContentPart] = match self {
            Content::Text(_) => &[],
            Content::Parts(parts) => parts,
        };
        parts.iter().filter_map(|part| match part {
            ContentPart::ImageUrl { image_url, .. } => Some(image_url),
            ContentPart::Text { .. } => None,
        })
    }

    pub fn is_multipart(&self) -> bool {
        matches!(self, Content::Parts(_))
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<Vec<ContentPart>> for Content {
    fn from(parts: Vec<ContentPart>) -> Self {
        Content::Parts(parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn image_url_without_detail_omits_it() {
        let image = ImageUrl::new("https://example.com/cat.png");
        assert_eq!(image.detail, None);
        assert_eq!(
            serde_json::to_value(&image).expect("serialize"),
            json!({ "url": "https://example.com/cat.png" })
        );
    }

    #[test]
    fn parts_use_chat_completion_shape() {
        let content = Content::Parts(vec![
            ContentPart::text("what is this?"),
            ContentPart::image(ImageUrl::new("data:image/png;base64,AAAA").with_detail("low")),
        ]);
        assert_eq!(
            serde_json::to_value(&content).expect("serialize"),
            json!([
                { "type": "text", "text": "what is this?" },
                {
                    "type": "image_url",
                    "image_url": { "url": "data:image/png;base64,AAAA", "detail": "low" }
                }
            ])
        );
    }

    #[test]
    fn untagged_content_accepts_string_or_array() {
        let text: Content = serde_json::from_value(json!("hello")).expect("text");
        assert_eq!(text, Content::from("hello"));
        assert!(!text.is_multipart());

        let parts: Content =
            serde_json::from_value(json!([{ "type": "text", "text": "hi" }])).expect("parts");
        assert_eq!(parts, Content::Parts(vec![ContentPart::text("hi")]));
        assert!(parts.is_multipart());
    }

    #[test]
    fn as_text_joins_text_parts_and_skips_images() {
        let content = Content::from(vec![
            ContentPart::text("first"),
            ContentPart::image(ImageUrl::new("https://example.com/a.png")),
            ContentPart::text("second"),
        ]);
        assert_eq!(content.as_text(), "first\nsecond");
        let urls: Vec<&str> = content.images().map(|image| image.url.as_str()).collect();
        assert_eq!(urls, vec!["https://example.com/a.png"]);
        assert_eq!(Content::from("plain").images().count(), 0);
    }

    #[test]
    fn parts_keep_provider_keys_through_copy() {
        let wire = json!([
            { "type": "text", "text": "hi", "lang": "en" },
            {
                "type": "image_url",
                "image_url": { "url": "https://example.com/a.png" },
                "cache_control": { "type": "ephemeral" }
            }
        ]);
        let content: Content = serde_json::from_value(wire.clone()).expect("deserialize");
        assert_eq!(
            content,
            Content::Parts(vec![
                ContentPart::text("hi").with_extra("lang", "en"),
                ContentPart::image(ImageUrl::new("https://example.com/a.png"))
                    .with_extra("cache_control", json!({ "type": "ephemeral" })),
            ])
        );
        assert_eq!(serde_json::to_value(&content).expect("serialize"), wire);
    }

    #[test]
    fn part_extra_ignores_tag_and_payload_keys() {
        let part = ContentPart::text("hi")
            .with_extra("type", "image_url")
            .with_extra("text", "shadow");
        assert_eq!(part, ContentPart::text("hi"));
        assert_eq!(
            serde_json::to_value(&part).expect("serialize"),
            json!({ "type": "text", "text": "hi" })
        );
    }
}
