//! Attachment introspection over the Telegram message payload.

use teloxide::types::Message;

/// Media carried by a message, reduced to a kind name plus the MIME type
/// when the Telegram API exposes one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentInfo {
    pub kind: &'static str,
    pub content_type: Option<String>,
}

impl AttachmentInfo {
    fn new(kind: &'static str, content_type: Option<String>) -> Self {
        Self { kind, content_type }
    }

    /// Extract attachment info from a message, or `None` for text-only
    /// messages. Only the first recognized media kind is reported.
    pub fn from_message(msg: &Message) -> Option<Self> {
        if let Some(doc) = msg.document() {
            return Some(Self::new(
                "document",
                doc.mime_type.as_ref().map(|m| m.to_string()),
            ));
        }
        if msg.photo().is_some() {
            // Telegram strips photos to sized JPEG variants without a MIME field.
            return Some(Self::new("photo", None));
        }
        if let Some(video) = msg.video() {
            return Some(Self::new(
                "video",
                video.mime_type.as_ref().map(|m| m.to_string()),
            ));
        }
        if let Some(animation) = msg.animation() {
            return Some(Self::new(
                "animation",
                animation.mime_type.as_ref().map(|m| m.to_string()),
            ));
        }
        if let Some(audio) = msg.audio() {
            return Some(Self::new(
                "audio",
                audio.mime_type.as_ref().map(|m| m.to_string()),
            ));
        }
        if let Some(voice) = msg.voice() {
            return Some(Self::new(
                "voice",
                voice.mime_type.as_ref().map(|m| m.to_string()),
            ));
        }
        if msg.video_note().is_some() {
            return Some(Self::new("video note", None));
        }
        if msg.sticker().is_some() {
            return Some(Self::new("sticker", None));
        }
        None
    }

    /// Content type to report back: the MIME type when known, otherwise
    /// the kind name.
    pub fn describe(&self) -> &str {
        self.content_type.as_deref().unwrap_or(self.kind)
    }
}
