//! Reply envelopes for the messaging gateway.
//!
//! The gateway expects a TwiML document: one `<Message>` whose `<Body>` holds
//! the reply text.

use quick_xml::escape::escape;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Content type the gateway expects for webhook replies.
pub const ENVELOPE_CONTENT_TYPE: &str = "application/xml";

/// A single reply ready to hand back to the messaging gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEnvelope {
    body: String,
}

impl OutboundEnvelope {
    /// The reply text exactly as produced by the pipeline.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Render the envelope as a TwiML document.
    ///
    /// # Examples
    ///
    /// ```
    /// use yt_summarizer::messaging::response_builder::format_reply;
    ///
    /// let xml = format_reply("Tom & Jerry").to_xml();
    /// assert!(xml.contains("<Body>Tom &amp; Jerry</Body>"));
    /// ```
    #[must_use]
    pub fn to_xml(&self) -> String {
        format!(
            "{XML_DECLARATION}<Response><Message><Body>{}</Body></Message></Response>",
            escape(self.body.as_str())
        )
    }
}

/// Wrap reply text in the outbound envelope without altering it.
#[must_use]
pub fn format_reply(text: &str) -> OutboundEnvelope {
    OutboundEnvelope {
        body: text.to_string(),
    }
}
