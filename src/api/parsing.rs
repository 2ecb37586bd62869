use percent_encoding::percent_decode_str;
use std::collections::HashMap;

use crate::core::models::IncomingMessage;

/// Decodes one `application/x-www-form-urlencoded` component.
///
/// `+` is turned into a space before percent-decoding, so an encoded `%2B`
/// survives as a literal plus sign.
///
/// # Errors
///
/// Returns an error message if the decoded bytes are not valid UTF-8.
///
/// # Examples
///
/// ```
/// use yt_summarizer::api::parsing::decode_url_component;
///
/// assert_eq!(decode_url_component("hello+world").unwrap(), "hello world");
/// assert_eq!(decode_url_component("a%2Bb").unwrap(), "a+b");
/// ```
pub fn decode_url_component(input: &str) -> Result<String, String> {
    let spaced = input.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|s| s.to_string())
        .map_err(|e| format!("Failed to decode URL component: {e}"))
}

/// Parses the gateway's form-encoded webhook body into an [`IncomingMessage`].
///
/// Only `Body`, `From` and `MessageSid` are kept; every other field is ignored.
/// A missing field is left as `None`; a repeated field keeps its first value.
///
/// # Errors
///
/// Returns an error message if a key or value is not valid UTF-8 after decoding.
pub fn parse_form_data(form_data: &str) -> Result<IncomingMessage, String> {
    let mut map: HashMap<String, String> = HashMap::new();

    for pair in form_data.split('&').filter(|p| !p.is_empty()) {
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        let key =
            decode_url_component(raw_key).map_err(|e| format!("Failed to decode key: {e}"))?;
        let value =
            decode_url_component(raw_value).map_err(|e| format!("Failed to decode value: {e}"))?;
        // The first occurrence of a repeated key wins.
        map.entry(key).or_insert(value);
    }

    Ok(IncomingMessage {
        body: map.remove("Body"),
        from: map.remove("From"),
        message_sid: map.remove("MessageSid"),
    })
}
