//! Normalization of one raw mbox message into an [`EmailEvent`].
//!
//! Every extractor returns an `Option`; the caller substitutes the documented
//! default (sentinel, null timestamp, empty body). A message that can't be
//! parsed at all still produces an event so output length equals archive size.

use mail_parser::{Addr, Address, Message, MessageParser, MessagePart, MimeHeaders, PartType};
use tracing::debug;

use crate::models::{EmailEvent, NO_SUBJECT, UNKNOWN_SENDER};
use crate::parsers::dates::{from_mail_date, parse_date_header};
use crate::utils::format_iso_offset;

/// Convert the raw bytes of one archived message into an event
pub fn normalize_message(id: usize, contents: &[u8]) -> EmailEvent {
    let Some(message) = MessageParser::default().parse(contents) else {
        debug!(id, "message could not be parsed, using defaults");
        return EmailEvent::degraded(id);
    };

    let timestamp = extract_timestamp(&message);
    if timestamp.is_none() {
        debug!(id, "Date header missing or unparseable");
    }

    let sender = extract_sender(&message).unwrap_or_else(|| {
        debug!(id, "no sender address in From header");
        UNKNOWN_SENDER.to_string()
    });

    EmailEvent {
        id,
        subject: extract_subject(&message).unwrap_or_else(|| NO_SUBJECT.to_string()),
        sender,
        receivers: extract_receivers(&message),
        timestamp,
        body: extract_body(&message).unwrap_or_default(),
    }
}

fn extract_subject(message: &Message<'_>) -> Option<String> {
    message.subject().map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

/// First address of the From header, lowercased
fn extract_sender(message: &Message<'_>) -> Option<String> {
    message
        .from()
        .and_then(|from| addresses(from).into_iter().next())
        .and_then(normalize_address)
}

/// Every address of the To header in header order; entries without an address are dropped
fn extract_receivers(message: &Message<'_>) -> Vec<String> {
    message
        .to()
        .map(|to| addresses(to).into_iter().filter_map(normalize_address).collect())
        .unwrap_or_default()
}

fn extract_timestamp(message: &Message<'_>) -> Option<String> {
    message
        .date()
        .and_then(from_mail_date)
        .map(|dt| format_iso_offset(&dt))
        // mail-parser only knows RFC 5322; retry the raw text against looser formats
        .or_else(|| message.header_raw("Date").and_then(parse_date_header))
}

/// Plain-text body of the message.
///
/// Multipart messages yield the first inline `text/plain` part in depth-first
/// order; single-part messages yield their whole payload.
fn extract_body(message: &Message<'_>) -> Option<String> {
    let root = message.parts.first()?;
    match &root.body {
        PartType::Multipart(_) | PartType::Message(_) => find_plain_text(message, 0),
        _ => decode_part(root),
    }
}

fn find_plain_text(message: &Message<'_>, part_id: usize) -> Option<String> {
    let part = message.parts.get(part_id)?;
    match &part.body {
        PartType::Multipart(children) => {
            children.iter().find_map(|child| find_plain_text(message, *child as usize))
        }
        PartType::Message(nested) => find_plain_text(nested, 0),
        // An undecodable candidate falls through to the next part
        _ if is_inline_plain_text(part) => decode_part(part),
        _ => None,
    }
}

/// `text/plain` (the default when Content-Type is absent) and not an attachment
fn is_inline_plain_text(part: &MessagePart<'_>) -> bool {
    let is_plain = match part.content_type() {
        Some(ct) => {
            ct.ctype().eq_ignore_ascii_case("text")
                && ct.subtype().is_some_and(|sub| sub.eq_ignore_ascii_case("plain"))
        }
        None => true,
    };
    let is_attachment = part
        .content_disposition()
        .is_some_and(|cd| cd.ctype().eq_ignore_ascii_case("attachment"));

    is_plain && !is_attachment
}

/// Decoded payload of a leaf part. Text parts were already decoded from their
/// declared charset by the MIME parser; raw bytes are read as lossy UTF-8.
fn decode_part(part: &MessagePart<'_>) -> Option<String> {
    // Set by the MIME parser when base64/quoted-printable decoding failed
    if part.is_encoding_problem {
        return None;
    }
    match &part.body {
        PartType::Text(text) | PartType::Html(text) => Some(text.to_string()),
        PartType::Binary(bytes) | PartType::InlineBinary(bytes) => {
            Some(String::from_utf8_lossy(bytes).into_owned())
        }
        PartType::Message(_) | PartType::Multipart(_) => None,
    }
}

/// Flatten address lists and groups, keeping header order
fn addresses<'a, 'x>(address: &'a Address<'x>) -> Vec<&'a Addr<'x>> {
    match address {
        Address::List(list) => list.iter().collect(),
        Address::Group(groups) => groups.iter().flat_map(|group| group.addresses.iter()).collect(),
    }
}

fn normalize_address(addr: &Addr<'_>) -> Option<String> {
    addr.address().map(str::trim).filter(|a| !a.is_empty()).map(str::to_lowercase)
}
