//! In-memory location.
//!
//! Holds the current address as a parsed `http::Uri`. `replace` swaps it in
//! place and keeps a history of replaced addresses for assertions.
//!
//! Query values are form-decoded on read: `+` becomes a space and `%XX`
//! becomes the byte it escapes.

use http::Uri;
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::Location;

/// Address held in memory.
#[derive(Debug)]
pub struct InMemoryLocation {
    current: RwLock<Uri>,
    history: RwLock<Vec<String>>,
}

impl InMemoryLocation {
    /// Parses the starting address.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailed` if `href` is not a valid URI.
    pub fn new(href: &str) -> Result<Self, DomainError> {
        Ok(Self {
            current: RwLock::new(parse(href)?),
            history: RwLock::new(Vec::new()),
        })
    }

    /// Addresses that were replaced, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.history
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Location for InMemoryLocation {
    fn href(&self) -> String {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .to_string()
    }

    fn query_param(&self, key: &str) -> Option<String> {
        let current = self
            .current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let value = current
            .query()?
            .split('&')
            .filter_map(|pair| match pair.split_once('=') {
                Some((k, v)) => Some((k, v)),
                None if !pair.is_empty() => Some((pair, "")),
                None => None,
            })
            .find(|(k, _)| form_decode(k) == key)
            .map(|(_, v)| form_decode(v));
        value
    }

    fn replace(&self, url: &str) -> Result<(), DomainError> {
        let next = parse(url)?;
        let mut current = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let previous = std::mem::replace(&mut *current, next);
        self.history
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(previous.to_string());
        Ok(())
    }
}

fn parse(href: &str) -> Result<Uri, DomainError> {
    href.parse::<Uri>().map_err(|e| {
        DomainError::new(ErrorCode::ValidationFailed, format!("Invalid address: {}", e))
            .with_detail("href", href)
    })
}

/// Decodes one `application/x-www-form-urlencoded` component.
///
/// Malformed escapes are kept literally.
fn form_decode(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' => match (bytes.get(i + 1), bytes.get(i + 2)) {
                (Some(&hi), Some(&lo)) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => {
                    out.push((hex_value(hi) << 4) | hex_value(lo));
                    i += 2;
                }
                _ => out.push(b'%'),
            },
            b => out.push(b),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}
