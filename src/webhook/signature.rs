use axum::http::HeaderMap;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::Sha256;
use std::fmt;

pub const SHA256_HEADER: &str = "x-hub-signature-256";
pub const SHA1_HEADER: &str = "x-hub-signature";

/// Signature claimed by a callback request, still hex-encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signature<'a> {
    Sha256(&'a str),
    Sha1(&'a str),
}

impl<'a> Signature<'a> {
    /// Prefers the SHA-256 header when both are present.
    pub fn from_headers(headers: &'a HeaderMap) -> Option<Self> {
        if let Some(value) = header(headers, SHA256_HEADER) {
            return Some(Signature::Sha256(value.strip_prefix("sha256=").unwrap_or(value)));
        }
        header(headers, SHA1_HEADER)
            .map(|value| Signature::Sha1(value.strip_prefix("sha1=").unwrap_or(value)))
    }
}

fn header<'h>(headers: &'h HeaderMap, name: &str) -> Option<&'h str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Checks callback bodies against the app secret.
#[derive(Clone)]
pub struct SignatureVerifier {
    app_secret: String,
}

impl SignatureVerifier {
    pub fn new(app_secret: impl Into<String>) -> Self {
        Self {
            app_secret: app_secret.into(),
        }
    }

    pub fn verify(&self, signature: Signature<'_>, body: &[u8]) -> bool {
        match signature {
            Signature::Sha256(hex) => check::<Hmac<Sha256>>(self.app_secret.as_bytes(), hex, body),
            Signature::Sha1(hex) => check::<Hmac<Sha1>>(self.app_secret.as_bytes(), hex, body),
        }
    }
}

impl fmt::Debug for SignatureVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignatureVerifier")
            .field("app_secret", &"[REDACTED]")
            .finish()
    }
}

fn check<M: Mac + hmac::digest::KeyInit>(key: &[u8], expected_hex: &str, body: &[u8]) -> bool {
    let Ok(expected) = hex::decode(expected_hex) else {
        return false;
    };
    let Ok(mut mac) = <M as Mac>::new_from_slice(key) else {
        return false;
    };
    mac.update(body);
    mac.verify_slice(&expected).is_ok()
}
