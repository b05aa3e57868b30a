//! `stripe-signature` header verification.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(super) enum SignatureError {
    #[error("missing stripe-signature header")]
    Missing,

    #[error("malformed stripe-signature header")]
    Malformed,

    #[error("no signature matches the payload")]
    Mismatch,

    #[error("signature timestamp outside the tolerance window")]
    Stale,
}

/// Parsed `t=<unix>,v1=<hex>[,v1=<hex>...]`.
#[derive(Debug, PartialEq, Eq)]
struct SignatureHeader {
    timestamp: i64,
    signatures: Vec<Vec<u8>>,
}

fn parse_header(header: &str) -> Result<SignatureHeader, SignatureError> {
    let mut timestamp = None;
    let mut signatures = Vec::new();

    for part in header.split(',') {
        let Some((key, value)) = part.trim().split_once('=') else {
            return Err(SignatureError::Malformed);
        };

        match key {
            "t" => {
                timestamp = Some(value.parse().map_err(|_ignored| SignatureError::Malformed)?);
            }
            // Undecodable v1 values simply never match.
            "v1" => {
                if let Ok(signature) = hex::decode(value) {
                    signatures.push(signature);
                }
            }
            _ => {}
        }
    }

    let timestamp = timestamp.ok_or(SignatureError::Malformed)?;

    if signatures.is_empty() {
        return Err(SignatureError::Malformed);
    }

    Ok(SignatureHeader {
        timestamp,
        signatures,
    })
}

/// Check `header` against `payload` signed with `secret` at `now` (unix seconds).
pub(super) fn verify(
    secret: &str,
    header: Option<&str>,
    payload: &[u8],
    tolerance_seconds: u64,
    now: i64,
) -> Result<(), SignatureError> {
    let header = parse_header(header.ok_or(SignatureError::Missing)?)?;

    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_ignored| SignatureError::Mismatch)?;

    mac.update(header.timestamp.to_string().as_bytes());
    mac.update(b".");
    mac.update(payload);

    let matched = header
        .signatures
        .iter()
        .any(|signature| mac.clone().verify_slice(signature).is_ok());

    if !matched {
        return Err(SignatureError::Mismatch);
    }

    if now.abs_diff(header.timestamp) > tolerance_seconds {
        return Err(SignatureError::Stale);
    }

    Ok(())
}

#[cfg(test)]
pub(super) fn sign(
    secret: &str,
    timestamp: i64,
    payload: &[u8],
) -> Result<String, hmac::digest::InvalidLength> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())?;

    mac.update(format!("{timestamp}.").as_bytes());
    mac.update(payload);

    Ok(format!(
        "t={timestamp},v1={}",
        hex::encode(mac.finalize().into_bytes())
    ))
}
