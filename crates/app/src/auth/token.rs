//! Session token formatting, parsing, and digest input construction.

use std::{fmt, str::FromStr};

use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};
use thiserror::Error;
use uuid::Uuid;
use zeroize::Zeroize;

use crate::domain::users::records::UserUuid;

/// Session token identifier prefix.
pub const SESSION_TOKEN_PREFIX: &str = "sc";

/// Number of secret bytes encoded in a token.
pub const SESSION_TOKEN_SECRET_BYTES: usize = 32;

const SESSION_TOKEN_SECRET_HEX_CHARS: usize = SESSION_TOKEN_SECRET_BYTES * 2;

/// Session token format version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionTokenVersion {
    /// `sc_v1_<uuid>.<hex>` with a SHA-256 digest stored server side.
    V1,
}

impl SessionTokenVersion {
    /// Value stored in `session_tokens.version`.
    #[must_use]
    pub const fn as_i16(self) -> i16 {
        match self {
            Self::V1 => 1,
        }
    }

    /// Version segment of the rendered token.
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::V1 => "v1",
        }
    }
}

impl TryFrom<i16> for SessionTokenVersion {
    type Error = SessionTokenError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::V1),
            _ => Err(SessionTokenError::UnsupportedVersion),
        }
    }
}

impl FromStr for SessionTokenVersion {
    type Err = SessionTokenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "v1" => Ok(Self::V1),
            _ => Err(SessionTokenError::UnsupportedVersion),
        }
    }
}

/// Random secret half of a session token. Wiped from memory on drop.
#[derive(Clone)]
pub struct SessionTokenSecret {
    bytes: [u8; SESSION_TOKEN_SECRET_BYTES],
}

impl SessionTokenSecret {
    /// Wrap raw secret bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; SESSION_TOKEN_SECRET_BYTES]) -> Self {
        Self { bytes }
    }

    /// Borrow the raw secret bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; SESSION_TOKEN_SECRET_BYTES] {
        &self.bytes
    }

    /// Fresh secret from the OS random source.
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = [0_u8; SESSION_TOKEN_SECRET_BYTES];

        OsRng.fill_bytes(&mut bytes);

        Self { bytes }
    }

    fn to_hex(&self) -> String {
        self.bytes.iter().map(|byte| format!("{byte:02x}")).collect()
    }

    fn from_hex(secret_hex: &str) -> Option<Self> {
        if secret_hex.len() != SESSION_TOKEN_SECRET_HEX_CHARS {
            return None;
        }

        let mut bytes = [0_u8; SESSION_TOKEN_SECRET_BYTES];

        for (byte, pair) in bytes.iter_mut().zip(secret_hex.as_bytes().chunks_exact(2)) {
            let [hi, lo] = pair else {
                return None;
            };

            *byte = (decode_hex_nibble(*hi)? << 4) | decode_hex_nibble(*lo)?;
        }

        Some(Self { bytes })
    }
}

impl fmt::Debug for SessionTokenSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionTokenSecret(**redacted**)")
    }
}

impl Drop for SessionTokenSecret {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

/// A bearer token split into its parts.
#[derive(Debug, Clone)]
pub struct ParsedSessionToken {
    /// Session row identifier.
    pub token_uuid: Uuid,
    /// Format version from the prefix.
    pub version: SessionTokenVersion,
    /// Secret to digest and compare.
    pub secret: SessionTokenSecret,
}

/// Token parsing errors.
#[derive(Debug, Error)]
pub enum SessionTokenError {
    /// Wrong prefix or missing separator.
    #[error("session token format is invalid")]
    InvalidFormat,

    /// Version segment is not recognised.
    #[error("session token uses an unsupported version")]
    UnsupportedVersion,

    /// Secret is not 64 hex characters.
    #[error("session token secret encoding is invalid")]
    InvalidSecretEncoding,
}

/// Render a token as `sc_<version>_<token uuid>.<secret hex>`.
#[must_use]
pub fn format_session_token(
    token_uuid: Uuid,
    version: SessionTokenVersion,
    secret: &SessionTokenSecret,
) -> String {
    format!(
        "{SESSION_TOKEN_PREFIX}_{}_{}.{}",
        version.segment(),
        token_uuid.simple(),
        secret.to_hex()
    )
}

/// Split a bearer token into its uuid, version and secret.
///
/// # Errors
///
/// Returns an error when the prefix, version, uuid or secret segment is malformed.
pub fn parse_session_token(token: &str) -> Result<ParsedSessionToken, SessionTokenError> {
    let (prefix_and_id, secret_hex) = token
        .split_once('.')
        .ok_or(SessionTokenError::InvalidFormat)?;

    let mut id_parts = prefix_and_id.splitn(3, '_');

    let prefix = id_parts.next().ok_or(SessionTokenError::InvalidFormat)?;
    let version_segment = id_parts.next().ok_or(SessionTokenError::InvalidFormat)?;
    let token_uuid_segment = id_parts.next().ok_or(SessionTokenError::InvalidFormat)?;

    if prefix != SESSION_TOKEN_PREFIX {
        return Err(SessionTokenError::InvalidFormat);
    }

    let version = SessionTokenVersion::from_str(version_segment)?;

    let token_uuid = Uuid::try_parse(token_uuid_segment)
        .ok()
        .ok_or(SessionTokenError::InvalidFormat)?;

    let secret =
        SessionTokenSecret::from_hex(secret_hex).ok_or(SessionTokenError::InvalidSecretEncoding)?;

    Ok(ParsedSessionToken {
        token_uuid,
        version,
        secret,
    })
}

/// Stored digest of a token.
///
/// SHA-256 over `{token_uuid_hex}:{version_i16_decimal}:{user_uuid_hex}:{secret_hex}`,
/// rendered as lowercase hex.
#[must_use]
pub fn session_token_digest(
    token_uuid: &Uuid,
    version: SessionTokenVersion,
    user_uuid: &UserUuid,
    secret: &SessionTokenSecret,
) -> String {
    let mut input = format!(
        "{}:{}:{}:{}",
        token_uuid.simple(),
        version.as_i16(),
        user_uuid.into_uuid().simple(),
        secret.to_hex(),
    );

    let digest = format!("{:x}", Sha256::digest(input.as_bytes()));

    input.zeroize();

    digest
}

fn decode_hex_nibble(value: u8) -> Option<u8> {
    match value {
        b'0'..=b'9' => Some(value - b'0'),
        b'a'..=b'f' => Some(value - b'a' + 10),
        b'A'..=b'F' => Some(value - b'A' + 10),
        _ => None,
    }
}
