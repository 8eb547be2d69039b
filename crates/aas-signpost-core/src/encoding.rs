//! Identifier codecs for the AAS Part 2 HTTP/REST API.
//!
//! Identifiers of Identifiables travel base64url-encoded without padding;
//! idShortPaths travel URL-encoded with `[`/`]` and dots left intact for
//! index and nesting notation.
//!
//! Decoding is deliberately tolerant: servers in the field hand back padded
//! base64, standard-alphabet `+`/`/`, and the percent-encoded `%3D` padding
//! artifact, and all of those must resolve to the same identifier.
//!
//! # References
//!
//! - IDTA 01002-3-0: Specification of the Asset Administration Shell Part 2

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, URL_SAFE_NO_PAD};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

/// Accepts padded and unpadded input alike.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Characters escaped in an idShortPath. `[`/`]` stay literal for list
/// index notation, dots stay literal for nesting.
const IDSHORT_PATH_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Encode an identifier for use in an API path.
///
/// The identifier is trimmed first; a blank identifier encodes to the
/// empty string rather than the encoding of `""`.
///
/// # Examples
///
/// ```
/// use aas_signpost_core::encode_id_base64url;
///
/// let encoded = encode_id_base64url("https://example.com/ids/sm/1234_5678_9012_3456");
/// assert!(!encoded.contains('='));
/// assert_eq!(encode_id_base64url("   "), "");
/// ```
#[must_use]
pub fn encode_id_base64url(id: &str) -> String {
    let id = id.trim();
    if id.is_empty() {
        return String::new();
    }
    URL_SAFE_NO_PAD.encode(id.as_bytes())
}

/// Decode a base64url identifier coming in over the API.
///
/// Blank input decodes to `Ok("")`. Padded, unpadded, standard-alphabet
/// and `%3D`-suffixed spellings are all accepted.
///
/// # Errors
///
/// [`EncodingError::Base64Decode`] when the input is not base64 in any
/// accepted spelling, [`EncodingError::Utf8Decode`] when the decoded bytes
/// are not UTF-8.
///
/// # Examples
///
/// ```
/// use aas_signpost_core::decode_id_base64url;
///
/// assert_eq!(
///     decode_id_base64url("aHR0cHM6Ly9leGFtcGxlLmNvbS9pZHMvc20vMTIzNA")?,
///     "https://example.com/ids/sm/1234"
/// );
/// # Ok::<(), aas_signpost_core::EncodingError>(())
/// ```
pub fn decode_id_base64url(encoded: &str) -> Result<String, EncodingError> {
    let encoded = encoded.trim();
    if encoded.is_empty() {
        return Ok(String::new());
    }

    let normalized = encoded
        .replace("%3D", "=")
        .replace('+', "-")
        .replace('/', "_");
    let bytes = URL_SAFE_LENIENT
        .decode(normalized.as_bytes())
        .map_err(|error| EncodingError::Base64Decode(error.to_string()))?;
    String::from_utf8(bytes).map_err(|error| EncodingError::Utf8Decode(error.to_string()))
}

/// URL-encode an idShortPath, preserving `[`/`]` and dots.
///
/// # Examples
///
/// ```
/// use aas_signpost_core::encode_idshort_path;
///
/// assert_eq!(encode_idshort_path("Markings%5B0%5D"), "Markings%255B0%255D");
/// assert_eq!(encode_idshort_path("Address.Street"), "Address.Street");
/// assert_eq!(encode_idshort_path("Components[0]"), "Components[0]");
/// ```
#[must_use]
pub fn encode_idshort_path(path: &str) -> String {
    utf8_percent_encode(path, IDSHORT_PATH_ESCAPE).to_string()
}

/// Decode a URL-encoded idShortPath.
///
/// # Errors
///
/// [`EncodingError::Utf8Decode`] when the percent-decoded bytes are not
/// UTF-8.
pub fn decode_idshort_path(encoded: &str) -> Result<String, EncodingError> {
    let decoded = percent_decode_str(encoded)
        .decode_utf8()
        .map_err(|error| EncodingError::Utf8Decode(error.to_string()))?;
    Ok(decoded.into_owned())
}

/// Identifier codec failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EncodingError {
    /// The input is not base64 in any accepted spelling
    #[error("invalid base64 identifier: {0}")]
    Base64Decode(String),
    /// Decoded bytes are not valid UTF-8
    #[error("decoded identifier is not UTF-8: {0}")]
    Utf8Decode(String),
}
