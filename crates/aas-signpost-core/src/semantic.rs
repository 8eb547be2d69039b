//! Semantic-ID equivalence and matching.
//!
//! The same concept can be named in up to three eCLASS notations, or as an
//! IRI with or without a trailing slash:
//!
//! - dashed IRDI: `0173-1#01-AHF578#001`
//! - slashed IRDI: `0173/1///01#AHF578#001`
//! - eCLASS CDP URL: `https://api.eclass-cdp.com/0173-1-01-AHF578-001`
//! - IRI: `https://admin-shell.io/zvei/nameplate/1/0/Nameplate`
//!
//! Matching is notation-aware: versioned IDs compare across equivalent
//! notations, unversioned IDs match any version of the same concept, and
//! IEC CDD IDs (`0112/...`) compare textually.
//!
//! # References
//!
//! - ISO/IEC 11179-6 (IRDI structure), eCLASS ReleaseNotes 12.0

use aas_signpost_model::element;
use serde_json::Value;

const DASHED_PREFIX: &str = "0173-1#";
const SLASHED_PREFIX: &str = "0173/1///";
const CDP_PREFIX: &str = "https://api.eclass-cdp.com/0173-1";
const IEC_CDD_PREFIX: &str = "0112/";

/// Canonical form of an eCLASS IRDI: the two-digit class group plus the
/// hash-notation code tail shared by all three spellings.
#[derive(Debug, Clone, PartialEq, Eq)]
struct EclassIrdi {
    class_group: String,
    code: String,
}

/// The three eCLASS spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EclassNotation {
    Dashed,
    Slashed,
    CdpUrl,
}

const ALL_NOTATIONS: [EclassNotation; 3] = [
    EclassNotation::Dashed,
    EclassNotation::Slashed,
    EclassNotation::CdpUrl,
];

impl EclassIrdi {
    /// Parse any of the three spellings; `None` when the class group or
    /// separator is missing.
    fn parse(semantic_id: &str) -> Option<(Self, EclassNotation)> {
        if let Some(rest) = semantic_id.strip_prefix(DASHED_PREFIX) {
            let (class_group, code) = split_class_group(rest, '-')?;
            return Some((Self { class_group, code }, EclassNotation::Dashed));
        }
        if let Some(rest) = semantic_id.strip_prefix(SLASHED_PREFIX) {
            let (class_group, code) = split_class_group(rest, '#')?;
            return Some((Self { class_group, code }, EclassNotation::Slashed));
        }
        if let Some(rest) = semantic_id.strip_prefix("https://api.eclass-cdp.com/0173-1-") {
            let (class_group, dashed_code) = split_class_group(rest, '-')?;
            let code = restore_version_hash(&dashed_code);
            return Some((Self { class_group, code }, EclassNotation::CdpUrl));
        }
        None
    }

    fn render(&self, notation: EclassNotation) -> String {
        match notation {
            EclassNotation::Dashed => format!("0173-1#{}-{}", self.class_group, self.code),
            EclassNotation::Slashed => format!("0173/1///{}#{}", self.class_group, self.code),
            EclassNotation::CdpUrl => format!(
                "https://api.eclass-cdp.com/0173-1-{}-{}",
                self.class_group,
                self.code.replace('#', "-")
            ),
        }
    }
}

/// Split `CC<sep>rest` where `CC` is exactly two ASCII digits.
fn split_class_group(rest: &str, separator: char) -> Option<(String, String)> {
    let mut chars = rest.chars();
    let first = chars.next()?;
    let second = chars.next()?;
    if !first.is_ascii_digit() || !second.is_ascii_digit() {
        return None;
    }
    if chars.next()? != separator {
        return None;
    }
    let code = chars.as_str();
    if code.is_empty() {
        return None;
    }
    Some((format!("{first}{second}"), code.to_string()))
}

/// In the CDP URL the trailing `-DDD` version stands for `#DDD`; every
/// other dash in the code stays a dash.
fn restore_version_hash(dashed_code: &str) -> String {
    if let Some(idx) = dashed_code.rfind('-') {
        let tail = &dashed_code[idx + 1..];
        if tail.len() == 3 && tail.bytes().all(|b| b.is_ascii_digit()) {
            return format!("{}#{}", &dashed_code[..idx], tail);
        }
    }
    dashed_code.to_string()
}

/// All three spellings of an eCLASS IRDI, the input first.
///
/// Only activates on the dashed, slashed, or CDP URL prefixes; any other
/// input (including blank) yields an empty vec, as does a prefixed input
/// whose class group or separator is malformed. For well-formed IDs the
/// result always holds exactly three entries.
///
/// # Examples
///
/// ```
/// use aas_signpost_core::eclass_equivalents;
///
/// assert_eq!(
///     eclass_equivalents("0173-1#01-AHF578#001"),
///     vec![
///         "0173-1#01-AHF578#001",
///         "0173/1///01#AHF578#001",
///         "https://api.eclass-cdp.com/0173-1-01-AHF578-001",
///     ]
/// );
/// assert!(eclass_equivalents("not-eclass").is_empty());
/// ```
#[must_use]
pub fn eclass_equivalents(semantic_id: &str) -> Vec<String> {
    if !has_eclass_prefix(semantic_id) {
        return Vec::new();
    }
    let semantic_id = semantic_id.trim();

    match EclassIrdi::parse(semantic_id) {
        Some((irdi, notation)) => {
            let mut forms = vec![semantic_id.to_string()];
            for other in ALL_NOTATIONS {
                if other != notation {
                    forms.push(irdi.render(other));
                }
            }
            forms
        }
        None => Vec::new(),
    }
}

/// The IRI and its toggled-trailing-slash twin, the input first.
///
/// Activates only on `http://`/`https://`; anything else yields an empty
/// vec. The relation is a 2-cycle: applying it to either output and
/// searching for the other always succeeds.
///
/// # Examples
///
/// ```
/// use aas_signpost_core::iri_equivalents;
///
/// assert_eq!(
///     iri_equivalents("https://x.org/a"),
///     vec!["https://x.org/a", "https://x.org/a/"]
/// );
/// assert_eq!(
///     iri_equivalents("https://x.org/a/"),
///     vec!["https://x.org/a/", "https://x.org/a"]
/// );
/// ```
#[must_use]
pub fn iri_equivalents(semantic_id: &str) -> Vec<String> {
    if !is_http_iri(semantic_id) {
        return Vec::new();
    }
    let semantic_id = semantic_id.trim();

    let toggled = match semantic_id.strip_suffix('/') {
        Some(stripped) => stripped.to_string(),
        None => format!("{semantic_id}/"),
    };
    vec![semantic_id.to_string(), toggled]
}

/// Whether an element's `semanticId` matches the given semantic ID.
///
/// Each key of the element's semantic ID picks the comparison family by its
/// own prefix: IEC CDD, eCLASS IRDI, eCLASS CDP URL, generic IRI, or plain
/// equality. A notation family decides immediately; only the equality arm
/// keeps scanning later keys.
#[must_use]
pub fn matches_semantic_id(element: &Value, semantic_id: &str) -> bool {
    let semantic_id = semantic_id.trim();
    if semantic_id.is_empty() {
        return false;
    }

    for key_value in element::semantic_id_key_values(element) {
        if key_value.starts_with(IEC_CDD_PREFIX) {
            return matches_iec_cdd(key_value, semantic_id);
        }
        if key_value.starts_with(DASHED_PREFIX) || key_value.starts_with(SLASHED_PREFIX) {
            return matches_eclass_irdi(key_value, semantic_id);
        }
        if key_value.starts_with(CDP_PREFIX) {
            return matches_eclass_cdp_url(key_value, semantic_id);
        }
        if is_http_iri(key_value) {
            return matches_iri(key_value, semantic_id);
        }
        if key_value == semantic_id {
            return true;
        }
    }
    false
}

/// Notation-aware comparison for eCLASS IRDI keys (dashed or slashed).
///
/// A versioned query (`...#001`, `...-001`, optionally with a `*N`
/// cardinality) must appear among the key's equivalent spellings; an
/// unversioned query matches when any equivalent starts with it. A dashed
/// key carrying a two-digit `*DD` cardinality is compared with the last
/// three characters stripped from both sides.
#[must_use]
pub fn matches_eclass_irdi(key_value: &str, semantic_id: &str) -> bool {
    let semantic_id = semantic_id.trim();
    if semantic_id.is_empty() {
        return false;
    }

    if key_value.starts_with(DASHED_PREFIX) {
        let (key_value, semantic_id) = if has_cardinality_pair_suffix(key_value) {
            (drop_last_chars(key_value, 3), drop_last_chars(semantic_id, 3))
        } else {
            (key_value, semantic_id)
        };
        return equivalents_hold(key_value, semantic_id, b'*');
    }

    if key_value.starts_with(SLASHED_PREFIX) {
        return equivalents_hold(key_value, semantic_id, b'*');
    }

    false
}

/// Shared versioned/unversioned comparison against a key's equivalents.
fn equivalents_hold(key_value: &str, semantic_id: &str, cardinality_marker: u8) -> bool {
    let equivalents = eclass_equivalents(key_value);
    if is_versioned(semantic_id, cardinality_marker) {
        equivalents.iter().any(|eq| eq.as_str() == semantic_id)
    } else {
        equivalents.iter().any(|eq| eq.starts_with(semantic_id))
    }
}

/// Notation-aware comparison for eCLASS CDP URL keys.
///
/// CDP URLs spell the version with a dash and the cardinality with `~`, so
/// a versioned query is converted into its spellings and searched for the
/// key; unversioned queries prefix-match the key's equivalents.
#[must_use]
pub fn matches_eclass_cdp_url(key_value: &str, semantic_id: &str) -> bool {
    let semantic_id = semantic_id.trim();
    if semantic_id.is_empty() {
        return false;
    }
    if !key_value.starts_with(CDP_PREFIX) {
        return false;
    }

    if is_versioned(semantic_id, b'~') {
        return eclass_equivalents(semantic_id)
            .iter()
            .any(|eq| eq.as_str() == key_value);
    }

    eclass_equivalents(key_value)
        .iter()
        .any(|eq| eq.starts_with(semantic_id))
}

/// Textual comparison for IEC CDD keys (`0112/...`).
///
/// Both sides must carry the IEC CDD prefix; a versioned query must equal
/// the key, an unversioned one prefix-matches it.
#[must_use]
pub fn matches_iec_cdd(key_value: &str, semantic_id: &str) -> bool {
    let semantic_id = semantic_id.trim();
    if semantic_id.is_empty() {
        return false;
    }
    if !semantic_id.starts_with(IEC_CDD_PREFIX) || !key_value.starts_with(IEC_CDD_PREFIX) {
        return false;
    }
    key_value.starts_with(semantic_id)
}

/// Case-insensitive comparison for IRI keys.
///
/// One trailing slash is ignored on either side. A query carrying a
/// version/revision marker (`/1/0` at the end or `/1/0/` mid-path) must
/// equal one of the key's slash variants; an unversioned query
/// prefix-matches them.
#[must_use]
pub fn matches_iri(key_value: &str, semantic_id: &str) -> bool {
    let semantic_id = semantic_id.trim();
    if semantic_id.is_empty() {
        return false;
    }
    if !is_http_iri(semantic_id) || !is_http_iri(key_value) {
        return false;
    }

    let key_value = key_value.strip_suffix('/').unwrap_or(key_value);
    let semantic_id = semantic_id.strip_suffix('/').unwrap_or(semantic_id);

    let needle = semantic_id.to_lowercase();
    let equivalents = iri_equivalents(key_value);
    if iri_has_version_marker(semantic_id) {
        equivalents.iter().any(|eq| eq.to_lowercase() == needle)
    } else {
        equivalents
            .iter()
            .any(|eq| eq.to_lowercase().starts_with(&needle))
    }
}

/// Find the first direct child whose semantic ID matches.
///
/// Scans `submodelElements` of a Submodel or `value` of a collection/list;
/// any other parent kind, a blank id, or a blank model type yields `None`.
#[must_use]
pub fn element_by_semantic_id<'a>(semantic_id: &str, parent: &'a Value) -> Option<&'a Value> {
    let semantic_id = semantic_id.trim();
    if semantic_id.is_empty() {
        return None;
    }
    lookup_children(parent)?
        .iter()
        .find(|child| matches_semantic_id(child, semantic_id))
}

/// All direct children whose semantic ID matches.
#[must_use]
pub fn elements_by_semantic_id<'a>(semantic_id: &str, parent: &'a Value) -> Vec<&'a Value> {
    let semantic_id = semantic_id.trim();
    if semantic_id.is_empty() {
        return Vec::new();
    }
    match lookup_children(parent) {
        Some(children) => children
            .iter()
            .filter(|child| matches_semantic_id(child, semantic_id))
            .collect(),
        None => Vec::new(),
    }
}

/// Children container for semantic-ID lookup, by parent kind.
fn lookup_children(parent: &Value) -> Option<&Vec<Value>> {
    let model_type = element::model_type(parent)?;
    let field = match model_type.trim() {
        "Submodel" => "submodelElements",
        "SubmodelElementCollection" | "SubmodelElementList" => "value",
        _ => return None,
    };
    let children = parent.get(field)?.as_array()?;
    if children.is_empty() {
        None
    } else {
        Some(children)
    }
}

/// Version and revision digits of a semantic ID.
///
/// Both fields are empty when the id carries no version/revision group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionRevision {
    /// Version digits, or `""`
    pub version: String,
    /// Revision digits, or `""`
    pub revision: String,
}

/// Extract the first `/version/revision` digit pair of a semantic ID.
///
/// # Examples
///
/// ```
/// use aas_signpost_core::extract_version_revision;
///
/// let vr = extract_version_revision("https://admin-shell.io/zvei/nameplate/1/0/Nameplate");
/// assert_eq!(vr.version, "1");
/// assert_eq!(vr.revision, "0");
///
/// let none = extract_version_revision("https://admin-shell.io/idta/nameplate");
/// assert_eq!(none.version, "");
/// ```
#[must_use]
pub fn extract_version_revision(semantic_id: &str) -> VersionRevision {
    let semantic_id = semantic_id.trim();
    if semantic_id.is_empty() {
        return VersionRevision::default();
    }

    let segments: Vec<&str> = semantic_id.split('/').collect();
    for i in 1..segments.len().saturating_sub(1) {
        if is_digit_run(segments[i]) && is_digit_run(segments[i + 1]) {
            return VersionRevision {
                version: segments[i].to_string(),
                revision: segments[i + 1].to_string(),
            };
        }
    }
    VersionRevision::default()
}

fn has_eclass_prefix(semantic_id: &str) -> bool {
    semantic_id.starts_with(DASHED_PREFIX)
        || semantic_id.starts_with(SLASHED_PREFIX)
        || semantic_id.starts_with(CDP_PREFIX)
}

fn is_http_iri(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// `#DDD` or `-DDD` at the end: a three-digit version suffix.
fn has_version_suffix(value: &str) -> bool {
    let bytes = value.as_bytes();
    let n = bytes.len();
    n >= 4
        && bytes[n - 3..].iter().all(u8::is_ascii_digit)
        && (bytes[n - 4] == b'#' || bytes[n - 4] == b'-')
}

/// Version suffix followed by a cardinality marker and one or more digits,
/// e.g. `#001*02` or `-001~2`.
fn has_version_cardinality_suffix(value: &str, marker: u8) -> bool {
    let bytes = value.as_bytes();
    let mut i = bytes.len();
    while i > 0 && bytes[i - 1].is_ascii_digit() {
        i -= 1;
    }
    if i == bytes.len() || i == 0 || bytes[i - 1] != marker {
        return false;
    }
    has_version_suffix(&value[..i - 1])
}

fn is_versioned(value: &str, cardinality_marker: u8) -> bool {
    has_version_suffix(value) || has_version_cardinality_suffix(value, cardinality_marker)
}

/// `*DD` at the end: the two-digit cardinality marker of dashed IRDIs.
fn has_cardinality_pair_suffix(value: &str) -> bool {
    let bytes = value.as_bytes();
    let n = bytes.len();
    n >= 3
        && bytes[n - 1].is_ascii_digit()
        && bytes[n - 2].is_ascii_digit()
        && bytes[n - 3] == b'*'
}

/// Drop the last `count` characters (not bytes).
fn drop_last_chars(value: &str, count: usize) -> &str {
    match value.char_indices().rev().nth(count - 1) {
        Some((idx, _)) => &value[..idx],
        None => "",
    }
}

fn is_digit_run(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// `/N/M` at the end or `/N/M/` anywhere mid-path.
fn iri_has_version_marker(value: &str) -> bool {
    let segments: Vec<&str> = value.split('/').collect();
    let n = segments.len();
    if n >= 2 && is_digit_run(segments[n - 2]) && is_digit_run(segments[n - 1]) {
        return true;
    }
    segments
        .windows(3)
        .any(|window| is_digit_run(window[0]) && is_digit_run(window[1]))
}
