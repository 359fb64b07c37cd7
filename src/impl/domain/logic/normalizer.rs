use std::sync::LazyLock;

use regex::Regex;

use crate::entities::OrgKey;

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Z0-9\s]").expect("hardcoded regex should be valid"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("hardcoded regex should be valid"));

pub(crate) const UNSPECIFIED_ORG: &str = "UNSPECIFIED";

/// Canonical grouping key for an organization display name.
///
/// Trim, uppercase, fold diacritics (the feminine/masculine ordinal marks
/// map to `A`/`O`, the look-alike degree sign is treated as the masculine
/// mark), strip remaining non-alphanumerics and collapse whitespace runs.
/// An empty result maps to the fixed key `UNSPECIFIED`. Idempotent, so keys
/// can be re-normalized freely.
pub fn normalize_org_name(name: &str) -> OrgKey {
    let folded: String = name
        .trim()
        .to_uppercase()
        .chars()
        .map(fold_char)
        .collect();
    let stripped = NON_ALPHANUMERIC.replace_all(&folded, "");
    let collapsed = WHITESPACE_RUN.replace_all(stripped.trim(), " ");
    if collapsed.is_empty() {
        OrgKey(UNSPECIFIED_ORG.to_string())
    } else {
        OrgKey(collapsed.into_owned())
    }
}

fn fold_char(c: char) -> char {
    match c {
        'Á' | 'À' | 'Â' | 'Ã' | 'Ä' | 'ª' => 'A',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' | 'º' | '°' => 'O',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'Ç' => 'C',
        'Ñ' => 'N',
        _ => c,
    }
}
