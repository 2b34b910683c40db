// --- File: src/core/normalize.rs

/// Collapses a display name or basename to the comparison key used
/// everywhere in the matcher: lowercase, alphanumeric only.
/// Total and idempotent; an empty input stays empty.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Removes every parenthesized qualifier from an item name, shortest
/// group first, e.g. "Roti (4 pcs)" -> "Roti ". An opening paren with no
/// closing one is left alone. Caller trims the result.
pub fn strip_parenthetical(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut rest = name;
    while let Some(open) = rest.find('(') {
        match rest[open..].find(')') {
            Some(close) => {
                out.push_str(&rest[..open]);
                rest = &rest[open + close + 1..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}

/// Cleans file-manager and download artifacts out of an image basename:
/// "(2)" repeat-copy groups anywhere, then one trailing " 2" run, then
/// one trailing ".2" run, then surrounding whitespace.
pub fn clean_basename(base: &str) -> String {
    let cleaned = remove_digit_groups(base);
    let cleaned = strip_trailing_digits(&cleaned, char::is_whitespace);
    let cleaned = strip_trailing_digits(cleaned, |c| c == '.');
    cleaned.trim().to_string()
}

/// Basename of a filename: everything before the last dot. A lone
/// leading dot (hidden file) keeps the whole name.
pub fn file_stem(file: &str) -> &str {
    match file.rfind('.') {
        Some(i) if i > 0 => &file[..i],
        _ => file,
    }
}

// Drops every "(N)" group where N is all digits. "(2a)" is not a copy
// marker and stays.
fn remove_digit_groups(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(open) = rest.find('(') {
        let after = &rest[open + 1..];
        if let Some(close) = after.find(')') {
            let inner = &after[..close];
            if !inner.is_empty() && inner.bytes().all(|b| b.is_ascii_digit()) {
                out.push_str(&rest[..open]);
                rest = &after[close + 1..];
                continue;
            }
        }
        out.push_str(&rest[..open + 1]);
        rest = &rest[open + 1..];
    }
    out.push_str(rest);
    out
}

// Removes a trailing digit run only when the character right before it
// satisfies `sep`, mirroring one application of /\s\d+$/ or /\.\d+$/.
fn strip_trailing_digits(s: &str, sep: impl Fn(char) -> bool) -> &str {
    let without_digits = s.trim_end_matches(|c: char| c.is_ascii_digit());
    if without_digits.len() == s.len() {
        return s;
    }
    match without_digits.chars().last() {
        Some(c) if sep(c) => &without_digits[..without_digits.len() - c.len_utf8()],
        _ => s,
    }
}
