//! Helper functions for diff parsing.

/// The "no file" sentinel git uses for the missing side of a creation or deletion.
pub(super) const DEV_NULL: &str = "/dev/null";

/// Old/new start lines and counts from a hunk header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct HunkHeader {
    pub old_start: usize,
    pub old_count: usize,
    pub new_start: usize,
    pub new_count: usize,
}

/// Parse a hunk header line.
///
/// Format: "@@ -old_start,old_len +new_start,new_len @@" or "@@ -old_start +new_start @@"
/// Also handles: "@@ -old_start,old_len +new_start,new_len @@ context info"
///
/// An omitted length means one line.
pub(super) fn parse_hunk_header(line: &str) -> Option<HunkHeader> {
    let line = line.strip_prefix("@@ ")?;

    let end_marker = line.find(" @@")?;
    let range_part = &line[..end_marker];

    let mut parts = range_part.split_whitespace();
    let old_part = parts.next()?.strip_prefix('-')?;
    let new_part = parts.next()?.strip_prefix('+')?;
    if parts.next().is_some() {
        // Combined diffs (@@@) are not unified two-way diffs.
        return None;
    }

    let (old_start, old_count) = parse_range_spec(old_part)?;
    let (new_start, new_count) = parse_range_spec(new_part)?;

    Some(HunkHeader {
        old_start,
        old_count,
        new_start,
        new_count,
    })
}

/// Parse "start" or "start,len".
///
/// A non-empty range must start at line 1 or later and end within `usize`.
fn parse_range_spec(range: &str) -> Option<(usize, usize)> {
    let (start, count): (usize, usize) = match range.split_once(',') {
        Some((start, len)) => (start.parse().ok()?, len.parse().ok()?),
        None => (range.parse().ok()?, 1),
    };
    if count > 0 && (start == 0 || start.checked_add(count - 1).is_none()) {
        return None;
    }
    Some((start, count))
}

/// Parse both paths from the remainder of a "diff --git" line.
///
/// Handles:
/// - "a/path/to/file b/path/to/file" (normal)
/// - "a/path/to/file b/path/to/renamed" (rename)
/// - "\"a/with space\" \"b/with space\"" (quoted)
///
/// Returns (old, new) with the `a/` and `b/` prefixes removed.
pub(super) fn parse_diff_git_line(rest: &str) -> Option<(String, String)> {
    if rest.starts_with('"') {
        let (first, remainder) = split_quoted(rest)?;
        let second = remainder.trim_start();
        if second.is_empty() {
            return None;
        }
        return Some((clean_path(&first), clean_path(second)));
    }

    // Paths can contain spaces: find the last " b/" (or quoted "b/) separator.
    if let Some(b_pos) = rest.rfind(" \"b/").or_else(|| rest.rfind(" b/")) {
        let old = &rest[..b_pos];
        let new = &rest[b_pos + 1..];
        return Some((clean_path(old), clean_path(new)));
    }

    // --no-prefix output: "path path"
    let parts: Vec<&str> = rest.split_whitespace().collect();
    if parts.len() == 2 {
        return Some((clean_path(parts[0]), clean_path(parts[1])));
    }

    None
}

/// Split a leading C-style quoted token from `s`, returning the raw token
/// (still quoted) and the remainder.
fn split_quoted(s: &str) -> Option<(String, &str)> {
    let mut escaped = false;
    for (idx, ch) in s.char_indices().skip(1) {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '"' => return Some((s[..=idx].to_string(), &s[idx + 1..])),
            _ => {}
        }
    }
    None
}

/// Turn a raw path token from a diff header into a repo-relative path.
///
/// Strips trailing timestamps (plain `diff -u` output), decodes git's
/// quoting, and removes the `a/` or `b/` side prefix.
pub(super) fn clean_path(raw: &str) -> String {
    let raw = raw.split('\t').next().unwrap_or(raw).trim_end();
    let unquoted = unquote(raw);

    let stripped = if unquoted.len() > 2
        && (unquoted.starts_with("a/") || unquoted.starts_with("b/"))
    {
        &unquoted[2..]
    } else {
        unquoted.as_str()
    };

    normalize_path(stripped)
}

/// Clean a path from a "rename from"/"rename to" header (never prefixed).
pub(super) fn clean_rename_path(raw: &str) -> String {
    normalize_path(&unquote(raw.trim_end()))
}

/// Decode a git C-style quoted path. Unquoted input is returned as-is.
pub(super) fn unquote(raw: &str) -> String {
    let inner = match raw
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
    {
        Some(inner) => inner,
        None => return raw.to_string(),
    };

    let bytes = inner.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'\\' || i + 1 >= bytes.len() {
            out.push(bytes[i]);
            i += 1;
            continue;
        }
        let next = bytes[i + 1];
        match next {
            b'0'..=b'7' => {
                let mut value: u32 = 0;
                let mut digits = 0;
                while digits < 3 && i + 1 + digits < bytes.len() {
                    let d = bytes[i + 1 + digits];
                    if !(b'0'..=b'7').contains(&d) {
                        break;
                    }
                    value = value * 8 + u32::from(d - b'0');
                    digits += 1;
                }
                out.push((value & 0xff) as u8);
                i += 1 + digits;
            }
            _ => {
                out.push(match next {
                    b'n' => b'\n',
                    b't' => b'\t',
                    b'r' => b'\r',
                    b'a' => 0x07,
                    b'b' => 0x08,
                    b'f' => 0x0c,
                    b'v' => 0x0b,
                    other => other,
                });
                i += 2;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

/// Normalize a file path to use forward slashes.
///
/// This ensures consistent path format for glob matching,
/// regardless of the platform where the diff was generated.
pub(super) fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
