/// One line of input, classified against the file grammar
///
/// Produced by [`classify`] and consumed immediately by the builder; nothing
/// here is retained after the line is processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Whitespace-only, or nothing left after stripping the comment
    Blank,
    /// `[name]` alone on its line
    GroupHeader(String),
    /// `key = value`, split at the first `=`; `raw` is uncoerced
    Setting { key: String, raw: String },
    /// Matches no known grammar rule
    Unrecognized,
}

/// Strip an inline comment from a line
///
/// Everything from the first `;` to the end of the line is discarded, which
/// covers both full-line comments and trailing ones (`[group] ; note`).
pub fn strip_comment(line: &str) -> &str {
    match line.find(';') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Classify a single line of input
///
/// Pure function over the line text; comment stripping happens first, then
/// the grammar rules are tried in priority order: blank, group header,
/// setting. A line starting with `[` either parses as a complete header or
/// is unrecognized; it never falls through to the setting rule.
pub fn classify(line: &str) -> Line {
    let line = strip_comment(line).trim();

    if line.is_empty() {
        return Line::Blank;
    }

    if let Some(rest) = line.strip_prefix('[') {
        if let Some(name) = rest.strip_suffix(']') {
            let name = name.trim();
            if !name.is_empty() {
                return Line::GroupHeader(name.to_string());
            }
        }
        return Line::Unrecognized;
    }

    if let Some(pos) = line.find('=') {
        let key = line[..pos].trim();
        if !key.is_empty() {
            return Line::Setting {
                key: key.to_string(),
                raw: line[pos + 1..].to_string(),
            };
        }
    }

    Line::Unrecognized
}
