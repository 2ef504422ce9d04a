//! Cooking of raw string literal text into string values.

/// Error produced when a raw string literal cannot be cooked.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum StringValueError {
    #[error("invalid escape sequence `{0}`")]
    InvalidEscapeSequence(String),

    #[error("invalid unicode escape `{0}`")]
    InvalidUnicodeEscape(String),

    #[error("string literal is not terminated")]
    Unterminated,
}

pub(crate) fn cook(raw: &str) -> Result<String, StringValueError> {
    if raw.starts_with("\"\"\"") {
        cook_block_string(raw)
    } else {
        cook_single_line_string(raw)
    }
}

fn cook_single_line_string(raw: &str) -> Result<String, StringValueError> {
    let content = raw
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or(StringValueError::Unterminated)?;

    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }
        match chars.next() {
            Some('"') => result.push('"'),
            Some('\\') => result.push('\\'),
            Some('/') => result.push('/'),
            Some('b') => result.push('\u{0008}'),
            Some('f') => result.push('\u{000C}'),
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('u') => result.push(cook_unicode_escape(&mut chars)?),
            Some(other) => {
                return Err(StringValueError::InvalidEscapeSequence(format!(
                    "\\{other}"
                )));
            },
            None => {
                return Err(StringValueError::InvalidEscapeSequence(
                    "\\".to_string(),
                ));
            },
        }
    }
    Ok(result)
}

/// Reads the code point of a `\u` escape (the `\u` is already consumed).
///
/// Supports the fixed `\uXXXX` form (including surrogate pairs written as two
/// consecutive escapes) and the variable `\u{X...}` form.
fn cook_unicode_escape(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
) -> Result<char, StringValueError> {
    if chars.peek() == Some(&'{') {
        chars.next();
        let mut hex = String::new();
        loop {
            match chars.next() {
                Some('}') => break,
                Some(c) if c.is_ascii_hexdigit() && hex.len() < 8 => hex.push(c),
                Some(c) => {
                    return Err(StringValueError::InvalidUnicodeEscape(format!(
                        "\\u{{{hex}{c}"
                    )));
                },
                None => {
                    return Err(StringValueError::InvalidUnicodeEscape(format!(
                        "\\u{{{hex}"
                    )));
                },
            }
        }
        return u32::from_str_radix(&hex, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| {
                StringValueError::InvalidUnicodeEscape(format!("\\u{{{hex}}}"))
            });
    }

    let first = read_fixed_hex(chars)?;
    match first {
        0xD800..=0xDBFF => {
            let mut lookahead = chars.clone();
            let low = if lookahead.next() == Some('\\') && lookahead.next() == Some('u') {
                read_fixed_hex(&mut lookahead).ok()
            } else {
                None
            };
            match low {
                Some(low @ 0xDC00..=0xDFFF) => {
                    *chars = lookahead;
                    let code_point = 0x10000 + ((first - 0xD800) << 10) + (low - 0xDC00);
                    char::from_u32(code_point).ok_or_else(|| {
                        StringValueError::InvalidUnicodeEscape(format!(
                            "\\u{first:04X}\\u{low:04X}"
                        ))
                    })
                },
                _ => Err(StringValueError::InvalidUnicodeEscape(format!(
                    "\\u{first:04X}"
                ))),
            }
        },
        0xDC00..=0xDFFF => Err(StringValueError::InvalidUnicodeEscape(format!(
            "\\u{first:04X}"
        ))),
        _ => char::from_u32(first).ok_or_else(|| {
            StringValueError::InvalidUnicodeEscape(format!("\\u{first:04X}"))
        }),
    }
}

fn read_fixed_hex(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
) -> Result<u32, StringValueError> {
    let mut hex = String::with_capacity(4);
    for _ in 0..4 {
        match chars.next() {
            Some(c) if c.is_ascii_hexdigit() => hex.push(c),
            Some(c) => {
                return Err(StringValueError::InvalidUnicodeEscape(format!(
                    "\\u{hex}{c}"
                )));
            },
            None => {
                return Err(StringValueError::InvalidUnicodeEscape(format!(
                    "\\u{hex}"
                )));
            },
        }
    }
    u32::from_str_radix(&hex, 16)
        .map_err(|_| StringValueError::InvalidUnicodeEscape(format!("\\u{hex}")))
}

fn cook_block_string(raw: &str) -> Result<String, StringValueError> {
    let content = raw
        .strip_prefix("\"\"\"")
        .and_then(|rest| rest.strip_suffix("\"\"\""))
        .ok_or(StringValueError::Unterminated)?;
    let content = content.replace("\\\"\"\"", "\"\"\"");

    let lines = split_lines(&content);
    let common_indent = lines
        .iter()
        .skip(1)
        .filter_map(|line| {
            let indent = leading_whitespace(line);
            (indent < line.len()).then_some(indent)
        })
        .min();

    let mut cooked: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(idx, line)| match common_indent {
            Some(indent) if idx > 0 => line.get(indent..).unwrap_or(""),
            _ => line,
        })
        .collect();

    while cooked.first().is_some_and(|line| is_blank(line)) {
        cooked.remove(0);
    }
    while cooked.last().is_some_and(|line| is_blank(line)) {
        cooked.pop();
    }
    Ok(cooked.join("\n"))
}

/// Splits on `\r\n`, `\n` and `\r`.
fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let bytes = content.as_bytes();
    let mut line_start = 0;
    let mut idx = 0;
    while idx < bytes.len() {
        match bytes[idx] {
            b'\n' => {
                lines.push(&content[line_start..idx]);
                line_start = idx + 1;
            },
            b'\r' => {
                lines.push(&content[line_start..idx]);
                if bytes.get(idx + 1) == Some(&b'\n') {
                    idx += 1;
                }
                line_start = idx + 1;
            },
            _ => (),
        }
        idx += 1;
    }
    lines.push(&content[line_start..]);
    lines
}

fn leading_whitespace(line: &str) -> usize {
    line.bytes()
        .take_while(|b| *b == b' ' || *b == b'\t')
        .count()
}

fn is_blank(line: &str) -> bool {
    leading_whitespace(line) == line.len()
}
