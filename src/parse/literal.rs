//! Literal text to values: numeric literals and string escapes.

const REPLACEMENT: char = '\u{FFFD}';
const HIGH_SURROGATES: std::ops::Range<u32> = 0xD800..0xDC00;
const LOW_SURROGATES: std::ops::Range<u32> = 0xDC00..0xE000;

/// Numeric value of a number token. `None` for bigint literals (`10n`) and
/// malformed input.
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    if text.ends_with('n') {
        return None;
    }
    let digits: String = text
        .chars()
        .filter(|&c| c != '_')
        .collect::<String>()
        .to_ascii_lowercase();

    if let Some(body) = digits.strip_prefix("0x") {
        return parse_radix(body, 16);
    }
    if let Some(body) = digits.strip_prefix("0o") {
        return parse_radix(body, 8);
    }
    if let Some(body) = digits.strip_prefix("0b") {
        return parse_radix(body, 2);
    }
    // Legacy octal: `017` is 15, but `019` is decimal.
    if digits.len() > 1
        && digits.starts_with('0')
        && digits.bytes().all(|b| b.is_ascii_digit())
        && digits.bytes().all(|b| b < b'8')
    {
        return parse_radix(&digits[1..], 8);
    }
    digits.parse().ok()
}

fn parse_radix(body: &str, radix: u32) -> Option<f64> {
    if body.is_empty() {
        return None;
    }
    body.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|digit| acc.mul_add(f64::from(radix), f64::from(digit)))
    })
}

/// Decode the escapes in the text between a string literal's quotes.
#[must_use]
pub fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        rest = decode_escape(&rest[pos + 1..], &mut out);
    }
    out.push_str(rest);
    out
}

/// Decode one escape whose backslash was already consumed; returns the
/// unconsumed input.
fn decode_escape<'a>(input: &'a str, out: &mut String) -> &'a str {
    let mut chars = input.chars();
    let Some(first) = chars.next() else {
        out.push('\\');
        return input;
    };
    let after = chars.as_str();

    match first {
        'n' => out.push('\n'),
        't' => out.push('\t'),
        'r' => out.push('\r'),
        'b' => out.push('\u{8}'),
        'f' => out.push('\u{c}'),
        'v' => out.push('\u{b}'),
        'x' => {
            return match hex_prefix(after, 2) {
                Some((value, rest)) => {
                    out.push(char::from_u32(value).unwrap_or(REPLACEMENT));
                    rest
                }
                None => {
                    out.push('x');
                    after
                }
            };
        }
        'u' => return decode_unicode(after, out),
        '0'..='7' => return decode_octal(first, after, out),
        // Line continuations produce nothing.
        '\r' => return after.strip_prefix('\n').unwrap_or(after),
        '\n' | '\u{2028}' | '\u{2029}' => {}
        other => out.push(other),
    }
    after
}

fn decode_unicode<'a>(input: &'a str, out: &mut String) -> &'a str {
    let parsed = braced_code_point(input).or_else(|| hex_prefix(input, 4));
    let Some((unit, rest)) = parsed else {
        out.push('u');
        return input;
    };

    if HIGH_SURROGATES.contains(&unit)
        && let Some(tail) = rest.strip_prefix("\\u")
        && let Some((low, after_low)) = hex_prefix(tail, 4)
        && LOW_SURROGATES.contains(&low)
    {
        let combined = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
        out.push(char::from_u32(combined).unwrap_or(REPLACEMENT));
        return after_low;
    }

    out.push(char::from_u32(unit).unwrap_or(REPLACEMENT));
    rest
}

fn decode_octal<'a>(first: char, input: &'a str, out: &mut String) -> &'a str {
    let mut value = first.to_digit(8).unwrap_or_default();
    let mut rest = input;
    // `\0` not followed by a digit is NUL; longer runs are legacy octal.
    for _ in 0..2 {
        let Some(next) = rest.chars().next().and_then(|c| c.to_digit(8)) else {
            break;
        };
        if value * 8 + next > 0xFF {
            break;
        }
        value = value * 8 + next;
        rest = &rest[1..];
    }
    out.push(char::from_u32(value).unwrap_or(REPLACEMENT));
    rest
}

fn hex_prefix(input: &str, digits: usize) -> Option<(u32, &str)> {
    let head = input.get(..digits)?;
    if !head.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(head, 16).ok()?;
    Some((value, &input[digits..]))
}

fn braced_code_point(input: &str) -> Option<(u32, &str)> {
    let body = input.strip_prefix('{')?;
    let close = body.find('}')?;
    let hex = &body[..close];
    if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    Some((value, &body[close + 1..]))
}

#[cfg(test)]
#[path = "literal_tests.rs"]
mod tests;
