// src/core/sanitize.rs

/// Decode the handful of entities hero names and attribute values actually use,
/// plus numeric references (`&#39;`, `&#x27;`). Unknown entities pass through.
pub fn normalize_entities(s: &str) -> String {
    if !s.contains('&') {
        return s!(s);
    }
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        match tail.find(';').filter(|&semi| semi <= 10) {
            Some(semi) => {
                match decode_entity(&tail[1..semi]) {
                    Some(ch) => out.push(ch),
                    None => out.push_str(&tail[..=semi]),
                }
                rest = &tail[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "nbsp" => Some(' '),
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let num = name.strip_prefix('#')?;
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_and_numeric_entities() {
        assert_eq!(normalize_entities("Nature&#39;s Prophet"), "Nature's Prophet");
        assert_eq!(normalize_entities("Nature&#x27;s Prophet"), "Nature's Prophet");
        assert_eq!(normalize_entities("Keeper&nbsp;of&nbsp;the&nbsp;Light"), "Keeper of the Light");
        assert_eq!(normalize_entities("A &amp; B &lt;3"), "A & B <3");
    }

    #[test]
    fn unknown_or_unterminated_entities_pass_through() {
        assert_eq!(normalize_entities("&bogus; x"), "&bogus; x");
        assert_eq!(normalize_entities("Tom & Jerry"), "Tom & Jerry");
        assert_eq!(normalize_entities("trailing &"), "trailing &");
    }

    #[test]
    fn whitespace_collapses() {
        assert_eq!(normalize_ws("  Queen \n\t of   Pain "), "Queen of Pain");
    }
}
