// src/core/html.rs
//
// Case-insensitive scanning over raw HTML. No DOM: callers walk known blocks
// (`<table>` → `<tr>` → `<td>`) and read attributes or text out of them.
// Same-name nesting is not tracked; the first matching close tag ends a block.

use super::sanitize::{normalize_entities, normalize_ws};

/// ASCII case-insensitive `find`, starting at byte offset `from`.
pub fn find_ci(hay: &str, needle: &str, from: usize) -> Option<usize> {
    let h = hay.as_bytes().get(from..)?;
    let n = needle.as_bytes();
    if n.is_empty() {
        return Some(from);
    }
    h.windows(n.len())
        .position(|w| w.eq_ignore_ascii_case(n))
        .map(|i| i + from)
}

/// Offset just past the `>` closing the tag opened at `start` (which must
/// point at `<`). Quoted attribute values may contain `>`.
pub fn open_tag_end(s: &str, start: usize) -> Option<usize> {
    let b = s.as_bytes();
    let mut in_s = false; // '
    let mut in_d = false; // "
    let mut i = start + 1;
    while i < b.len() {
        match b[i] {
            b'\'' if !in_d => in_s = !in_s,
            b'"' if !in_s => in_d = !in_d,
            b'>' if !in_s && !in_d => return Some(i + 1),
            _ => {}
        }
        i += 1;
    }
    None
}

/// Start of the next `<name ...>` at or after `from`. `<th` does not match `<thead`.
pub fn find_tag_ci(s: &str, name: &str, from: usize) -> Option<usize> {
    let pat = join!("<", name);
    let mut pos = from;
    loop {
        let at = find_ci(s, &pat, pos)?;
        match s.as_bytes().get(at + pat.len()) {
            Some(c) if c.is_ascii_whitespace() || *c == b'>' || *c == b'/' => return Some(at),
            None => return None,
            _ => pos = at + 1,
        }
    }
}

/// Next `<name …>…</name>` block at or after `from`, as a byte range.
pub fn next_tag_block_ci(s: &str, name: &str, from: usize) -> Option<(usize, usize)> {
    let start = find_tag_ci(s, name, from)?;
    let open_end = open_tag_end(s, start)?;
    let close = find_ci(s, &join!("</", name), open_end)?;
    let end = s[close..].find('>')? + close + 1;
    Some((start, end))
}

/// First `<name>` block in `s`.
pub fn first_block_ci<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    next_tag_block_ci(s, name, 0).map(|(a, b)| &s[a..b])
}

/// All consecutive `<name>` blocks in `s`, in document order.
pub fn blocks_ci<'a>(s: &'a str, name: &'a str) -> TagBlocks<'a> {
    TagBlocks { s, name, pos: 0 }
}

pub struct TagBlocks<'a> {
    s: &'a str,
    name: &'a str,
    pos: usize,
}

impl<'a> Iterator for TagBlocks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let (a, b) = next_tag_block_ci(self.s, self.name, self.pos)?;
        self.pos = b;
        Some(&self.s[a..b])
    }
}

/// The opening tag of a block, `<td class=…>` included.
pub fn open_tag(block: &str) -> &str {
    match open_tag_end(block, 0) {
        Some(e) => &block[..e],
        None => block,
    }
}

/// Everything between the opening tag and the last `<` of a block.
pub fn inner_after_open_tag(block: &str) -> &str {
    if let Some(oe) = open_tag_end(block, 0) {
        if let Some(cs) = block.rfind('<') {
            if cs >= oe {
                return &block[oe..cs];
            }
        }
    }
    ""
}

/// Value of attribute `attr` on the block's opening tag, entity-decoded.
/// Handles double, single and unquoted values; bare attributes yield "".
pub fn attr_value(block: &str, attr: &str) -> Option<String> {
    let tag = open_tag(block);
    let b = tag.as_bytes();
    let n = b.len();

    // skip "<tagname"
    let mut i = 1;
    while i < n && !b[i].is_ascii_whitespace() && b[i] != b'>' && b[i] != b'/' {
        i += 1;
    }

    while i < n {
        while i < n && (b[i].is_ascii_whitespace() || b[i] == b'/') {
            i += 1;
        }
        if i >= n || b[i] == b'>' {
            return None;
        }

        let name_start = i;
        while i < n && !b[i].is_ascii_whitespace() && !matches!(b[i], b'=' | b'>' | b'/') {
            i += 1;
        }
        let name = &tag[name_start..i];

        while i < n && b[i].is_ascii_whitespace() {
            i += 1;
        }
        let value = if i < n && b[i] == b'=' {
            i += 1;
            while i < n && b[i].is_ascii_whitespace() {
                i += 1;
            }
            match b.get(i) {
                Some(&q) if q == b'"' || q == b'\'' => {
                    let v_start = i + 1;
                    let v_end = tag[v_start..].find(q as char).map(|e| e + v_start).unwrap_or(n);
                    i = (v_end + 1).min(n);
                    &tag[v_start..v_end]
                }
                _ => {
                    let v_start = i;
                    while i < n && !b[i].is_ascii_whitespace() && b[i] != b'>' {
                        i += 1;
                    }
                    &tag[v_start..i]
                }
            }
        } else {
            ""
        };

        if name.eq_ignore_ascii_case(attr) {
            return Some(normalize_entities(value));
        }
    }
    None
}

/// First non-blank text node inside `s`, entity-decoded and whitespace-collapsed.
pub fn first_text(s: &str) -> Option<String> {
    let mut pos = 0;
    while pos < s.len() {
        match s[pos..].find('<') {
            Some(0) => {
                pos = open_tag_end(s, pos).unwrap_or(s.len());
            }
            found => {
                let end = found.map(|i| pos + i).unwrap_or(s.len());
                let text = normalize_ws(&normalize_entities(&s[pos..end]));
                if !text.is_empty() {
                    return Some(text);
                }
                pos = end;
            }
        }
    }
    None
}

/// Visible text of a fragment with tags removed.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&normalize_entities(&out))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_ci_ignores_case() {
        assert_eq!(find_ci("abc<TaBlE>", "<table", 0), Some(3));
        assert_eq!(find_ci("<td><td>", "<TD", 1), Some(4));
        assert_eq!(find_ci("short", "much longer", 0), None);
        assert_eq!(find_ci("abc", "a", 10), None);
    }

    #[test]
    fn tag_names_match_whole_words() {
        let s = "<thead><tr><th>A</th></tr></thead>";
        assert_eq!(find_tag_ci(s, "th", 0), Some(11));
        assert_eq!(find_tag_ci(s, "thead", 0), Some(0));
        assert_eq!(find_tag_ci("<table", "table", 0), None);
    }

    #[test]
    fn blocks_in_order() {
        let row = r#"<tr><td>a</td><TD class="x">b</Td><td>c</td></tr>"#;
        let cells: Vec<&str> = blocks_ci(row, "td").collect();
        assert_eq!(cells.len(), 3);
        assert_eq!(inner_after_open_tag(cells[1]), "b");
        assert_eq!(open_tag(cells[1]), r#"<TD class="x">"#);
    }

    #[test]
    fn quoted_gt_does_not_end_open_tag() {
        let block = r#"<td title="a > b" data-value="7">x</td>"#;
        assert_eq!(inner_after_open_tag(block), "x");
        assert_eq!(attr_value(block, "data-value").as_deref(), Some("7"));
    }

    #[test]
    fn attr_value_variants() {
        let block = r#"<td class='num' DATA-VALUE=512.25 data-x="&quot;q&quot;" hidden>512</td>"#;
        assert_eq!(attr_value(block, "data-value").as_deref(), Some("512.25"));
        assert_eq!(attr_value(block, "class").as_deref(), Some("num"));
        assert_eq!(attr_value(block, "data-x").as_deref(), Some("\"q\""));
        assert_eq!(attr_value(block, "hidden").as_deref(), Some(""));
        assert_eq!(attr_value(block, "value"), None);
        assert_eq!(attr_value("<td>1</td>", "data-value"), None);
    }

    #[test]
    fn attr_name_must_match_exactly() {
        let block = r#"<td xdata-value="1" data-values="2">x</td>"#;
        assert_eq!(attr_value(block, "data-value"), None);
    }

    #[test]
    fn first_text_skips_markup_and_blank_nodes() {
        let cell = "\n  <a href=\"/heroes/anti-mage\">Anti-Mage</a><div class=\"subtext\">Carry</div>";
        assert_eq!(first_text(cell).as_deref(), Some("Anti-Mage"));
        assert_eq!(first_text("Nature&#39;s  Prophet<br>x").as_deref(), Some("Nature's Prophet"));
        assert_eq!(first_text("<img src=\"x.png\"> "), None);
        assert_eq!(first_text(""), None);
    }

    #[test]
    fn strip_tags_collapses() {
        assert_eq!(strip_tags("<b>52.3</b>&nbsp;<i>%</i>"), "52.3 %");
    }
}
