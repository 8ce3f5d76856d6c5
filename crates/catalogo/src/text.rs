//! String helpers shared by the normalizer and the category model.

/// Path separator glyph used by the Danea export between category levels.
pub const PATH_SEP: char = '»';

/// Collapses internal whitespace runs to single spaces and trims the ends.
pub fn norm(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits a full category path on `»`, normalizing each segment and
/// dropping empty ones. `"Nautica » Ancore"` → `["Nautica", "Ancore"]`.
pub fn split_parts(full: &str) -> Vec<String> {
    full.split(PATH_SEP)
        .map(norm)
        .filter(|p| !p.is_empty())
        .collect()
}

/// URL/identifier-safe lowercase slug.
///
/// `»` becomes `>` so that sub-category slugs stay distinct from macro
/// slugs, `&` becomes `e` (Italian labels), anything outside
/// `[a-z0-9 >-]` is dropped, whitespace runs become a single `-` and
/// repeated dashes collapse. Idempotent.
pub fn slugify(s: &str) -> String {
    let lowered = s.to_lowercase();
    let mut cleaned = String::with_capacity(lowered.len());
    for c in lowered.trim().chars() {
        match c {
            PATH_SEP => cleaned.push('>'),
            '&' => cleaned.push('e'),
            'a'..='z' | '0'..='9' | '>' | '-' => cleaned.push(c),
            c if c.is_whitespace() => cleaned.push(' '),
            _ => {}
        }
    }

    // Whitespace runs become single dashes, then dash runs collapse.
    let dashed = cleaned.split_whitespace().collect::<Vec<_>>().join("-");
    let mut out = String::with_capacity(dashed.len());
    let mut last_dash = false;
    for c in dashed.chars() {
        if c == '-' {
            if !last_dash {
                out.push(c);
            }
            last_dash = true;
        } else {
            out.push(c);
            last_dash = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn norm_collapses_whitespace() {
        assert_eq!(norm("  Ancore   e  catene \t"), "Ancore e catene");
        assert_eq!(norm(""), "");
    }

    #[test]
    fn split_parts_drops_empty_segments() {
        assert_eq!(
            split_parts("Nautica »  Ancore » "),
            vec!["Nautica".to_string(), "Ancore".to_string()]
        );
        assert!(split_parts("").is_empty());
    }

    #[test]
    fn slugify_basic() {
        assert_eq!(slugify("Ancore & Catene"), "ancore-e-catene");
        assert_eq!(slugify("Nautica » Ancore"), "nautica->-ancore");
        assert_eq!(slugify("  Vernici   (mare)  "), "vernici-mare");
    }

    #[test]
    fn slugify_collapses_dashes() {
        assert_eq!(slugify("a -- b"), "a-b");
        assert_eq!(slugify("già--fatto"), "gi-fatto");
    }

    #[test]
    fn slugify_is_idempotent() {
        for s in [
            "Nautica » Ancore & Catene",
            "  Vernici   (mare)  ",
            "ELETTRONICA » GPS » Cartografia",
            "a -- b",
        ] {
            let once = slugify(s);
            assert_eq!(slugify(&once), once, "not idempotent for {s:?}");
        }
    }
}
