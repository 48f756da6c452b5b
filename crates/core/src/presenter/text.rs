//! Text formatting helpers shared by cards and details

use petmatch_domain::constants::TRUNCATE_SUFFIX;
use petmatch_domain::{Breeds, Colors};

/// `Some(s)` only for a present, non-blank value.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// A present URL with an `http` or `https` scheme.
pub(crate) fn web_link(value: &Option<String>) -> Option<&str> {
    present(value).filter(|url| {
        url.split_once("://").is_some_and(|(scheme, rest)| {
            !rest.is_empty()
                && (scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https"))
        })
    })
}

/// Cut `text` to `limit` characters, appending `...` only when cut.
pub fn truncate_description(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_index, _)) => format!("{}{TRUNCATE_SUFFIX}", &text[..byte_index]),
        None => text.to_string(),
    }
}

/// "Primary & Secondary (Mixed)"; `None` without a primary breed.
pub fn breed_line(breeds: &Breeds) -> Option<String> {
    let mut line = present(&breeds.primary)?.to_string();
    if let Some(secondary) = present(&breeds.secondary) {
        line.push_str(" & ");
        line.push_str(secondary);
    }
    if breeds.mixed {
        line.push_str(" (Mixed)");
    }
    Some(line)
}

/// Comma-joined colors; `None` when all are empty.
pub fn color_line(colors: &Colors) -> Option<String> {
    let parts: Vec<&str> = [&colors.primary, &colors.secondary, &colors.tertiary]
        .into_iter()
        .filter_map(present)
        .collect();
    (!parts.is_empty()).then(|| parts.join(", "))
}

/// Capitalize the first letter of each word and lowercase the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn web_links_require_http_scheme() {
        let link = |raw: &str| web_link(&Some(raw.to_string())).map(str::to_string);

        assert_eq!(
            link(" https://www.petfinder.com/dog/rex-1 ").as_deref(),
            Some("https://www.petfinder.com/dog/rex-1")
        );
        assert_eq!(link("HTTP://example.org").as_deref(), Some("HTTP://example.org"));
        assert_eq!(link("javascript:alert(1)"), None);
        assert_eq!(link("javascript://%0aalert(1)"), None);
        assert_eq!(link("data:text/html,hi"), None);
        assert_eq!(link("https://"), None);
        assert_eq!(web_link(&None), None);
    }

    #[test]
    fn truncates_only_past_limit() {
        assert_eq!(truncate_description("short", 300), "short");

        let exact = "a".repeat(300);
        assert_eq!(truncate_description(&exact, 300), exact);

        let long = "b".repeat(520);
        let card = truncate_description(&long, 300);
        assert_eq!(card.len(), 303);
        assert!(card.ends_with("..."));

        let detail = truncate_description(&long, 500);
        assert_eq!(detail, format!("{}...", "b".repeat(500)));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let text = "é".repeat(10);
        assert_eq!(truncate_description(&text, 4), "éééé...");
    }

    #[test]
    fn breed_line_variants() {
        let mut breeds = Breeds { primary: Some("Beagle".into()), ..Breeds::default() };
        assert_eq!(breed_line(&breeds).as_deref(), Some("Beagle"));

        breeds.secondary = Some("Poodle".into());
        breeds.mixed = true;
        assert_eq!(breed_line(&breeds).as_deref(), Some("Beagle & Poodle (Mixed)"));

        breeds.primary = None;
        assert_eq!(breed_line(&breeds), None);
    }

    #[test]
    fn color_line_skips_empty() {
        let colors = Colors {
            primary: Some("Black".into()),
            secondary: Some(String::new()),
            tertiary: Some("White".into()),
        };
        assert_eq!(color_line(&colors).as_deref(), Some("Black, White"));
        assert_eq!(color_line(&Colors::default()), None);
    }

    #[test]
    fn title_cases_words() {
        assert_eq!(title_case("adopted"), "Adopted");
        assert_eq!(title_case("on hold"), "On Hold");
        assert_eq!(title_case("FOUND"), "Found");
    }
}
