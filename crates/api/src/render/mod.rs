//! Server-side HTML rendering
//!
//! Renderers are pure functions from view models to markup. Every value that
//! came from the directory or the user goes through [`escape`].

mod about;
mod favorites;
mod pet;
mod search;

use petmatch_core::session::Notice;
use petmatch_domain::impl_choice_conversions;

pub use about::about_tab;
pub use favorites::favorites_tab;
pub use search::search_tab;

/// Top-level page tab
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageTab {
    #[default]
    Search,
    Favorites,
    About,
}

impl_choice_conversions!(PageTab {
    Search => "search",
    Favorites => "favorites",
    About => "about",
});

impl PageTab {
    fn title(self) -> &'static str {
        match self {
            Self::Search => "Search",
            Self::Favorites => "Favorites",
            Self::About => "About",
        }
    }
}

/// Escape text for use in element content and quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// A single-button form posting to `action`.
pub(crate) fn action_button(
    action: &str,
    element_id: &str,
    label: &str,
    hidden: &[(&str, String)],
) -> String {
    let mut out = format!(r#"<form method="post" action="{action}" class="inline">"#);
    for (name, value) in hidden {
        out.push_str(&format!(r#"<input type="hidden" name="{name}" value="{}">"#, escape(value)));
    }
    out.push_str(&format!(
        r#"<button type="submit" id="{}">{}</button></form>"#,
        escape(element_id),
        escape(label)
    ));
    out
}

/// Wrap a tab body in the full page layout.
pub fn page(active: PageTab, notice: Option<&Notice>, favorites: usize, body: &str) -> String {
    let mut nav = String::new();
    for tab in PageTab::ALL {
        let class = if *tab == active { "tab active" } else { "tab" };
        let label = match tab {
            PageTab::Favorites if favorites > 0 => format!("{} ({favorites})", tab.title()),
            _ => tab.title().to_string(),
        };
        nav.push_str(&format!(r#"<a class="{class}" href="/?tab={tab}">{label}</a>"#));
    }

    let notice = notice
        .map(|n| {
            format!(r#"<div class="notice notice-{}">{}</div>"#, n.level.as_str(), escape(&n.text))
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>PetMatch - Find Your Perfect Pet</title>
<style>{STYLE}</style>
</head>
<body>
<h1 class="main-header">&#128062; PetMatch</h1>
<p class="sub-header">Find your perfect pet companion</p>
<nav class="tabs">{nav}</nav>
{notice}
<main>{body}</main>
</body>
</html>
"#
    )
}

const STYLE: &str = r"
body { max-width: 760px; margin: 0 auto; padding: 1rem; font-family: sans-serif; }
.main-header { font-size: 2.5rem; color: #ff6b6c; text-align: center; margin-bottom: 1rem; }
.sub-header { font-size: 1.5rem; color: #4a4a4a; text-align: center; margin-bottom: 2rem; }
.tabs { display: flex; gap: 1rem; border-bottom: 1px solid #e0e0e0; margin-bottom: 1rem; }
.tab { padding: 0.5rem 1rem; text-decoration: none; color: #4a4a4a; }
.tab.active { border-bottom: 2px solid #ff6b6c; }
.notice { padding: 0.75rem; border-radius: 6px; margin-bottom: 1rem; }
.notice-success { background: #c8e6c9; }
.notice-info { background: #e3f2fd; }
.notice-error { background: #ffcdd2; }
.pet-card { display: flex; gap: 1rem; border-radius: 10px; border: 1px solid #e0e0e0; padding: 1rem; margin-bottom: 1rem; }
.pet-card img { width: 33%; object-fit: cover; }
.pet-name { font-size: 1.3rem; font-weight: bold; color: #ff6b6b; }
.pet-details { margin-top: 0.5rem; }
.pet-description { margin-top: 1rem; font-style: italic; }
.tag { background-color: #808080; color: #fff; border-radius: 20px; padding: 0.2rem 0.6rem; margin-right: 0.3rem; font-size: 0.8rem; }
.status-adoptable { background-color: #c8e6c9; color: #000; }
.status-other { background-color: #ffcdd2; color: #000; }
.gallery { display: flex; gap: 0.5rem; }
.gallery img { flex: 1; min-width: 0; }
.columns { display: flex; gap: 2rem; }
.inline { display: inline; }
";
