//! Card and detail markup shared by the search and favorites tabs

use petmatch_core::controller::DetailOutcome;
use petmatch_core::presenter::{FavoriteToggle, PetCardView, PetDetailView, Tab};
use petmatch_domain::PetId;

use super::{action_button, escape};

fn back_label(tab: Tab) -> &'static str {
    match tab {
        Tab::Search => "\u{2190} Back to Search Results",
        Tab::Favorites => "\u{2190} Back to Favorites",
    }
}

fn favorite_button(toggle: &FavoriteToggle, id: PetId, tab: Tab) -> String {
    let action = if toggle.is_remove() { "/favorites/remove" } else { "/favorites/add" };
    action_button(
        action,
        toggle.element_id(),
        toggle.label(),
        &[("pet_id", id.to_string()), ("tab", tab.to_string())],
    )
}

fn back_button(element_id: &str, tab: Tab) -> String {
    action_button("/back", element_id, back_label(tab), &[("tab", tab.to_string())])
}

pub(super) fn card(card: &PetCardView, tab: Tab) -> String {
    let mut out = format!(
        r#"<article class="pet-card" id="card_{tab}_{id}"><img src="{img}" alt="{name}"><div>"#,
        id = card.id,
        img = escape(&card.image_url),
        name = escape(&card.name),
    );
    out.push_str(&format!(r#"<div class="pet-name">{}</div><div>"#, escape(&card.name)));
    for tag in &card.tags {
        out.push_str(&format!(r#"<span class="tag">{}</span> "#, escape(tag)));
    }
    out.push_str(r#"</div><div class="pet-details">"#);
    for (label, value) in
        [("Breed", &card.breed), ("Colors", &card.colors), ("Location", &card.location)]
    {
        if let Some(value) = value {
            out.push_str(&format!("<div><strong>{label}:</strong> {}</div>", escape(value)));
        }
    }
    out.push_str("</div>");
    if let Some(description) = &card.description {
        out.push_str(&format!(r#"<div class="pet-description">{}</div>"#, escape(description)));
    }
    out.push_str(&action_button(
        "/select",
        &card.details_element_id,
        "View Details",
        &[("pet_id", card.id.to_string()), ("tab", tab.to_string())],
    ));
    out.push_str(&favorite_button(&card.favorite, card.id, tab));
    out.push_str("</div></article>");
    out
}

pub(super) fn detail(outcome: &DetailOutcome, tab: Tab) -> String {
    match outcome {
        DetailOutcome::Found(view) => found(view, tab),
        DetailOutcome::Unavailable { message, back_element_id, .. } => format!(
            r#"<div class="notice notice-error">{}</div>{}"#,
            escape(message),
            back_button(back_element_id, tab)
        ),
    }
}

fn found(view: &PetDetailView, tab: Tab) -> String {
    let mut out = back_button(&view.back_element_id, tab);
    out.push_str(&format!(r#"<h1 class="main-header">{}</h1>"#, escape(&view.name)));

    if let Some(status) = &view.status {
        let class = if status.adoptable { "status-adoptable" } else { "status-other" };
        out.push_str(&format!(
            r#"<div style="text-align: center;"><span class="tag {class}">{}</span></div>"#,
            escape(&status.label)
        ));
    }

    out.push_str(r#"<div class="gallery">"#);
    for url in &view.gallery {
        out.push_str(&format!(r#"<img src="{}" alt="{}">"#, escape(url), escape(&view.name)));
    }
    out.push_str("</div>");

    out.push_str(r#"<div class="columns"><section><h3>Details</h3>"#);
    for fact in &view.facts {
        out.push_str(&format!("<p><strong>{}:</strong> {}</p>", fact.label, escape(&fact.value)));
    }
    out.push_str("</section><section><h3>Compatibility</h3>");
    for note in &view.compatibility {
        out.push_str(&format!("<p>{} {}</p>", note.kind.icon(), note.text));
    }
    out.push_str("</section></div>");

    if let Some(description) = &view.description {
        out.push_str(&format!(
            r#"<h3>About</h3><div class="pet-description">{}</div>"#,
            escape(description)
        ));
    }

    out.push_str("<h3>Adoption Information</h3>");
    if let Some(organization) = &view.organization {
        out.push_str(&format!("<p><strong>Organization:</strong> {}</p>", escape(organization)));
    }
    for fact in &view.contact {
        out.push_str(&format!("<p><strong>{}:</strong> {}</p>", fact.label, escape(&fact.value)));
    }
    if let Some(url) = &view.url {
        out.push_str(&format!(
            r#"<p><a href="{}" target="_blank" rel="noopener">View on Petfinder</a></p>"#,
            escape(url)
        ));
    }

    out.push_str(&favorite_button(&view.favorite, view.id, tab));
    out
}
