//! Full detail view of a single record

use petmatch_domain::constants::{
    DETAIL_DESCRIPTION_LIMIT, DETAIL_GALLERY_LIMIT, DETAIL_PLACEHOLDER_IMAGE,
};
use petmatch_domain::{PetId, PetRecord};

use super::card::status_label;
use super::compatibility::{compatibility_notes, CompatibilityNote};
use super::context::{FavoriteToggle, RenderContext};
use super::text::{breed_line, color_line, present, truncate_description, web_link};

/// Labelled value, e.g. `Breed: Beagle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact {
    pub label: &'static str,
    pub value: String,
}

impl Fact {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self { label, value: value.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: String,
    pub adoptable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetDetailView {
    pub id: PetId,
    pub name: String,
    pub status: Option<StatusBadge>,
    /// Large photos, at most three; a single placeholder when none.
    pub gallery: Vec<String>,
    pub facts: Vec<Fact>,
    pub compatibility: Vec<CompatibilityNote>,
    pub description: Option<String>,
    pub organization: Option<String>,
    pub contact: Vec<Fact>,
    pub url: Option<String>,
    pub back_element_id: String,
    pub favorite: FavoriteToggle,
}

pub fn present_detail(
    record: &PetRecord,
    is_favorite: bool,
    context: RenderContext,
) -> PetDetailView {
    let mut gallery: Vec<String> = record
        .photos
        .iter()
        .take(DETAIL_GALLERY_LIMIT)
        .filter_map(|photo| present(&photo.large))
        .map(str::to_string)
        .collect();
    if gallery.is_empty() {
        gallery.push(DETAIL_PLACEHOLDER_IMAGE.to_string());
    }

    let mut facts = Vec::new();
    if let Some(kind) = present(&record.kind) {
        facts.push(Fact::new("Type", kind));
    }
    if let Some(breed) = breed_line(&record.breeds) {
        facts.push(Fact::new("Breed", breed));
    }
    for (label, value) in
        [("Age", &record.age), ("Gender", &record.gender), ("Size", &record.size)]
    {
        if let Some(value) = present(value) {
            facts.push(Fact::new(label, value));
        }
    }
    if let Some(colors) = color_line(&record.colors) {
        facts.push(Fact::new("Colors", colors));
    }

    let mut contact = Vec::new();
    if let Some(email) = present(&record.contact.email) {
        contact.push(Fact::new("Email", email));
    }
    if let Some(phone) = present(&record.contact.phone) {
        contact.push(Fact::new("Phone", phone));
    }
    let address = &record.contact.address;
    if let (Some(city), Some(state)) = (present(&address.city), present(&address.state)) {
        let location = match present(&address.postcode) {
            Some(postcode) => format!("{city}, {state} {postcode}"),
            None => format!("{city}, {state}"),
        };
        contact.push(Fact::new("Location", location));
    }

    let favorite = if is_favorite {
        FavoriteToggle::Remove { element_id: context.element_id("rem_fav", record.id) }
    } else {
        FavoriteToggle::Add { element_id: context.element_id("add_fav", record.id) }
    };

    PetDetailView {
        id: record.id,
        name: record.name.clone(),
        status: present(&record.status).map(|status| StatusBadge {
            label: status_label(status),
            adoptable: record.is_adoptable(),
        }),
        gallery,
        facts,
        compatibility: compatibility_notes(record),
        description: present(&record.description)
            .map(|text| truncate_description(text, DETAIL_DESCRIPTION_LIMIT)),
        organization: present(&record.organization_id).map(str::to_string),
        contact,
        url: web_link(&record.url).map(str::to_string),
        back_element_id: context.element_id("back", record.id),
        favorite,
    }
}

#[cfg(test)]
mod tests {
    use petmatch_domain::{Address, Photo};

    use super::*;
    use crate::presenter::Tab;

    fn photo(large: &str) -> Photo {
        Photo { large: Some(large.to_string()), ..Photo::default() }
    }

    #[test]
    fn gallery_caps_at_three_large_photos() {
        let mut record = PetRecord::new(1, "Rex");
        record.photos = vec![photo("1.jpg"), photo("2.jpg"), photo("3.jpg"), photo("4.jpg")];

        let view = present_detail(&record, false, RenderContext::default());
        assert_eq!(view.gallery, vec!["1.jpg", "2.jpg", "3.jpg"]);
    }

    #[test]
    fn empty_gallery_gets_placeholder() {
        let view = present_detail(&PetRecord::new(1, "Rex"), false, RenderContext::default());

        assert_eq!(view.gallery, vec![DETAIL_PLACEHOLDER_IMAGE]);
        assert!(view.facts.is_empty());
        assert!(view.contact.is_empty());
        assert_eq!(view.status, None);
        assert_eq!(view.url, None);
    }

    #[test]
    fn long_description_truncated_to_detail_limit() {
        let mut record = PetRecord::new(1, "Rex");
        record.description = Some("y".repeat(520));

        let view = present_detail(&record, false, RenderContext::default());
        assert_eq!(view.description, Some(format!("{}...", "y".repeat(500))));
    }

    #[test]
    fn non_web_url_gets_no_link() {
        let mut record = PetRecord::new(5, "Rex");
        record.url = Some("javascript:alert(document.cookie)".into());

        let view = present_detail(&record, false, RenderContext::default());

        assert_eq!(view.url, None);
    }

    #[test]
    fn contact_block_and_badge() {
        let mut record = PetRecord::new(12, "Luna");
        record.status = Some("adoptable".into());
        record.organization_id = Some("NY835".into());
        record.url = Some("https://www.petfinder.com/cat/luna-12".into());
        record.contact.email = Some("adopt@example.org".into());
        record.contact.address = Address {
            city: Some("New York".into()),
            state: Some("NY".into()),
            postcode: Some("10001".into()),
            ..Address::default()
        };

        let view = present_detail(&record, true, RenderContext::new(Tab::Favorites));

        assert_eq!(view.status, Some(StatusBadge { label: "Adoptable".into(), adoptable: true }));
        assert_eq!(view.organization.as_deref(), Some("NY835"));
        assert_eq!(view.url.as_deref(), Some("https://www.petfinder.com/cat/luna-12"));
        assert_eq!(
            view.contact,
            vec![
                Fact::new("Email", "adopt@example.org"),
                Fact::new("Location", "New York, NY 10001"),
            ]
        );
        assert_eq!(view.back_element_id, "back_favorites_12");
        assert_eq!(view.favorite.element_id(), "rem_fav_favorites_12");
    }

    #[test]
    fn facts_follow_display_order() {
        let mut record = PetRecord::new(3, "Pip");
        record.kind = Some("Rabbit".into());
        record.age = Some("Baby".into());
        record.size = Some("Small".into());
        record.colors.primary = Some("White".into());

        let labels: Vec<_> = present_detail(&record, false, RenderContext::default())
            .facts
            .iter()
            .map(|f| f.label)
            .collect();
        assert_eq!(labels, vec!["Type", "Age", "Size", "Colors"]);
    }
}
