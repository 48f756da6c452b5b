//! Summary card for result and favorites lists

use petmatch_domain::constants::{CARD_DESCRIPTION_LIMIT, CARD_PLACEHOLDER_IMAGE};
use petmatch_domain::{PetId, PetRecord};

use super::context::{FavoriteToggle, RenderContext};
use super::text::{breed_line, color_line, present, title_case, truncate_description};

/// Everything a list card shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetCardView {
    pub id: PetId,
    pub name: String,
    pub image_url: String,
    /// Status, age, gender, size; each only when present.
    pub tags: Vec<String>,
    pub breed: Option<String>,
    pub colors: Option<String>,
    /// "City, State", only when both are known.
    pub location: Option<String>,
    pub description: Option<String>,
    pub details_element_id: String,
    pub favorite: FavoriteToggle,
}

/// Status tag text: "Adoptable" for adoptable records, otherwise the status
/// title-cased.
pub(crate) fn status_label(status: &str) -> String {
    if status.eq_ignore_ascii_case("adoptable") {
        "Adoptable".to_string()
    } else {
        title_case(status)
    }
}

/// Build the card for `record`. `is_favorite` picks the favorite toggle.
pub fn present_card(record: &PetRecord, is_favorite: bool, context: RenderContext) -> PetCardView {
    let image_url = record
        .photos
        .first()
        .and_then(|photo| present(&photo.medium))
        .unwrap_or(CARD_PLACEHOLDER_IMAGE)
        .to_string();

    let mut tags = Vec::new();
    if let Some(status) = present(&record.status) {
        tags.push(status_label(status));
    }
    let facts = [&record.age, &record.gender, &record.size];
    tags.extend(facts.into_iter().filter_map(present).map(str::to_string));

    let address = &record.contact.address;
    let location = match (present(&address.city), present(&address.state)) {
        (Some(city), Some(state)) => Some(format!("{city}, {state}")),
        _ => None,
    };

    let favorite = if is_favorite {
        FavoriteToggle::Remove { element_id: context.element_id("unfav", record.id) }
    } else {
        FavoriteToggle::Add { element_id: context.element_id("fav", record.id) }
    };

    PetCardView {
        id: record.id,
        name: record.name.clone(),
        image_url,
        tags,
        breed: breed_line(&record.breeds),
        colors: color_line(&record.colors),
        location,
        description: present(&record.description)
            .map(|text| truncate_description(text, CARD_DESCRIPTION_LIMIT)),
        details_element_id: context.element_id("details", record.id),
        favorite,
    }
}
