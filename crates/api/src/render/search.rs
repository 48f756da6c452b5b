//! Search tab: form, result list, pager, detail

use petmatch_core::controller::{ResultPage, SearchTabView};
use petmatch_core::presenter::Tab;
use petmatch_domain::constants::{DISTANCE_STEP_MILES, MAX_DISTANCE_MILES, MIN_DISTANCE_MILES};
use petmatch_domain::{AgeFilter, AnimalType, GenderFilter, SearchForm, SizeFilter};

use super::{escape, pet};

pub fn search_tab(view: &SearchTabView) -> String {
    match view {
        SearchTabView::Form { form } => search_form(form),
        SearchTabView::Results { form, page } => {
            let mut out = search_form(form);
            out.push_str(&results(page));
            out
        }
        SearchTabView::Detail(outcome) => pet::detail(outcome, Tab::Search),
    }
}

fn select<T: PartialEq + std::fmt::Display>(
    name: &str,
    label: &str,
    choices: &[T],
    current: &T,
) -> String {
    let mut out = format!(r#"<label>{label}<select name="{name}">"#);
    for choice in choices {
        let selected = if choice == current { " selected" } else { "" };
        let text = escape(&choice.to_string());
        out.push_str(&format!(r#"<option value="{text}"{selected}>{text}</option>"#));
    }
    out.push_str("</select></label><br>");
    out
}

fn checkbox(name: &str, label: &str, checked: bool) -> String {
    let checked = if checked { " checked" } else { "" };
    format!(
        r#"<label><input type="checkbox" name="{name}" value="on"{checked}> {label}</label><br>"#
    )
}

fn search_form(form: &SearchForm) -> String {
    let mut out = String::from(
        r#"<details open><summary>Search Options</summary><form method="post" action="/search" id="pet_search_form"><div class="columns"><div>"#,
    );
    out.push_str(&select("animal_type", "Animal Type", AnimalType::ALL, &form.animal_type));
    out.push_str(&format!(
        r#"<label>Location (ZIP code or City, State)<input type="text" name="location" value="{}"></label><br>"#,
        escape(&form.location)
    ));
    out.push_str(&format!(
        r#"<label>Distance (miles)<input type="range" name="distance_miles" min="{MIN_DISTANCE_MILES}" max="{MAX_DISTANCE_MILES}" step="{DISTANCE_STEP_MILES}" value="{}"></label>"#,
        form.distance_miles
    ));
    out.push_str("</div><div>");
    out.push_str(&select("age", "Age", AgeFilter::ALL, &form.age));
    out.push_str(&select("size", "Size", SizeFilter::ALL, &form.size));
    out.push_str(&select("gender", "Gender", GenderFilter::ALL, &form.gender));
    out.push_str(&checkbox("good_with_children", "Good with children", form.good_with_children));
    out.push_str(&checkbox("good_with_dogs", "Good with dogs", form.good_with_dogs));
    out.push_str(&checkbox("good_with_cats", "Good with cats", form.good_with_cats));
    out.push_str(&checkbox("house_trained", "House-trained", form.house_trained));
    out.push_str(&checkbox("special_needs", "Special needs", form.special_needs));
    out.push_str(r#"</div></div><button type="submit">Search</button></form></details>"#);
    out
}

fn results(page: &ResultPage) -> String {
    let mut out = String::from("<h3>Search Results</h3>");
    if page.has_pager() {
        out.push_str(&format!(
            r#"<form method="post" action="/page" id="pager"><label>Page <input type="range" name="page" min="1" max="{total}" value="{current}"></label> {current} / {total} <button type="submit">Go</button></form>"#,
            total = page.total_pages,
            current = page.page,
        ));
    }
    for card in &page.cards {
        out.push_str("<hr>");
        out.push_str(&pet::card(card, Tab::Search));
    }
    out
}
