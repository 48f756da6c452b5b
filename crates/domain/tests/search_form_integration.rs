//! Integration tests for search form choices and query building
//!
//! Covers the path a submitted form takes: labels parsed back into choices,
//! the form normalized into a query, and the query serialized as parameters.

use petmatch_domain::{AgeFilter, AnimalType, GenderFilter, PetMatchError, SearchForm, SizeFilter};

#[test]
fn every_offered_label_parses_back() {
    for choice in AnimalType::ALL {
        assert_eq!(choice.label().parse::<AnimalType>().as_ref(), Ok(choice));
    }
    for choice in AgeFilter::ALL {
        assert_eq!(choice.to_string().parse::<AgeFilter>().as_ref(), Ok(choice));
    }
    for choice in SizeFilter::ALL {
        assert_eq!(choice.to_string().parse::<SizeFilter>().as_ref(), Ok(choice));
    }
    for choice in GenderFilter::ALL {
        assert_eq!(choice.to_string().parse::<GenderFilter>().as_ref(), Ok(choice));
    }
}

#[test]
fn filters_offer_doesnt_matter_first() {
    assert_eq!(AgeFilter::ALL[0], AgeFilter::Any);
    assert_eq!(SizeFilter::ALL[0], SizeFilter::Any);
    assert_eq!(GenderFilter::ALL[0], GenderFilter::Any);
    assert_eq!(AnimalType::ALL.len(), 8);
}

#[test]
fn labels_parse_case_insensitively() {
    assert_eq!(" small & furry ".parse::<AnimalType>(), Ok(AnimalType::SmallFurry));
    assert_eq!("xlarge".parse::<SizeFilter>(), Ok(SizeFilter::XLarge));
    assert!("Unicorn".parse::<AnimalType>().is_err());
}

#[test]
fn form_is_normalized_into_query() {
    let form = SearchForm {
        animal_type: AnimalType::Rabbit,
        location: "  Portland, OR ".to_string(),
        distance_miles: 3,
        gender: GenderFilter::Male,
        house_trained: true,
        ..SearchForm::default()
    };

    let query = form.to_query();

    assert_eq!(query.location, "Portland, OR");
    assert_eq!(query.distance_miles, 10);
    assert_eq!(query.status, "adoptable");
    assert_eq!(query.sort_order, "distance");
    assert_eq!(query.limit, 100);

    let params = query.to_params();
    assert_eq!(
        params,
        vec![
            ("type", "Rabbit".to_string()),
            ("location", "Portland, OR".to_string()),
            ("distance", "10".to_string()),
            ("status", "adoptable".to_string()),
            ("sort", "distance".to_string()),
            ("limit", "100".to_string()),
            ("gender", "Male".to_string()),
            ("house_trained", "1".to_string()),
        ]
    );
}

#[test]
fn query_is_rebuilt_from_form_each_time() {
    let mut form =
        SearchForm { location: "10001".to_string(), good_with_dogs: true, ..SearchForm::default() };
    let first = form.to_query();

    form.good_with_dogs = false;
    let second = form.to_query();

    assert!(first.good_with_dogs);
    assert!(!second.good_with_dogs);
    assert!(!second.to_params().iter().any(|(key, _)| *key == "good_with_dogs"));
}

#[test]
fn errors_serialize_with_type_tag() {
    let err = PetMatchError::NotFound("animal 4".to_string());

    let json = serde_json::to_value(&err).unwrap();

    assert_eq!(json, serde_json::json!({ "type": "NotFound", "message": "animal 4" }));
    assert_eq!(err.label(), "not_found");
}
