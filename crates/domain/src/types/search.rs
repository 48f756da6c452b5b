//! Search form choices and upstream query construction
//!
//! A [`SearchForm`] is what the user submitted; a [`SearchQuery`] is the
//! normalized request built fresh from it for every search. "Doesn't Matter"
//! selections and unchecked boxes never reach the query.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DISTANCE_MILES, DEFAULT_SEARCH_LIMIT, DEFAULT_SEARCH_SORT, DEFAULT_SEARCH_STATUS,
    DISTANCE_STEP_MILES, MAX_DISTANCE_MILES, MIN_DISTANCE_MILES,
};
use crate::impl_choice_conversions;

/// Animal types offered by the search form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimalType {
    #[default]
    Dog,
    Cat,
    Rabbit,
    SmallFurry,
    Horse,
    Bird,
    ScalesFinsOther,
    Barnyard,
}

impl_choice_conversions!(AnimalType {
    Dog => "Dog",
    Cat => "Cat",
    Rabbit => "Rabbit",
    SmallFurry => "Small & Furry",
    Horse => "Horse",
    Bird => "Bird",
    ScalesFinsOther => "Scales, Fins & Other",
    Barnyard => "Barnyard",
});

/// Age filter; `Any` is the "Doesn't Matter" sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeFilter {
    #[default]
    Any,
    Baby,
    Young,
    Adult,
    Senior,
}

impl_choice_conversions!(AgeFilter {
    Any => "Doesn't Matter",
    Baby => "Baby",
    Young => "Young",
    Adult => "Adult",
    Senior => "Senior",
});

/// Size filter; `Any` is the "Doesn't Matter" sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeFilter {
    #[default]
    Any,
    Small,
    Medium,
    Large,
    XLarge,
}

impl_choice_conversions!(SizeFilter {
    Any => "Doesn't Matter",
    Small => "Small",
    Medium => "Medium",
    Large => "Large",
    XLarge => "XLarge",
});

/// Gender filter; `Any` is the "Doesn't Matter" sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenderFilter {
    #[default]
    Any,
    Male,
    Female,
}

impl_choice_conversions!(GenderFilter {
    Any => "Doesn't Matter",
    Male => "Male",
    Female => "Female",
});

/// Query value of a filter, `None` for the "Doesn't Matter" sentinel.
macro_rules! filter_value {
    ($($filter:ident),+) => {
        $(
            impl $filter {
                /// Value sent upstream, or `None` when unconstrained.
                pub fn query_value(&self) -> Option<&'static str> {
                    match self {
                        Self::Any => None,
                        other => Some(other.label()),
                    }
                }
            }
        )+
    };
}

filter_value!(AgeFilter, SizeFilter, GenderFilter);

/// Raw search form as submitted by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchForm {
    pub animal_type: AnimalType,
    pub location: String,
    pub distance_miles: u32,
    pub age: AgeFilter,
    pub size: SizeFilter,
    pub gender: GenderFilter,
    pub good_with_children: bool,
    pub good_with_dogs: bool,
    pub good_with_cats: bool,
    pub house_trained: bool,
    pub special_needs: bool,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            animal_type: AnimalType::default(),
            location: String::new(),
            distance_miles: DEFAULT_DISTANCE_MILES,
            age: AgeFilter::Any,
            size: SizeFilter::Any,
            gender: GenderFilter::Any,
            good_with_children: false,
            good_with_dogs: false,
            good_with_cats: false,
            house_trained: false,
            special_needs: false,
        }
    }
}

impl SearchForm {
    /// Build the upstream query for this form.
    pub fn to_query(&self) -> SearchQuery {
        SearchQuery {
            animal_type: self.animal_type,
            location: self.location.trim().to_string(),
            distance_miles: normalize_distance(self.distance_miles),
            status: DEFAULT_SEARCH_STATUS.to_string(),
            sort_order: DEFAULT_SEARCH_SORT.to_string(),
            limit: DEFAULT_SEARCH_LIMIT,
            age: self.age,
            size: self.size,
            gender: self.gender,
            good_with_children: self.good_with_children,
            good_with_dogs: self.good_with_dogs,
            good_with_cats: self.good_with_cats,
            house_trained: self.house_trained,
            special_needs: self.special_needs,
        }
    }
}

/// Clamp a distance to the slider range and snap it to the slider step.
pub fn normalize_distance(miles: u32) -> u32 {
    let clamped = miles.clamp(MIN_DISTANCE_MILES, MAX_DISTANCE_MILES);
    let snapped = (clamped + DISTANCE_STEP_MILES / 2) / DISTANCE_STEP_MILES * DISTANCE_STEP_MILES;
    snapped.clamp(MIN_DISTANCE_MILES, MAX_DISTANCE_MILES)
}

/// Normalized animals-search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub animal_type: AnimalType,
    /// ZIP code or "City, State"; blank means unconstrained.
    pub location: String,
    pub distance_miles: u32,
    pub status: String,
    pub sort_order: String,
    pub limit: u32,
    pub age: AgeFilter,
    pub size: SizeFilter,
    pub gender: GenderFilter,
    pub good_with_children: bool,
    pub good_with_dogs: bool,
    pub good_with_cats: bool,
    pub house_trained: bool,
    pub special_needs: bool,
}

impl SearchQuery {
    /// Serialize into request parameters, in a stable order.
    ///
    /// `location` and `distance` are only sent together and only when a
    /// location was given. Checked boxes are sent as `1`.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("type", self.animal_type.label().to_string())];

        if !self.location.is_empty() {
            params.push(("location", self.location.clone()));
            params.push(("distance", self.distance_miles.to_string()));
        }

        params.push(("status", self.status.clone()));
        params.push(("sort", self.sort_order.clone()));
        params.push(("limit", self.limit.to_string()));

        let filters = [
            ("age", self.age.query_value()),
            ("size", self.size.query_value()),
            ("gender", self.gender.query_value()),
        ];
        let set_filters =
            filters.into_iter().filter_map(|(key, value)| Some((key, value?.to_string())));
        params.extend(set_filters);

        let flags = [
            ("good_with_children", self.good_with_children),
            ("good_with_dogs", self.good_with_dogs),
            ("good_with_cats", self.good_with_cats),
            ("house_trained", self.house_trained),
            ("special_needs", self.special_needs),
        ];
        let set_flags =
            flags.into_iter().filter(|(_, set)| *set).map(|(key, _)| (key, "1".to_string()));
        params.extend(set_flags);

        params
    }
}
