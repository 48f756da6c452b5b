//! View controller and the view states it produces

pub mod service;
pub mod views;

pub use service::{user_message, ViewController, MISSING_CREDENTIALS_MESSAGE};
pub use views::{
    DetailOutcome, FavoritesTabView, ResultPage, SearchOutcome, SearchTabView,
    DETAIL_UNAVAILABLE_MESSAGE,
};
