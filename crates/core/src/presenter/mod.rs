//! Result presenter
//!
//! Pure functions from records to view models. Nothing here touches the
//! network; the HTML layer turns these view models into markup. The tab a
//! record is rendered in only shapes element ids, so cards and details look
//! the same on every tab.

pub mod card;
pub mod compatibility;
pub mod context;
pub mod detail;
pub mod text;

pub use card::{present_card, PetCardView};
pub use compatibility::{compatibility_notes, CompatibilityKind, CompatibilityNote};
pub use context::{FavoriteToggle, RenderContext, Tab};
pub use detail::{present_detail, Fact, PetDetailView, StatusBadge};
pub use text::{breed_line, color_line, title_case, truncate_description};
