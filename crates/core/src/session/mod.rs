//! Per-session ephemeral state
//!
//! One [`SessionState`] exists per browser session. It is mutated only by the
//! view controller and lives as long as the session does.

pub mod favorites;
pub mod notice;
pub mod pagination;
pub mod state;

pub use favorites::FavoritesList;
pub use notice::{Notice, NoticeLevel};
pub use pagination::{page_range, total_pages};
pub use state::SessionState;
