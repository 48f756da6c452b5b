//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Upstream directory
pub const DEFAULT_API_BASE_URL: &str = "https://api.petfinder.com/v2";
pub const API_KEY_ENV: &str = "PETFINDER_API_KEY";
pub const API_SECRET_ENV: &str = "PETFINDER_API_SECRET";

// Credential lifetime
pub const TOKEN_EXPIRY_MARGIN_SECS: i64 = 60;

// Search defaults
pub const DEFAULT_SEARCH_STATUS: &str = "adoptable";
pub const DEFAULT_SEARCH_SORT: &str = "distance";
pub const DEFAULT_SEARCH_LIMIT: u32 = 100;
pub const DEFAULT_DISTANCE_MILES: u32 = 50;
pub const MIN_DISTANCE_MILES: u32 = 10;
pub const MAX_DISTANCE_MILES: u32 = 500;
pub const DISTANCE_STEP_MILES: u32 = 10;

// Organization lookup
pub const ORGANIZATION_SEARCH_DISTANCE: u32 = 100;
pub const ORGANIZATION_SEARCH_LIMIT: u32 = 100;

// Presentation
pub const PAGE_SIZE: usize = 10;
pub const CARD_DESCRIPTION_LIMIT: usize = 300;
pub const DETAIL_DESCRIPTION_LIMIT: usize = 500;
pub const DETAIL_GALLERY_LIMIT: usize = 3;
pub const TRUNCATE_SUFFIX: &str = "...";
pub const CARD_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x300?text=No+Image";
pub const DETAIL_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/500x300?text=No+Image";

// Server defaults
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8501;
pub const DEFAULT_SESSION_IDLE_SECS: u64 = 3600;
pub const SESSION_COOKIE_NAME: &str = "petmatch_session";
