// src/constants.rs
//! Domain constants that define the operational boundaries of the system.

// ---------------------------------------------------------------------------
// Content API
// ---------------------------------------------------------------------------

/// Custom type holding the blog's posts.
pub const DEFAULT_DOCUMENT_TYPE: &str = "publication";

/// Posts per listing page. The blog shows one post and a "load more" control.
pub const DEFAULT_PAGE_SIZE: u32 = 1;

/// The content API refuses page sizes above 100.
pub const API_MAX_PAGE_SIZE: u32 = 100;

/// Listing order: most recently published first.
pub const LATEST_FIRST_ORDERING: &str = "[document.last_publication_date desc]";

/// Upper bound on pages followed when draining a whole listing.
pub const MAX_LISTING_PAGES: u32 = 500;

/// Environment variable holding the API endpoint.
pub const ENDPOINT_ENV_VAR: &str = "PRISMIC_API_ENDPOINT";

/// Environment variable holding the optional access token.
pub const ACCESS_TOKEN_ENV_VAR: &str = "PRISMIC_ACCESS_TOKEN";

// ---------------------------------------------------------------------------
// Static build
// ---------------------------------------------------------------------------

/// Posts rendered ahead of time when no prebuild list is given.
pub const DEFAULT_PREBUILT_POSTS: &[&str] = &["como-utilizar-hooks", "criando-um-app-cra-do-zero"];

/// Default output directory for the generated site.
pub const DEFAULT_OUT_DIR: &str = "public";

/// Reading speed used for the "N min" estimate on post pages.
pub const WORDS_PER_MINUTE: usize = 200;

/// Display format for publication dates (`25 mar 2021`).
pub const DISPLAY_DATE_FORMAT: &str = "%d %b %Y";

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing unparseable response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
