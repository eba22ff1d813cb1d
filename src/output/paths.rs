// src/output/paths.rs
//! Pure path calculations for the generated site.

use crate::types::PostUid;
use std::path::{Path, PathBuf};

const INDEX_FILE: &str = "index.html";
const POST_DIR: &str = "post";

/// Output path of the listing page.
pub fn index_output_path(out_dir: &Path) -> PathBuf {
    out_dir.join(INDEX_FILE)
}

/// Output path of a post page: `<out>/post/<uid>/index.html`, so the page
/// is served at `/post/<uid>`.
pub fn post_output_path(out_dir: &Path, uid: &PostUid) -> PathBuf {
    out_dir.join(POST_DIR).join(uid.as_str()).join(INDEX_FILE)
}

/// Link to a post page.
pub fn post_href(uid: &PostUid) -> String {
    format!("/{}/{}", POST_DIR, uid)
}
