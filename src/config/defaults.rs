//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [convert] Section Defaults
// ============================================================================

pub mod convert {
    use crate::convert::extract::FALLBACK_TITLE;

    pub fn layout() -> String {
        "page".into()
    }

    pub fn fallback_title() -> String {
        FALLBACK_TITLE.into()
    }

    pub fn extension() -> String {
        "html".into()
    }

    pub fn ignored() -> Vec<String> {
        vec![".DS_Store".into()]
    }
}
