//! AgroBuddy Core
//!
//! Pure-library core of the AgroBuddy gardening-assistant storyboard:
//! - `catalog`: Per-crop care details over an immutable catalog
//! - `resolver`: Keyword-based canned-reply resolution (first match wins)
//! - `utils`: Utterance normalization
//!
//! All presentation concerns (rendering, transcripts, navigation chrome) live
//! outside this crate; the `chat_demo` binary is a minimal adapter.

pub mod catalog;
pub mod resolver;
pub mod utils;

// Re-export commonly used types
pub use catalog::{CatalogError, CropCatalog, CropRecord};
pub use resolver::{ResponseRule, RuleSet};
pub use utils::normalize::normalize_utterance;

#[cfg(test)]
mod tests {
    #[test]
    fn it_works() {
        assert_eq!(2 + 2, 4);
    }
}
