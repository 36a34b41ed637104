//! Text utilities: identifier splitting, stop-word filtering and
//! blacklist-aware feature-string extraction.

pub mod features;
pub mod identifier;
pub mod stopwords;

pub use features::{feature_text, FeatureOptions};
pub use identifier::{correct, split_identifier};
pub use stopwords::{is_stop_word, StopwordSet};
