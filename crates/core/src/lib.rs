pub mod intent;
pub mod matcher;
pub mod models;
pub mod synonyms;
pub mod text;

pub use intent::{classify_fixed_intent, contains_any};
pub use matcher::{find_best_match, score_item};
pub use models::*;
pub use synonyms::{ExpandedQuery, SynonymTable};
pub use text::{normalize, tokenize, FoldTable};
