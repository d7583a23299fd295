pub mod fetch;
pub mod normalize;

pub use fetch::{Fetcher, SourceConfig};
pub use normalize::{normalize_word, LookupRequest};
