pub use classifier::RangeClassifier;
pub use lookup::LookupEntry;
pub use ranges::bsearch_range_table;
pub use ranges::is_alphabetic;
pub use ranges::is_alphanumeric;
pub use ranges::is_numeric;

mod classifier;
mod lookup;
mod ranges;

/// последний кодпоинт Unicode
pub const LAST_CODEPOINT: u32 = 0x10FFFF;
