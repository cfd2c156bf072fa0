#[macro_use]
extern crate lazy_static;

pub mod codepoint;
pub mod properties;

mod error;
mod expansion;
mod property_file;
mod sets;
mod ucd;
mod unicode_data;

pub use error::SourceError;

pub use expansion::expand_general_categories;
pub use expansion::ASSIGNED;

pub use property_file::load_properties;
pub use property_file::parse_line;

pub use sets::PropertySets;
pub use sets::PropertySetsBuilder;

pub use ucd::Ucd;
pub use ucd::DERIVED_CORE_PROPERTIES;
pub use ucd::EMOJI_DATA;
pub use ucd::GRAPHEME_BREAK_PROPERTY;
pub use ucd::SENTENCE_BREAK_PROPERTY;
pub use ucd::UNICODE_DATA;
pub use ucd::WORD_BREAK_PROPERTY;

pub use unicode_data::load_general_categories;
