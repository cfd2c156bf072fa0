use unicode_segmentation_source::properties::PropertyKey;
use unicode_segmentation_source::PropertySets;
use unicode_segmentation_source::SourceError;
use unicode_segmentation_source::Ucd;
use unicode_segmentation_source::DERIVED_CORE_PROPERTIES;
use unicode_segmentation_source::EMOJI_DATA;
use unicode_segmentation_source::GRAPHEME_BREAK_PROPERTY;
use unicode_segmentation_source::SENTENCE_BREAK_PROPERTY;
use unicode_segmentation_source::WORD_BREAK_PROPERTY;

use crate::tables::compress_sets;
use crate::tables::BooleanModule;
use crate::tables::BooleanProperty;
use crate::tables::BreakTable;
use crate::tables::CategoryIntervals;
use crate::PrepareError;
use crate::TablesConfig;

/// категория N - цифры и числовые символы
pub const NUMERIC: &str = "N";
pub const ALPHABETIC: &str = "Alphabetic";
pub const INCB_CONSONANT: &str = "InCB_Consonant";
pub const INCB_EXTEND: &str = "InCB_Extend";
pub const INCB_LINKER: &str = "InCB_Linker";
pub const EXTENDED_PICTOGRAPHIC: &str = "Extended_Pictographic";

/// экспортируемые свойства основных категорий
pub const GENERAL_CATEGORY_EXPORTS: &[&str] = &[NUMERIC];
/// экспортируемые производные свойства
pub const DERIVED_PROPERTY_EXPORTS: &[&str] = &[ALPHABETIC, INCB_EXTEND];

/// интересующие нас записи DerivedCoreProperties.txt
pub fn derived_interest() -> Vec<PropertyKey>
{
    vec![
        PropertyKey::new("Alphabetic"),
        PropertyKey::with_value("InCB", "Consonant"),
        PropertyKey::with_value("InCB", "Extend"),
        PropertyKey::with_value("InCB", "Linker"),
    ]
}

/// интересующие нас записи emoji-data.txt
pub fn emoji_interest() -> Vec<PropertyKey>
{
    vec![PropertyKey::new("Extended_Pictographic")]
}

/// исходные данные UCD, разобранные по категориям
#[derive(Debug, Clone, Default)]
pub struct UcdInputs
{
    /// основные категории вместе с общими и Assigned
    pub general_categories: PropertySets,
    pub derived_properties: PropertySets,
    pub grapheme_break: PropertySets,
    pub word_break: PropertySets,
    pub sentence_break: PropertySets,
    pub emoji: PropertySets,
}

impl UcdInputs
{
    pub fn load(ucd: &Ucd) -> Result<Self, SourceError>
    {
        Ok(Self {
            general_categories: ucd.general_categories()?,
            derived_properties: ucd
                .properties(DERIVED_CORE_PROPERTIES, Some(derived_interest().as_slice()))?,
            grapheme_break: ucd.properties(GRAPHEME_BREAK_PROPERTY, None)?,
            word_break: ucd.properties(WORD_BREAK_PROPERTY, None)?,
            sentence_break: ucd.properties(SENTENCE_BREAK_PROPERTY, None)?,
            emoji: ucd.properties(EMOJI_DATA, Some(emoji_interest().as_slice()))?,
        })
    }
}

/// все таблицы, которые мы генерируем
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnicodeTables
{
    pub general_category: BooleanModule,
    pub derived_property: BooleanModule,
    pub incb_linker: BooleanProperty,
    pub grapheme: BreakTable,
    pub word: BreakTable,
    pub emoji: BreakTable,
    pub sentence: BreakTable,
}

impl UnicodeTables
{
    pub fn build(inputs: &UcdInputs, config: &TablesConfig) -> Result<Self, PrepareError>
    {
        config.validate()?;

        let general_categories = compress_sets(&inputs.general_categories);
        let derived = compress_sets(&inputs.derived_properties);
        let emoji = compress_sets(&inputs.emoji);

        let general_category = BooleanModule::build(
            "general_category",
            &general_categories,
            GENERAL_CATEGORY_EXPORTS,
            config,
        )?;
        let derived_property =
            BooleanModule::build("derived_property", &derived, DERIVED_PROPERTY_EXPORTS, config)?;
        let incb_linker =
            BooleanProperty::select("derived_property", &derived, INCB_LINKER, config)?;

        // Extended_Pictographic и InCB=Consonant не пересекаются со свойствами Grapheme_Cluster_Break,
        // поэтому хранятся в той же таблице
        let consonant = subset("grapheme", &derived, INCB_CONSONANT)?;
        let pictographic = subset("grapheme", &emoji, EXTENDED_PICTOGRAPHIC)?;

        let grapheme = BreakTable::build(
            "grapheme",
            &[&compress_sets(&inputs.grapheme_break), &consonant, &pictographic],
            config,
        )?;

        let word = BreakTable::build("word", &[&compress_sets(&inputs.word_break)], config)?;

        // часть эмодзи - ALetter, поэтому для слов Extended_Pictographic хранится отдельно
        let emoji = BreakTable::build("emoji", &[&pictographic], config)?;

        let sentence =
            BreakTable::build("sentence", &[&compress_sets(&inputs.sentence_break)], config)?;

        Ok(Self {
            general_category,
            derived_property,
            incb_linker,
            grapheme,
            word,
            emoji,
            sentence,
        })
    }

    pub fn break_tables(&self) -> [&BreakTable; 4]
    {
        [&self.grapheme, &self.word, &self.emoji, &self.sentence]
    }

    /// буква или цифра
    pub fn is_alphanumeric(&self, c: char) -> bool
    {
        let alphabetic = |c| {
            self.derived_property
                .get(ALPHABETIC)
                .is_some_and(|p| p.contains(c))
        };
        let numeric = |c| {
            self.general_category
                .get(NUMERIC)
                .is_some_and(|p| p.contains(c))
        };

        unicode_segmenting::is_alphanumeric(c, alphabetic, numeric)
    }
}

/// источник, состоящий из одной категории другого источника
fn subset(domain: &str, source: &CategoryIntervals, name: &str)
    -> Result<CategoryIntervals, PrepareError>
{
    match source.get_key_value(name) {
        Some((name, intervals)) => Ok(CategoryIntervals::from([(name.clone(), intervals.clone())])),
        None => Err(PrepareError::MissingCategory {
            domain: domain.to_owned(),
            category: name.to_owned(),
        }),
    }
}
