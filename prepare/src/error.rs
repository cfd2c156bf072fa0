use std::path::PathBuf;

use thiserror::Error;
use unicode_segmentation_source::SourceError;

/// некорректные параметры построения таблиц
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError
{
    #[error("индекс должен содержать хотя бы один блок")]
    EmptyLookup,

    #[error("граница индекса 0x{0:X} за пределами Unicode")]
    CutoffOutOfRange(u32),

    #[error("граница индекса 0x{cutoff:X} не делится на количество блоков {len}")]
    UnevenLookup { cutoff: u32, len: u32 },
}

/// данные UCD противоречат друг другу - таблица не может быть построена
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntegrityError
{
    /// источники, которые не должны пересекаться, относят кодпоинты к разным категориям
    #[error(
        "диапазоны пересекаются: U+{:04X}..U+{:04X} ({}) и U+{:04X}..U+{:04X} ({})",
        .previous.0, .previous.1, .previous.2, .next.0, .next.1, .next.2
    )]
    Overlap { previous: (u32, u32, String), next: (u32, u32, String) },

    /// имя Any зарезервировано для промежутков между диапазонами
    #[error("категория {0} совпадает с категорией промежутков")]
    ReservedCategory(String),

    #[error("слишком много категорий: {0}")]
    TooManyCategories(usize),
}

#[derive(Debug, Error)]
pub enum PrepareError
{
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{domain}: {source}")]
    Integrity { domain: String, source: IntegrityError },

    #[error("{domain}: нет категории {category}")]
    MissingCategory { domain: String, category: String },

    #[error("не удалось записать {}: {source}", .path.display())]
    Output { path: PathBuf, source: std::io::Error },
}
