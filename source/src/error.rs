use std::path::PathBuf;

use thiserror::Error;

/// ошибки загрузки данных UCD
#[derive(Debug, Error)]
pub enum SourceError
{
    #[error("не найден файл UCD: {}", .path.display())]
    Missing { path: PathBuf },

    #[error("не удалось прочитать {}: {source}", .path.display())]
    Io { path: PathBuf, source: std::io::Error },

    #[error("неизвестная основная категория: {0}")]
    UnknownGeneralCategory(String),
}
