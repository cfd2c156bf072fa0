use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;

use crate::expand_general_categories;
use crate::load_general_categories;
use crate::load_properties;
use crate::properties::PropertyKey;
use crate::PropertySets;
use crate::SourceError;

pub const UNICODE_DATA: &str = "UnicodeData.txt";
pub const DERIVED_CORE_PROPERTIES: &str = "DerivedCoreProperties.txt";
pub const GRAPHEME_BREAK_PROPERTY: &str = "auxiliary/GraphemeBreakProperty.txt";
pub const WORD_BREAK_PROPERTY: &str = "auxiliary/WordBreakProperty.txt";
pub const SENTENCE_BREAK_PROPERTY: &str = "auxiliary/SentenceBreakProperty.txt";
pub const EMOJI_DATA: &str = "emoji/emoji-data.txt";

/// папка с файлами UCD, например data/ucd/15.1.0
/// файлы не скачиваются: отсутствие любого из них - ошибка
#[derive(Debug, Clone)]
pub struct Ucd
{
    dir: PathBuf,
}

impl Ucd
{
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, SourceError>
    {
        let dir = dir.into();

        if !dir.is_dir() {
            return Err(SourceError::Missing { path: dir });
        }

        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path
    {
        &self.dir
    }

    /// прочитать файл UCD, путь относительно папки
    pub fn read(&self, file: &str) -> Result<String, SourceError>
    {
        let path = self.dir.join(file);

        let data = fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => SourceError::Missing { path: path.clone() },
            _ => SourceError::Io {
                path: path.clone(),
                source,
            },
        })?;

        log::debug!("прочитан {}", path.display());

        Ok(data)
    }

    /// категории из файла свойств
    pub fn properties(
        &self,
        file: &str,
        interest: Option<&[PropertyKey]>,
    ) -> Result<PropertySets, SourceError>
    {
        let sets = load_properties(&self.read(file)?, interest);

        log::debug!("{}: категорий - {}", file, sets.len());

        Ok(sets)
    }

    /// основные категории из UnicodeData.txt, дополненные общими и Assigned
    pub fn general_categories(&self) -> Result<PropertySets, SourceError>
    {
        let raw = load_general_categories(&self.read(UNICODE_DATA)?);

        log::debug!("{}: категорий - {}", UNICODE_DATA, raw.len());

        Ok(expand_general_categories(raw))
    }
}
