use unicode_segmentation_source::codepoint::LAST_CODEPOINT;

use crate::ConfigError;

/// версия Unicode, для которой строятся таблицы
pub const UNICODE_VERSION: (u64, u64, u64) = (15, 1, 0);

/// индекс таблиц диапазонов покрывает кодпоинты до этого значения (не включая).
/// почти все записи таблиц сегментации находятся в интервале [0x0, 0x20000]
pub const LOOKUP_CUTOFF: u32 = 0x20000;
/// количество блоков индекса, должно быть делителем LOOKUP_CUTOFF
pub const LOOKUP_LEN: u32 = 0x400;
/// категории, состоящие из меньшего количества диапазонов, проверяются прямым сравнением, а не поиском по таблице
pub const LITERAL_THRESHOLD: usize = 16;

/// параметры построения таблиц
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TablesConfig
{
    /// граница индексируемой области
    pub lookup_cutoff: u32,
    /// количество блоков индекса
    pub lookup_len: u32,
    /// порог количества диапазонов для записи категории в виде сравнений
    pub literal_threshold: usize,
}

impl Default for TablesConfig
{
    fn default() -> Self
    {
        Self {
            lookup_cutoff: LOOKUP_CUTOFF,
            lookup_len: LOOKUP_LEN,
            literal_threshold: LITERAL_THRESHOLD,
        }
    }
}

impl TablesConfig
{
    pub fn validate(&self) -> Result<(), ConfigError>
    {
        if self.lookup_len == 0 {
            return Err(ConfigError::EmptyLookup);
        }

        if self.lookup_cutoff == 0 || self.lookup_cutoff > LAST_CODEPOINT + 1 {
            return Err(ConfigError::CutoffOutOfRange(self.lookup_cutoff));
        }

        if self.lookup_cutoff % self.lookup_len != 0 {
            return Err(ConfigError::UnevenLookup {
                cutoff: self.lookup_cutoff,
                len: self.lookup_len,
            });
        }

        Ok(())
    }

    /// размер блока индекса
    pub fn lookup_interval(&self) -> u32
    {
        self.lookup_cutoff / self.lookup_len
    }
}
