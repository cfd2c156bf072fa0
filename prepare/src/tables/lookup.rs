use crate::tables::RangeTable;
use crate::TablesConfig;

/// индекс таблицы диапазонов: для блока кодпоинтов [i * interval, (i + 1) * interval) -
/// номер первой записи, верхняя граница которой не меньше начала блока
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoarseIndex
{
    lookup: Vec<u32>,
    interval: u32,
}

impl CoarseIndex
{
    /// блоки и записи таблицы отсортированы, поэтому достаточно одного прохода по обоим.
    /// параметры должны быть проверены заранее (TablesConfig::validate)
    pub(crate) fn build(table: &RangeTable, config: &TablesConfig) -> Self
    {
        let interval = config.lookup_interval();
        let entries = table.entries();

        let mut lookup = Vec::with_capacity(config.lookup_len as usize);
        let mut j = 0;

        for block in 0 .. config.lookup_len {
            let from = block * interval;

            while j < entries.len() && entries[j].1 < from {
                j += 1;
            }

            lookup.push(j as u32);
        }

        Self { lookup, interval }
    }

    pub fn entries(&self) -> &[u32]
    {
        &self.lookup
    }

    /// размер блока
    pub fn interval(&self) -> u32
    {
        self.interval
    }

    pub fn len(&self) -> usize
    {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.lookup.is_empty()
    }
}
