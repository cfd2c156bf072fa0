use core::ops::Range;

use crate::lookup::LookupEntry;
use crate::ranges::compare;
use crate::LAST_CODEPOINT;

/// классификатор кодпоинтов по таблице диапазонов с категориями
///
/// таблица - отсортированные непересекающиеся диапазоны (low, high, категория).
/// индекс разбивает кодпоинты до lookup.len() * lookup_interval на блоки одинакового размера,
/// для каждого блока хранится номер первой записи таблицы, верхняя граница которой попадает в блок
/// или лежит выше него. так мы сразу сужаем область бинарного поиска до нескольких записей.
///
/// таблица и индекс строятся вместе и не должны комбинироваться с чужими.
#[derive(Debug, Clone, Copy)]
pub struct RangeClassifier<'a, C, L = u32>
{
    /// диапазоны с категориями
    table: &'a [(u32, u32, C)],
    /// индекс блоков
    lookup: &'a [L],
    /// размер блока индекса
    lookup_interval: u32,
    /// категория кодпоинтов, не попавших ни в один диапазон
    any: C,
}

impl<'a, C: Copy, L: LookupEntry> RangeClassifier<'a, C, L>
{
    pub const fn new(table: &'a [(u32, u32, C)], lookup: &'a [L], lookup_interval: u32, any: C)
        -> Self
    {
        assert!(lookup_interval != 0);

        Self {
            table,
            lookup,
            lookup_interval,
            any,
        }
    }

    /// диапазон, содержащий символ, и его категория.
    ///
    /// если символ не входит ни в один диапазон таблицы - возвращается категория Any
    /// и границы промежутка между соседними записями таблицы
    #[inline]
    pub fn classify(&self, c: char) -> (u32, u32, C)
    {
        let code = u32::from(c);
        let window = self.window(code);
        let slice = &self.table[window.clone()];

        match slice.binary_search_by(|&(low, high, _)| compare(code, low, high)) {
            Ok(idx) => slice[idx],
            Err(idx) => {
                // записи до окна заканчиваются раньше начала блока, записи после окна - начинаются
                // после его конца, поэтому позиция в окне - это и позиция во всей таблице
                let position = window.start + idx;

                let lower = match position {
                    0 => 0,
                    _ => self.table[position - 1].1 + 1,
                };
                let upper = self
                    .table
                    .get(position)
                    .map_or(LAST_CODEPOINT, |entry| entry.0 - 1);

                (lower, upper, self.any)
            }
        }
    }

    /// записи таблицы, среди которых может быть диапазон кодпоинта
    #[inline(always)]
    fn window(&self, code: u32) -> Range<usize>
    {
        let block = (code / self.lookup_interval) as usize;

        match self.lookup.get(block .. block + 2) {
            // последняя запись окна - первая, заканчивающаяся в следующем блоке или за ним,
            // она может начинаться в текущем
            Some(&[from, to]) => from.index() .. (to.index() + 1).min(self.table.len()),
            // кодпоинт за пределами индекса или в его последнем блоке
            _ => {
                let from = self.lookup.last().map_or(0, |entry| entry.index());

                from.min(self.table.len()) .. self.table.len()
            }
        }
    }

    /// таблица диапазонов
    pub fn table(&self) -> &'a [(u32, u32, C)]
    {
        self.table
    }

    /// индекс блоков
    pub fn lookup(&self) -> &'a [L]
    {
        self.lookup
    }

    /// размер блока индекса
    pub fn lookup_interval(&self) -> u32
    {
        self.lookup_interval
    }

    /// кодпоинты ниже этой границы ищутся через индекс
    pub fn cutoff(&self) -> u32
    {
        self.lookup.len() as u32 * self.lookup_interval
    }

    /// категория промежутков между диапазонами
    pub fn any(&self) -> C
    {
        self.any
    }
}
