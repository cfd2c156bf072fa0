use std::collections::BTreeMap;

use unicode_segmentation_source::PropertySets;

/// диапазон кодпоинтов low ..= high
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval
{
    pub low: u32,
    pub high: u32,
}

impl Interval
{
    pub const fn new(low: u32, high: u32) -> Self
    {
        Self { low, high }
    }

    #[inline]
    pub fn contains(&self, code: u32) -> bool
    {
        self.low <= code && code <= self.high
    }

    /// количество кодпоинтов
    pub fn len(&self) -> u32
    {
        self.high - self.low + 1
    }
}

impl From<Interval> for (u32, u32)
{
    fn from(interval: Interval) -> Self
    {
        (interval.low, interval.high)
    }
}

/// диапазоны категорий одного источника. ключ - название категории (Name или Name_Value)
pub type CategoryIntervals = BTreeMap<String, Vec<Interval>>;

/// свернуть кодпоинты категории в минимальный набор отсортированных диапазонов,
/// между соседними диапазонами всегда есть хотя бы один пропущенный кодпоинт.
///
/// пустых категорий не бывает (см. PropertySets), для пустого набора - пустой результат
pub fn compress(codes: &[u32]) -> Vec<Interval>
{
    let mut codes = codes.to_vec();
    codes.sort_unstable();
    codes.dedup();

    let mut iter = codes.into_iter();
    let mut result = vec![];

    let mut current = match iter.next() {
        Some(code) => Interval::new(code, code),
        None => return result,
    };

    for code in iter {
        match code == current.high + 1 {
            true => current.high = code,
            false => {
                result.push(current);
                current = Interval::new(code, code);
            }
        }
    }

    result.push(current);

    result
}

/// свернуть все категории источника
pub fn compress_sets(sets: &PropertySets) -> CategoryIntervals
{
    sets.iter()
        .map(|(key, codes)| (key.to_string(), compress(codes)))
        .filter(|(_, intervals)| !intervals.is_empty())
        .collect()
}
