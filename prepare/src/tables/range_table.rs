use crate::tables::CategoryIntervals;
use crate::IntegrityError;

/// категория кодпоинтов, не попавших ни в один из диапазонов
pub const ANY: &str = "Any";

/// отсортированная таблица непересекающихся диапазонов (low, high, номер категории)
/// для классификации по свойствам сегментации
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeTable
{
    /// записи таблицы
    entries: Vec<(u32, u32, u16)>,
    /// названия категорий по номерам: отсортированные категории источников, последняя - Any
    categories: Vec<String>,
}

impl RangeTable
{
    /// объединить диапазоны категорий из нескольких источников в одну таблицу.
    ///
    /// источники не должны пересекаться: если кодпоинт отнесен к двум категориям, возвращается ошибка
    pub fn build(sources: &[&CategoryIntervals]) -> Result<Self, IntegrityError>
    {
        let mut categories: Vec<String> = sources
            .iter()
            .flat_map(|source| source.keys().cloned())
            .collect();

        categories.sort();
        categories.dedup();

        if let Some(reserved) = categories.iter().find(|c| *c == ANY) {
            return Err(IntegrityError::ReservedCategory(reserved.clone()));
        }

        if categories.len() >= u16::MAX as usize {
            return Err(IntegrityError::TooManyCategories(categories.len()));
        }

        let mut entries = vec![];

        for source in sources {
            for (category, intervals) in source.iter() {
                // категории отсортированы и уникальны, искомая точно есть
                let index = categories
                    .binary_search(category)
                    .unwrap_or_else(|position| position) as u16;

                entries.extend(intervals.iter().map(|i| (i.low, i.high, index)));
            }
        }

        entries.sort_by_key(|entry| entry.0);
        categories.push(ANY.to_owned());

        let table = Self {
            entries,
            categories,
        };

        table.validate()?;

        Ok(table)
    }

    /// каждая запись должна заканчиваться раньше, чем начинается следующая
    fn validate(&self) -> Result<(), IntegrityError>
    {
        for pair in self.entries.windows(2) {
            let (previous, next) = (pair[0], pair[1]);

            if previous.1 >= next.0 {
                return Err(IntegrityError::Overlap {
                    previous: self.describe(previous),
                    next: self.describe(next),
                });
            }
        }

        Ok(())
    }

    fn describe(&self, entry: (u32, u32, u16)) -> (u32, u32, String)
    {
        (entry.0, entry.1, self.category_name(entry.2).to_owned())
    }

    pub fn entries(&self) -> &[(u32, u32, u16)]
    {
        &self.entries
    }

    pub fn len(&self) -> usize
    {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.entries.is_empty()
    }

    /// названия категорий, индекс в списке - номер категории в записях
    pub fn categories(&self) -> &[String]
    {
        &self.categories
    }

    pub fn category_name(&self, category: u16) -> &str
    {
        &self.categories[category as usize]
    }

    /// номер категории Any
    pub fn any(&self) -> u16
    {
        (self.categories.len() - 1) as u16
    }
}
