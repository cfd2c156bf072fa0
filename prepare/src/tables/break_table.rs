use unicode_segmenting::RangeClassifier;

use crate::tables::CategoryIntervals;
use crate::tables::CoarseIndex;
use crate::tables::RangeTable;
use crate::PrepareError;
use crate::TablesConfig;

/// таблица свойства сегментации (grapheme, word, sentence, emoji) вместе со своим индексом.
/// индекс строится только по своей таблице, поэтому отдельно их не собрать
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakTable
{
    name: String,
    table: RangeTable,
    index: CoarseIndex,
}

impl BreakTable
{
    pub fn build(
        name: &str,
        sources: &[&CategoryIntervals],
        config: &TablesConfig,
    ) -> Result<Self, PrepareError>
    {
        config.validate()?;

        let table = RangeTable::build(sources).map_err(|source| PrepareError::Integrity {
            domain: name.to_owned(),
            source,
        })?;

        let index = CoarseIndex::build(&table, config);

        log::debug!(
            "{}: записей - {}, категорий - {}",
            name,
            table.len(),
            table.categories().len()
        );

        Ok(Self {
            name: name.to_owned(),
            table,
            index,
        })
    }

    pub fn name(&self) -> &str
    {
        &self.name
    }

    pub fn table(&self) -> &RangeTable
    {
        &self.table
    }

    pub fn index(&self) -> &CoarseIndex
    {
        &self.index
    }

    /// классификатор по таблице, категории - номера в списке категорий таблицы
    pub fn classifier(&self) -> RangeClassifier<'_, u16, u32>
    {
        RangeClassifier::new(
            self.table.entries(),
            self.index.entries(),
            self.index.interval(),
            self.table.any(),
        )
    }

    /// диапазон, содержащий символ, и название его категории
    pub fn classify(&self, c: char) -> (u32, u32, &str)
    {
        let (low, high, category) = self.classifier().classify(c);

        (low, high, self.table.category_name(category))
    }
}
