use unicode_segmenting::bsearch_range_table;

use crate::tables::CategoryIntervals;
use crate::tables::Interval;
use crate::PrepareError;
use crate::TablesConfig;

/// булево свойство: входит ли кодпоинт в категорию
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanProperty
{
    name: String,
    ranges: Vec<(u32, u32)>,
    /// маленькие категории проверяются прямым сравнением с каждым диапазоном.
    /// на результат не влияет, только на скорость
    literal: bool,
}

impl BooleanProperty
{
    pub fn new(name: &str, intervals: &[Interval], literal_threshold: usize) -> Self
    {
        Self {
            name: name.to_owned(),
            ranges: intervals.iter().map(|&i| i.into()).collect(),
            literal: intervals.len() < literal_threshold,
        }
    }

    /// свойство из свернутых категорий источника
    pub fn select(
        domain: &str,
        source: &CategoryIntervals,
        name: &str,
        config: &TablesConfig,
    ) -> Result<Self, PrepareError>
    {
        match source.get(name) {
            Some(intervals) => Ok(Self::new(name, intervals, config.literal_threshold)),
            None => Err(PrepareError::MissingCategory {
                domain: domain.to_owned(),
                category: name.to_owned(),
            }),
        }
    }

    pub fn name(&self) -> &str
    {
        &self.name
    }

    pub fn ranges(&self) -> &[(u32, u32)]
    {
        &self.ranges
    }

    pub fn is_literal(&self) -> bool
    {
        self.literal
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool
    {
        match self.literal {
            true => {
                let code = u32::from(c);

                self.ranges
                    .iter()
                    .any(|&(low, high)| low <= code && code <= high)
            }
            false => bsearch_range_table(c, &self.ranges),
        }
    }
}

/// набор булевых свойств одного источника (general_category, derived_property)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanModule
{
    name: String,
    properties: Vec<BooleanProperty>,
}

impl BooleanModule
{
    /// выбрать из источника нужные свойства, в порядке названий
    pub fn build(
        name: &str,
        source: &CategoryIntervals,
        exports: &[&str],
        config: &TablesConfig,
    ) -> Result<Self, PrepareError>
    {
        let mut exports = exports.to_vec();
        exports.sort_unstable();
        exports.dedup();

        let properties = exports
            .iter()
            .map(|export| BooleanProperty::select(name, source, export, config))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: name.to_owned(),
            properties,
        })
    }

    pub fn name(&self) -> &str
    {
        &self.name
    }

    pub fn properties(&self) -> &[BooleanProperty]
    {
        &self.properties
    }

    pub fn get(&self, name: &str) -> Option<&BooleanProperty>
    {
        self.properties.iter().find(|p| p.name == name)
    }
}
