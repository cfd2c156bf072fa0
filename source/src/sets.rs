use std::collections::btree_map;
use std::collections::BTreeMap;
use std::collections::HashMap;

use crate::codepoint::is_scalar_value;
use crate::codepoint::LAST_CODEPOINT;
use crate::properties::PropertyKey;

/// накопитель кодпоинтов по категориям при разборе файлов UCD.
/// суррогаты и кодпоинты за пределами Unicode отбрасываются, поэтому диапазоны,
/// пересекающие блок суррогатов, разрезаются по нему
#[derive(Debug, Default)]
pub struct PropertySetsBuilder
{
    sets: HashMap<PropertyKey, Vec<u32>>,
}

impl PropertySetsBuilder
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// добавить кодпоинт в категорию
    pub fn insert(&mut self, key: PropertyKey, code: u32)
    {
        self.extend(key, core::iter::once(code));
    }

    /// добавить диапазон low ..= high в категорию
    pub fn insert_range(&mut self, key: PropertyKey, low: u32, high: u32)
    {
        self.extend(key, low ..= high.min(LAST_CODEPOINT));
    }

    /// добавить кодпоинты в категорию. категория появляется только если в нее что-то попало
    pub fn extend(&mut self, key: PropertyKey, codes: impl IntoIterator<Item = u32>)
    {
        let mut codes = codes.into_iter().filter(|&code| is_scalar_value(code)).peekable();

        if codes.peek().is_none() {
            return;
        }

        self.sets.entry(key).or_default().extend(codes);
    }

    /// готовый набор категорий
    pub fn build(self) -> PropertySets
    {
        PropertySets {
            sets: self.sets.into_iter().collect(),
        }
    }
}

/// кодпоинты, отнесенные к каждой из категорий. порядок кодпоинтов внутри категории не определен,
/// повторы возможны. пустых категорий нет
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySets
{
    sets: BTreeMap<PropertyKey, Vec<u32>>,
}

impl PropertySets
{
    pub fn get(&self, key: &PropertyKey) -> Option<&[u32]>
    {
        self.sets.get(key).map(|codes| codes.as_slice())
    }

    pub fn contains_key(&self, key: &PropertyKey) -> bool
    {
        self.sets.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &PropertyKey>
    {
        self.sets.keys()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, PropertyKey, Vec<u32>>
    {
        self.sets.iter()
    }

    pub fn len(&self) -> usize
    {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.sets.is_empty()
    }
}

impl IntoIterator for PropertySets
{
    type Item = (PropertyKey, Vec<u32>);
    type IntoIter = btree_map::IntoIter<PropertyKey, Vec<u32>>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.sets.into_iter()
    }
}

impl<'a> IntoIterator for &'a PropertySets
{
    type Item = (&'a PropertyKey, &'a Vec<u32>);
    type IntoIter = btree_map::Iter<'a, PropertyKey, Vec<u32>>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.sets.iter()
    }
}
