use core::fmt;

mod general_category;

pub use general_category::GeneralCategory;

/// ключ категории: название свойства, или название и значение, если значение указано.
/// например, Alphabetic или InCB=Consonant
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyKey
{
    pub name: String,
    pub value: Option<String>,
}

impl PropertyKey
{
    pub fn new(name: &str) -> Self
    {
        Self {
            name: name.to_owned(),
            value: None,
        }
    }

    pub fn with_value(name: &str, value: &str) -> Self
    {
        Self {
            name: name.to_owned(),
            value: Some(value.to_owned()),
        }
    }
}

impl From<&str> for PropertyKey
{
    fn from(name: &str) -> Self
    {
        Self::new(name)
    }
}

/// название категории в таблицах: Name или Name_Value
impl fmt::Display for PropertyKey
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match &self.value {
            Some(value) => write!(f, "{}_{}", self.name, value),
            None => write!(f, "{}", self.name),
        }
    }
}

/// запись файла свойств UCD: диапазон кодпоинтов low ..= high и его категория
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRecord
{
    pub low: u32,
    pub high: u32,
    pub key: PropertyKey,
}
