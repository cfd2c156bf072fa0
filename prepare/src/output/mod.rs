use std::io;
use std::io::Write;

use crate::tables::BooleanModule;
use crate::tables::BooleanProperty;
use crate::tables::BreakTable;
use crate::tables::UnicodeTables;
use crate::tables::ALPHABETIC;
use crate::tables::NUMERIC;
use crate::UNICODE_VERSION;

use self::format::*;

mod format;
pub mod stats;

/// длина строки в файле с подготовленными данными
const FORMAT_STRING_LENGTH: usize = 100;

const PREAMBLE: &str = "\
// NOTE: этот файл сгенерирован unicode_segmentation_prepare, не редактируйте его вручную

#![allow(missing_docs, non_upper_case_globals, non_snake_case)]
";

/// проверки на реальных данных UCD, попадают в сгенерированный файл
const TESTS: &str = "
#[cfg(test)]
mod tests {
    #[test]
    fn test_syriac_abbr_mark() {
        use super::word as wd;
        let (_, _, cat) = wd::word_category('\\u{70f}');
        assert_eq!(cat, wd::WC_ALetter);
    }

    #[test]
    fn test_end_of_ayah_cat() {
        use super::word as wd;
        let (_, _, cat) = wd::word_category('\\u{6dd}');
        assert_eq!(cat, wd::WC_Numeric);
    }
}
";

/// пишем таблицы в виде исходного кода на Rust
pub fn write(tables: &UnicodeTables, file: &mut impl Write) -> io::Result<()>
{
    write!(file, "{}", render(tables))
}

/// исходный код всех таблиц
pub fn render(tables: &UnicodeTables) -> String
{
    let mut output = String::from(PREAMBLE);

    output.push_str(&format!(
        "\n/// The version of [Unicode](http://www.unicode.org/)\n\
        /// that these tables are based on.\n\
        pub const UNICODE_VERSION: (u64, u64, u64) = ({}, {}, {});\n",
        UNICODE_VERSION.0, UNICODE_VERSION.1, UNICODE_VERSION.2,
    ));

    output.push_str(&util_module(&tables.general_category, &tables.derived_property));
    output.push_str(&boolean_module(&tables.general_category));
    output.push_str(&boolean_module(&tables.derived_property));
    output.push_str(&predicate("is_incb_linker", &tables.incb_linker, 0, "self"));
    output.push('\n');

    for table in tables.break_tables() {
        output.push_str(&break_module(table));
        output.push('\n');
    }

    output.push_str(TESTS);

    output
}

/// общие функции: бинарный поиск и составные проверки
fn util_module(general_category: &BooleanModule, derived_property: &BooleanModule) -> String
{
    format!(
        "
pub mod util {{
    #[inline]
    pub fn bsearch_range_table(c: char, r: &[(u32, u32)]) -> bool {{
        unicode_segmenting::bsearch_range_table(c, r)
    }}

    #[inline]
    pub fn is_alphanumeric(c: char) -> bool {{
        unicode_segmenting::is_alphanumeric(
            c,
            super::{}::{},
            super::{}::{},
        )
    }}
}}

",
        derived_property.name(),
        ALPHABETIC,
        general_category.name(),
        NUMERIC,
    )
}

/// модуль булевых свойств
fn boolean_module(module: &BooleanModule) -> String
{
    let mut output = format!("pub mod {} {{\n", module.name());

    for property in module.properties() {
        output.push_str(&predicate(property.name(), property, 4, "super"));
        output.push('\n');
    }

    output.push_str("}\n\n");

    output
}

/// функция проверки свойства: сравнение с каждым диапазоном для маленьких категорий,
/// бинарный поиск по таблице для остальных. util - путь к модулю util относительно функции
fn predicate(fn_name: &str, property: &BooleanProperty, indent: usize, util: &str) -> String
{
    let pad = " ".repeat(indent);
    let mut output = String::new();

    let body = match property.is_literal() {
        true => {
            let patterns: Vec<String> = property
                .ranges()
                .iter()
                .map(|&(low, high)| match low == high {
                    true => escape_char(low),
                    false => format!("{} ..= {}", escape_char(low), escape_char(high)),
                })
                .collect();

            format!(
                "matches!(\n{}c,\n{}\n{}    )",
                " ".repeat(indent + 8),
                format_items(&patterns, " | ", indent + 8, FORMAT_STRING_LENGTH),
                pad,
            )
        }
        false => {
            let table_name = format!("{}_table", property.name());
            let entries: Vec<String> = property
                .ranges()
                .iter()
                .map(|&(low, high)| format!("({}, {})", hex(low), hex(high)))
                .collect();

            output.push_str(&format!(
                "{}const {}: &[(u32, u32)] = &[\n{}{}];\n\n",
                pad,
                table_name,
                table_items(&entries, indent + 4),
                pad,
            ));

            format!("{}::util::bsearch_range_table(c, {})", util, table_name)
        }
    };

    output.push_str(&format!(
        "{pad}#[inline]\n\
        {pad}pub fn {fn_name}(c: char) -> bool {{\n\
        {pad}    {body}\n\
        {pad}}}\n",
    ));

    output
}

/// модуль свойства сегментации: перечисление категорий, индекс, таблица и функция классификации
fn break_module(table: &BreakTable) -> String
{
    let name = table.name();
    let enum_name = format!("{}Cat", capitalize(name));
    let prefix = format!("{}C_", capitalize(name).chars().next().unwrap_or('_'));

    let categories = table.table().categories();
    let any = format!("{}{}", prefix, categories[table.table().any() as usize]);

    let variants: String = categories
        .iter()
        .map(|category| format!("        {}{},\n", prefix, category))
        .collect();

    let (lookup_type, _) = lookup_type(table.table().len());
    let lookup: Vec<String> = table
        .index()
        .entries()
        .iter()
        .map(|&i| i.to_string())
        .collect();

    let entries: Vec<String> = table
        .table()
        .entries()
        .iter()
        .map(|&(low, high, category)| {
            format!(
                "({}, {}, {}{})",
                hex(low),
                hex(high),
                prefix,
                table.table().category_name(category)
            )
        })
        .collect();

    format!(
        "pub mod {name} {{
    use unicode_segmenting::RangeClassifier;

    pub use self::{enum_name}::*;

    #[allow(non_camel_case_types)]
    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    pub enum {enum_name} {{
{variants}    }}

    const {name}_classifier: RangeClassifier<'static, {enum_name}, {lookup_type}> =
        RangeClassifier::new({name}_cat_table, {name}_cat_lookup, {interval}, {any});

    /// диапазон, содержащий символ, и его категория
    #[inline]
    pub fn {name}_category(c: char) -> (u32, u32, {enum_name}) {{
        {name}_classifier.classify(c)
    }}

    const {name}_cat_lookup: &[{lookup_type}] = &[
{lookup}    ];

    const {name}_cat_table: &[(u32, u32, {enum_name})] = &[
{entries}    ];
}}
",
        interval = hex(table.index().interval()),
        lookup = table_items(&lookup, 8),
        entries = table_items(&entries, 8),
    )
}

/// элементы таблицы, по нескольку в строке, с завершающей запятой
fn table_items(items: &[String], indent: usize) -> String
{
    match items.is_empty() {
        true => String::new(),
        false => format!("{},\n", format_items(items, ", ", indent, FORMAT_STRING_LENGTH)),
    }
}
