use core::mem::size_of;

use crate::output::format::category_type;
use crate::output::format::lookup_type;
use crate::tables::BooleanModule;
use crate::tables::BreakTable;

/// информация о таблице свойства сегментации
pub fn print(table: &BreakTable)
{
    let entries = table.table().len();
    let (lookup_type, _) = lookup_type(entries);

    log::info!(
        "{}:\n  \
        записей в таблице: {}\n  \
        категорий: {}\n  \
        размер индекса: {} x {} (блок 0x{:X})\n  \
        общий размер: {}",
        table.name(),
        entries,
        table.table().categories().len(),
        table.index().len(),
        lookup_type,
        table.index().interval(),
        table_size(table),
    );
}

/// размер сгенерированных таблицы и индекса в байтах
pub fn table_size(table: &BreakTable) -> usize
{
    let entry_size = match category_type(table.table().categories().len()) {
        1 => size_of::<(u32, u32, u8)>(),
        _ => size_of::<(u32, u32, u16)>(),
    };
    let (_, lookup_entry_size) = lookup_type(table.table().len());

    table.table().len() * entry_size + table.index().len() * lookup_entry_size
}

/// булевы свойства: количество диапазонов и способ проверки
pub fn print_boolean(module: &BooleanModule)
{
    for property in module.properties() {
        log::info!(
            "{}::{}: диапазонов - {}{}",
            module.name(),
            property.name(),
            property.ranges().len(),
            match property.is_literal() {
                true => ", сравнение",
                false => "",
            }
        );
    }
}
