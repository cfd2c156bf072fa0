mod boolean;
mod break_table;
mod domains;
mod intervals;
mod lookup;
mod range_table;

pub use boolean::BooleanModule;
pub use boolean::BooleanProperty;
pub use break_table::BreakTable;
pub use domains::*;
pub use intervals::compress;
pub use intervals::compress_sets;
pub use intervals::CategoryIntervals;
pub use intervals::Interval;
pub use lookup::CoarseIndex;
pub use range_table::RangeTable;
pub use range_table::ANY;

use unicode_segmentation_source::Ucd;

use crate::PrepareError;
use crate::TablesConfig;

/// загрузить данные UCD и построить все таблицы
pub fn prepare(ucd: &Ucd, config: &TablesConfig) -> Result<UnicodeTables, PrepareError>
{
    config.validate()?;

    let inputs = UcdInputs::load(ucd)?;

    UnicodeTables::build(&inputs, config)
}
