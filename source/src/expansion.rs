use crate::properties::GeneralCategory;
use crate::properties::PropertyKey;
use crate::PropertySets;
use crate::PropertySetsBuilder;

/// синтетическая категория, в которую входят все назначенные кодпоинты
pub const ASSIGNED: &str = "Assigned";

/// дополнить основные категории общими: кодпоинт категории Lu попадает также в LC и L, и т.д.
/// все кодпоинты попадают в категорию Assigned. неизвестные категории переносятся как есть
pub fn expand_general_categories(raw: PropertySets) -> PropertySets
{
    let mut builder = PropertySetsBuilder::new();

    for (key, codes) in raw {
        let groups = match GeneralCategory::try_from(key.name.as_str()) {
            Ok(gc) => gc.groups(),
            Err(e) => {
                log::warn!("{}, категория не будет отнесена к общим", e);
                &[]
            }
        };

        for group in groups.iter().chain(core::iter::once(&ASSIGNED)) {
            builder.extend(PropertyKey::new(group), codes.iter().copied());
        }

        builder.extend(key, codes);
    }

    builder.build()
}
