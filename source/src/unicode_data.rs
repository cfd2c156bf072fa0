use crate::properties::PropertyKey;
use crate::PropertySets;
use crate::PropertySetsBuilder;

/// количество полей в строке UnicodeData.txt
const FIELDS: usize = 15;

/// разбор UnicodeData.txt из UCD: основные категории кодпоинтов (третья колонка).
///
/// большие блоки (CJK, хангыль, тангутский, приватное использование, суррогаты) записаны парами строк
/// `<..., First>` и `<..., Last>` - все кодпоинты между ними относятся к категории блока.
/// суррогаты отбрасываются. общие категории здесь не добавляются, см. expand_general_categories
pub fn load_general_categories(data: &str) -> PropertySets
{
    let mut builder = PropertySetsBuilder::new();

    // начало блока, если мы внутри пары First/Last
    let mut range_start: Option<u32> = None;

    for line in data.lines() {
        let props: Vec<&str> = line.split(';').collect();

        if props.len() != FIELDS {
            continue;
        }

        let code = match u32::from_str_radix(props[0], 16) {
            Ok(code) => code,
            Err(_) => {
                log::trace!("UnicodeData.txt: некорректный кодпоинт: {}", line);
                continue;
            }
        };

        let name = props[1];
        let gc = PropertyKey::new(props[2]);

        if let Some(start) = range_start.take() {
            builder.insert_range(gc, start, code);
            continue;
        }

        if name.starts_with('<') && name.ends_with(", First>") {
            range_start = Some(code);
            continue;
        }

        builder.insert(gc, code);
    }

    builder.build()
}
