use crate::codepoint::LAST_CODEPOINT;
use crate::properties::PropertyKey;
use crate::properties::PropertyRecord;
use crate::PropertySets;
use crate::PropertySetsBuilder;

/// разбор строки файла свойств UCD:
///
/// ```text
/// 0600..0605    ; Prepend # Cf   [6] ARABIC NUMBER SIGN..ARABIC NUMBER MARK ABOVE
/// 094D          ; InCB; Linker # Mn       DEVANAGARI SIGN VIRAMA
/// ```
///
/// комментарии, пустые и некорректные строки - None
pub fn parse_line(line: &str) -> Option<PropertyRecord>
{
    let data = match line.split_once('#') {
        Some((data, _)) => data,
        None => line,
    };

    let mut fields = data.split(';').map(str::trim);

    let (low, high) = parse_codes(fields.next()?)?;

    let name = fields.next().filter(|name| is_word(name))?;
    let key = match fields.next().filter(|value| is_word(value)) {
        Some(value) => PropertyKey::with_value(name, value),
        None => PropertyKey::new(name),
    };

    Some(PropertyRecord { low, high, key })
}

/// кодпоинт или диапазон кодпоинтов LOW..HIGH
fn parse_codes(codes: &str) -> Option<(u32, u32)>
{
    let (low, high) = match codes.split_once("..") {
        Some((low, high)) => (parse_code(low)?, parse_code(high)?),
        None => {
            let code = parse_code(codes)?;
            (code, code)
        }
    };

    match low <= high && high <= LAST_CODEPOINT {
        true => Some((low, high)),
        false => None,
    }
}

fn parse_code(code: &str) -> Option<u32>
{
    let code = code.trim();

    match !code.is_empty() && code.bytes().all(|b| b.is_ascii_hexdigit()) {
        true => u32::from_str_radix(code, 16).ok(),
        false => None,
    }
}

/// название свойства или значения: буквы, цифры и подчеркивания
fn is_word(s: &str) -> bool
{
    !s.is_empty() && s.chars().all(|c| c.is_alphanumeric() || c == '_')
}

/// собрать категории из файла свойств UCD.
/// если указан список интересующих категорий - остальные записи отбрасываются
pub fn load_properties(data: &str, interest: Option<&[PropertyKey]>) -> PropertySets
{
    let mut builder = PropertySetsBuilder::new();
    let mut skipped = 0;

    for (i, line) in data.lines().enumerate() {
        let content = line.trim();

        if content.is_empty() || content.starts_with('#') {
            continue;
        }

        let record = match parse_line(content) {
            Some(record) => record,
            None => {
                log::trace!("{}: некорректная запись пропущена: {}", i + 1, content);
                skipped += 1;
                continue;
            }
        };

        if let Some(interest) = interest {
            if !interest.contains(&record.key) {
                continue;
            }
        }

        builder.insert_range(record.key, record.low, record.high);
    }

    if skipped > 0 {
        log::debug!("пропущено некорректных записей: {}", skipped);
    }

    builder.build()
}
