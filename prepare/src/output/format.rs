/// представить элементы таблицы в текстовом виде: элементы через разделитель,
/// строки с отступом indent и длиной не больше boundary (если элемент помещается в строку)
pub fn format_items<T: AsRef<str>>(
    items: &[T],
    separator: &str,
    indent: usize,
    boundary: usize,
) -> String
{
    let padding = " ".repeat(indent);

    let mut output = String::new();
    let mut line = padding.clone();

    for (i, item) in items.iter().enumerate() {
        let item = item.as_ref();
        let is_last = i + 1 == items.len();

        let chunk = match is_last {
            true => item.to_owned(),
            false => format!("{}{}", item, separator.trim_end()),
        };

        if line.len() > indent && line.len() + 1 + chunk.len() > boundary {
            output.push_str(&line);
            output.push('\n');
            line = padding.clone();
        }

        if line.len() > indent {
            line.push(' ');
        }

        line.push_str(&chunk);
    }

    if line.len() > indent {
        output.push_str(&line);
    }

    output
}

/// число в шестнадцатеричном виде, 0 - без префикса
pub fn hex(value: u32) -> String
{
    match value == 0 {
        true => "0".to_owned(),
        false => format!("0x{:X}", value),
    }
}

/// литерал символа
pub fn escape_char(code: u32) -> String
{
    format!("'\\u{{{:X}}}'", code)
}

/// наименьший беззнаковый тип, вмещающий номера записей таблицы длины len, и его размер
pub fn lookup_type(len: usize) -> (&'static str, usize)
{
    if len <= u8::MAX as usize {
        ("u8", 1)
    } else if len <= u16::MAX as usize {
        ("u16", 2)
    } else {
        ("u32", 4)
    }
}

/// размер перечисления категорий с count вариантами
pub fn category_type(count: usize) -> usize
{
    match count <= u8::MAX as usize + 1 {
        true => 1,
        false => 2,
    }
}

/// Grapheme для grapheme
pub fn capitalize(name: &str) -> String
{
    let mut chars = name.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
