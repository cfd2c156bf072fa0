use core::cmp::Ordering;

/// положение кодпоинта относительно диапазона low ..= high, для бинарного поиска
#[inline(always)]
pub(crate) fn compare(code: u32, low: u32, high: u32) -> Ordering
{
    if code < low {
        Ordering::Greater
    } else if high < code {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

/// входит ли символ в один из диапазонов отсортированной таблицы без пересечений
#[inline]
pub fn bsearch_range_table(c: char, r: &[(u32, u32)]) -> bool
{
    let code = u32::from(c);

    r.binary_search_by(|&(low, high)| compare(code, low, high))
        .is_ok()
}

/// буква: для ASCII проверяем сразу, остальное - по таблице свойства Alphabetic
#[inline]
pub fn is_alphabetic(c: char, alphabetic: impl Fn(char) -> bool) -> bool
{
    match c {
        'a' ..= 'z' | 'A' ..= 'Z' => true,
        c if c > '\x7f' => alphabetic(c),
        _ => false,
    }
}

/// цифра: для ASCII проверяем сразу, остальное - по таблице категории N
#[inline]
pub fn is_numeric(c: char, numeric: impl Fn(char) -> bool) -> bool
{
    match c {
        '0' ..= '9' => true,
        c if c > '\x7f' => numeric(c),
        _ => false,
    }
}

#[inline]
pub fn is_alphanumeric(
    c: char,
    alphabetic: impl Fn(char) -> bool,
    numeric: impl Fn(char) -> bool,
) -> bool
{
    is_alphabetic(c, alphabetic) || is_numeric(c, numeric)
}
