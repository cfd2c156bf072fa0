use core::ops::RangeInclusive;

/// последний кодпоинт Unicode
pub const LAST_CODEPOINT: u32 = 0x10FFFF;

/// суррогаты - не являются скалярными значениями Unicode (и валидными char),
/// поэтому никогда не попадают в таблицы
pub const SURROGATES: RangeInclusive<u32> = 0xD800 ..= 0xDFFF;

#[inline]
pub fn is_surrogate(code: u32) -> bool
{
    SURROGATES.contains(&code)
}

/// кодпоинт, который может оказаться в таблице: в пределах Unicode и не суррогат
#[inline]
pub fn is_scalar_value(code: u32) -> bool
{
    code <= LAST_CODEPOINT && !is_surrogate(code)
}
