/// элемент индекса таблицы диапазонов - номер записи в таблице.
/// размер элемента выбирается при генерации таблиц по длине таблицы диапазонов
pub trait LookupEntry: Copy
{
    fn index(self) -> usize;
}

macro_rules! lookup_entry {
    ($($type:ty),+) => {
        $(
            impl LookupEntry for $type
            {
                #[inline(always)]
                fn index(self) -> usize
                {
                    self as usize
                }
            }
        )+
    }
}

lookup_entry!(u8, u16, u32);
