use std::collections::HashMap;

use crate::SourceError;

/// основная категория символа (General Category, GC)
/// берется из UCD: третья колонка UnicodeData.txt
///
/// общие категории (UAX #44, таблица 12):
///     LC (Lu, Ll, Lt) - буквы, имеющие регистр
///     L (Lu, Ll, Lt, Lm, Lo) - буквы
///     M (Mn, Mc, Me) - комбинирующие символы
///     N (Nd, Nl, No) - цифры, числовые символы
///     P (Pc, Pd, Ps, Pe, Pi, Pf, Po) - знаки препинания
///     S (Sm, Sc, Sk, So) - различные символы (математические, валюты и т.д.)
///     Z (Zs, Zl, Zp) - разделители
///     C (Cc, Cf, Cs, Co, Cn) - системные символы
///
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum GeneralCategory
{
    /// Lu - прописная буква
    UppercaseLetter,
    /// Ll - строчная буква
    LowercaseLetter,
    /// Lt - диграфический символ, первая часть - заглавная буква
    TitlecaseLetter,
    /// Lm - буква-модификатор
    ModifierLetter,
    /// Lo - прочие буквы, включая слоги и иероглифы
    OtherLetter,

    /// Mn - неразрывный комбинирующий маркер (не занимающий пространства)
    NonspacingMark,
    /// Mc - комбинирующий маркер, занимающий пространство
    SpacingMark,
    /// Me - охватывающий комбинирующий маркер
    EnclosingMark,

    /// Nd - десятичная цифра
    DecimalNumber,
    /// Nl - буквоподобный числовой символ
    LetterNumber,
    /// No - прочие числовые символы
    OtherNumber,

    /// Pc - объединяющяя пунктуация, например _
    ConnectorPunctuation,
    /// Pd - тире или дефис как знак препинания
    DashPunctuation,
    /// Ps - открывающий знак пунктуации (из пары)
    OpenPunctuation,
    /// Pe - закрывающий знак пунктуации (из пары)
    ClosePunctuation,
    /// Pi - начальный знак цитаты
    InitialPunctuation,
    /// Pf - конечный знак цитаты
    FinalPunctuation,
    /// Po - знак препинания другого типа
    OtherPunctuation,

    /// Sm - математический символ
    MathSymbol,
    /// Sc - символ валюты
    CurrencySymbol,
    /// Sk - символ модификатора, не похожий на букву
    ModifierSymbol,
    /// So - прочие символы
    OtherSymbol,

    /// Zs - разделитель-пробел
    SpaceSeparator,
    /// Zl - разделитель строки
    LineSeparator,
    /// Zp - разделитель параграфов
    ParagraphSeparator,

    /// Cc - управляющий символ, относится к C0 или C1
    Control,
    /// Cf - управляющий символ форматирования
    Format,
    /// Cs - символ-суррогат
    Surrogate,
    /// Co - символ для приватного использования
    PrivateUse,
    /// Cn - место под символ зарезервировано или не назначено
    Unassigned,
}

lazy_static! {
    /// категории по их сокращенным названиям
    static ref BY_ABBREVIATION: HashMap<&'static str, GeneralCategory> = GeneralCategory::ALL
        .iter()
        .map(|gc| (gc.abbr(), *gc))
        .collect();
}

impl GeneralCategory
{
    pub const ALL: [GeneralCategory; 30] = [
        Self::UppercaseLetter,
        Self::LowercaseLetter,
        Self::TitlecaseLetter,
        Self::ModifierLetter,
        Self::OtherLetter,
        Self::NonspacingMark,
        Self::SpacingMark,
        Self::EnclosingMark,
        Self::DecimalNumber,
        Self::LetterNumber,
        Self::OtherNumber,
        Self::ConnectorPunctuation,
        Self::DashPunctuation,
        Self::OpenPunctuation,
        Self::ClosePunctuation,
        Self::InitialPunctuation,
        Self::FinalPunctuation,
        Self::OtherPunctuation,
        Self::MathSymbol,
        Self::CurrencySymbol,
        Self::ModifierSymbol,
        Self::OtherSymbol,
        Self::SpaceSeparator,
        Self::LineSeparator,
        Self::ParagraphSeparator,
        Self::Control,
        Self::Format,
        Self::Surrogate,
        Self::PrivateUse,
        Self::Unassigned,
    ];

    /// сокращенное название, как в UnicodeData.txt
    pub fn abbr(&self) -> &'static str
    {
        match self {
            Self::UppercaseLetter => "Lu",
            Self::LowercaseLetter => "Ll",
            Self::TitlecaseLetter => "Lt",
            Self::ModifierLetter => "Lm",
            Self::OtherLetter => "Lo",
            Self::NonspacingMark => "Mn",
            Self::SpacingMark => "Mc",
            Self::EnclosingMark => "Me",
            Self::DecimalNumber => "Nd",
            Self::LetterNumber => "Nl",
            Self::OtherNumber => "No",
            Self::ConnectorPunctuation => "Pc",
            Self::DashPunctuation => "Pd",
            Self::OpenPunctuation => "Ps",
            Self::ClosePunctuation => "Pe",
            Self::InitialPunctuation => "Pi",
            Self::FinalPunctuation => "Pf",
            Self::OtherPunctuation => "Po",
            Self::MathSymbol => "Sm",
            Self::CurrencySymbol => "Sc",
            Self::ModifierSymbol => "Sk",
            Self::OtherSymbol => "So",
            Self::SpaceSeparator => "Zs",
            Self::LineSeparator => "Zl",
            Self::ParagraphSeparator => "Zp",
            Self::Control => "Cc",
            Self::Format => "Cf",
            Self::Surrogate => "Cs",
            Self::PrivateUse => "Co",
            Self::Unassigned => "Cn",
        }
    }

    /// общие категории, в которые входит данная
    pub fn groups(&self) -> &'static [&'static str]
    {
        match self {
            Self::UppercaseLetter | Self::LowercaseLetter | Self::TitlecaseLetter => &["LC", "L"],
            Self::ModifierLetter | Self::OtherLetter => &["L"],
            Self::NonspacingMark | Self::SpacingMark | Self::EnclosingMark => &["M"],
            Self::DecimalNumber | Self::LetterNumber | Self::OtherNumber => &["N"],
            Self::ConnectorPunctuation
            | Self::DashPunctuation
            | Self::OpenPunctuation
            | Self::ClosePunctuation
            | Self::InitialPunctuation
            | Self::FinalPunctuation
            | Self::OtherPunctuation => &["P"],
            Self::MathSymbol | Self::CurrencySymbol | Self::ModifierSymbol | Self::OtherSymbol => {
                &["S"]
            }
            Self::SpaceSeparator | Self::LineSeparator | Self::ParagraphSeparator => &["Z"],
            Self::Control
            | Self::Format
            | Self::Surrogate
            | Self::PrivateUse
            | Self::Unassigned => &["C"],
        }
    }
}

impl TryFrom<&str> for GeneralCategory
{
    type Error = SourceError;

    #[inline]
    fn try_from(abbr: &str) -> Result<Self, Self::Error>
    {
        BY_ABBREVIATION
            .get(abbr)
            .copied()
            .ok_or_else(|| SourceError::UnknownGeneralCategory(abbr.to_owned()))
    }
}
