use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use unicode_segmentation_prepare::tables::BreakTable;
use unicode_segmentation_prepare::tables::CategoryIntervals;
use unicode_segmentation_prepare::tables::Interval;
use unicode_segmentation_prepare::PrepareError;
use unicode_segmentation_prepare::TablesConfig;
use unicode_segmenting::RangeClassifier;

/// категории, по которым раскладываются диапазоны тестовой таблицы
const CATEGORIES: &[&str] = &[
    "ALetter",
    "Extend",
    "Format",
    "Hebrew_Letter",
    "Katakana",
    "MidLetter",
    "MidNum",
    "Numeric",
];

/// граница, до которой генерируются диапазоны
const LAST_GENERATED: u32 = 0x30000;

/// зерно генератора: таблица должна быть одинаковой от запуска к запуску
const SEED: u64 = 0x2545_F491;

/// таблица, похожая на настоящую таблицу word: несколько тысяч коротких диапазонов,
/// плотно в начале и редко за границей индекса
pub fn table(config: &TablesConfig) -> Result<BreakTable, PrepareError>
{
    let mut categories = CategoryIntervals::new();
    let mut random = StdRng::seed_from_u64(SEED);
    let mut code = 0;

    while code < LAST_GENERATED {
        let sparse = code >= config.lookup_cutoff;

        let gap = match sparse {
            true => random.gen_range(0x100 .. 0x900),
            false => random.gen_range(1 ..= 24),
        };
        let len: u32 = random.gen_range(1 ..= 16);
        let category = CATEGORIES[random.gen_range(0 .. CATEGORIES.len())];

        let low = code + gap;
        let high = low + len - 1;

        categories
            .entry(category.to_owned())
            .or_default()
            .push(Interval::new(low, high));

        code = high + 1;
    }

    BreakTable::build("word", &[&categories], config)
}

/// классификатор, использующий индекс таблицы
pub fn indexed(table: &BreakTable) -> RangeClassifier<'_, u16, u32>
{
    table.classifier()
}

/// классификатор без индекса: бинарный поиск по всей таблице
pub fn unindexed(table: &BreakTable) -> RangeClassifier<'_, u16, u32>
{
    RangeClassifier::new(
        table.table().entries(),
        &[],
        table.index().interval(),
        table.table().any(),
    )
}

/// тексты на разных письменностях
pub fn texts() -> Vec<(String, String)>
{
    let samples = [
        ("cjk", "統一碼は、世界中の文字を扱うための業界標準である。カタカナとひらがな。"),
        ("cyrillic", "Юникод - стандарт кодирования символов, включающий знаки почти всех письменных языков."),
        ("emoji", "😀🙃 🚀🌍 👍🏽 ❤️ 🇷🇺🇯🇵 🏳️‍🌈 1️⃣ ©️"),
        ("english", "Unicode is an information technology standard for the consistent encoding of text."),
        ("hebrew", "יוניקוד הוא תקן בינלאומי לייצוג טקסט במחשבים ובמערכות אחרות."),
    ];

    samples
        .iter()
        .map(|(name, text)| (name.to_string(), text.repeat(64)))
        .collect()
}
