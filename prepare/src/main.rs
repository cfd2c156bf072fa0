use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use unicode_segmentation_prepare::config::LITERAL_THRESHOLD;
use unicode_segmentation_prepare::config::LOOKUP_CUTOFF;
use unicode_segmentation_prepare::config::LOOKUP_LEN;
use unicode_segmentation_prepare::output;
use unicode_segmentation_prepare::tables;
use unicode_segmentation_prepare::PrepareError;
use unicode_segmentation_prepare::TablesConfig;
use unicode_segmentation_source::Ucd;

/// генерация таблиц свойств Unicode для сегментации текста
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args
{
    /// папка с файлами UCD
    #[arg(long, default_value = "./data/ucd/15.1.0")]
    data_dir: PathBuf,

    /// файл, в который будут записаны таблицы
    #[arg(long, default_value = "./tables.rs")]
    output: PathBuf,

    /// граница индексируемой области таблиц диапазонов
    #[arg(long, default_value_t = LOOKUP_CUTOFF, value_parser = parse_code)]
    lookup_cutoff: u32,

    /// количество блоков индекса
    #[arg(long, default_value_t = LOOKUP_LEN)]
    lookup_len: u32,

    /// категории с меньшим количеством диапазонов проверяются прямым сравнением
    #[arg(long, default_value_t = LITERAL_THRESHOLD)]
    literal_threshold: usize,
}

/// число, десятичное или с префиксом 0x
fn parse_code(value: &str) -> Result<u32, String>
{
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => value.parse(),
    };

    parsed.map_err(|e| format!("{}: {}", value, e))
}

fn main() -> ExitCode
{
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), PrepareError>
{
    let config = TablesConfig {
        lookup_cutoff: args.lookup_cutoff,
        lookup_len: args.lookup_len,
        literal_threshold: args.literal_threshold,
    };

    config.validate()?;

    let ucd = Ucd::open(&args.data_dir)?;
    let tables = tables::prepare(&ucd, &config)?;

    output::stats::print_boolean(&tables.general_category);
    output::stats::print_boolean(&tables.derived_property);

    for table in tables.break_tables() {
        output::stats::print(table);
    }

    let output_error = |source| PrepareError::Output {
        path: args.output.clone(),
        source,
    };

    let mut file = BufWriter::new(File::create(&args.output).map_err(output_error)?);

    output::write(&tables, &mut file).map_err(output_error)?;
    file.flush().map_err(output_error)?;

    log::info!("таблицы записаны в {}", args.output.display());

    Ok(())
}
