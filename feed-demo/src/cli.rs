use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Feed Demo — in-process шина котировок: продьюсеры возмущают поля,
/// паблишер синхронно рассылает снимки подписчикам.
#[derive(Parser, Debug, Clone)]
#[command(name = "feed-demo", version, about)]
#[command(
    group(
        ArgGroup::new("fields_source")
            .required(false)
            .multiple(false)
            .args(["fields_file", "fields"])
    )
)]
pub(crate) struct Args {
    /// Источник полей: файл (по одному полю на строку, поддержка # комментариев)
    #[arg(long, conflicts_with = "fields")]
    pub(crate) fields_file: Option<PathBuf>,

    /// Источник полей: CSV-строка, например "ibm, apple, google"
    #[arg(long, conflicts_with = "fields_file")]
    pub(crate) fields: Option<String>,

    /// Сколько подписчиков подключить
    #[arg(long, default_value_t = 2)]
    pub(crate) subscribers: usize,

    /// Сколько продьюсеров запустить на каждое поле
    #[arg(long, default_value_t = 1)]
    pub(crate) producers_per_field: usize,

    /// Бюджет тиков каждого продьюсера
    #[arg(long, default_value_t = feed_core::DEFAULT_TICK_COUNT)]
    pub(crate) ticks: u32,

    /// Пауза между тиками, миллисекунды
    #[arg(long, default_value_t = feed_core::DEFAULT_TICK_INTERVAL.as_millis() as u64)]
    pub(crate) tick_interval_ms: u64,

    /// Стартовая цена случайного блуждания
    #[arg(long, default_value_t = feed_core::DEFAULT_START_PRICE)]
    pub(crate) start_price: f64,

    /// Максимальный абсолютный шаг цены за тик
    #[arg(long, default_value_t = feed_core::DEFAULT_MAX_STEP)]
    pub(crate) max_step: f64,

    /// Снять первого подписчика с реестра через N миллисекунд после старта
    #[arg(long)]
    pub(crate) detach_first_after_ms: Option<u64>,
}
