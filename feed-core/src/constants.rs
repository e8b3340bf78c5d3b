use std::time::Duration;

/// Пауза продьюсера между тиками по умолчанию
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(500);

/// Бюджет тиков продьюсера по умолчанию
pub const DEFAULT_TICK_COUNT: u32 = 20;

/// Максимальный абсолютный шаг цены за тик по умолчанию
pub const DEFAULT_MAX_STEP: f64 = 0.03;

/// Стартовая цена по умолчанию
pub const DEFAULT_START_PRICE: f64 = 100.0;
