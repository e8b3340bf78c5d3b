//! # feed-core
//!
//! Базовые типы для Feed Bus (in-process публикация котировок).
//!
//! Этот крейт содержит:
//!
//! - [`types`] — доменные типы (снимок полей, идентификаторы, округление цен)
//! - [`fields`] — чтение и нормализация списка наблюдаемых полей из текста/файла
//! - [`error`] — типы ошибок, которые возвращают компоненты системы
//!
//! ## Быстрый пример: парсинг списка полей
//!
//! ```rust
//! use feed_core::fields::parse_fields_csv;
//!
//! let fields = parse_fields_csv("IBM, apple, ,google ,ibm");
//! assert_eq!(fields, vec!["apple".to_string(), "google".to_string(), "ibm".to_string()]);
//! ```
//!
//! ## Пример: округление цены
//!
//! ```rust
//! use feed_core::types::round_price;
//!
//! assert_eq!(round_price(10.0049), 10.0);
//! assert_eq!(round_price(10.006), 10.01);
//! ```
//!
//! ## Дизайн
//!
//! `feed-core` задуман как “нулевая” зависимость для всех частей системы:
//! движок, демо, тесты. Поэтому здесь держим только:
//! чистые типы, парсинг и простую утилитарщину,
//! без потоков и без тяжёлых зависимостей.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Чтение/нормализация списка наблюдаемых полей из текста и файлов.
pub mod fields;

/// Доменные типы (снимок полей, идентификаторы).
pub mod types;

/// Ошибки `feed-core`.
pub mod error;

/// Общие константы
mod constants;
pub use constants::{
    DEFAULT_MAX_STEP, DEFAULT_START_PRICE, DEFAULT_TICK_COUNT, DEFAULT_TICK_INTERVAL,
};

// --- Re-exports (публичный фасад API) ---

pub use crate::error::{DeliveryError, FeedError, FieldError};
pub use crate::types::{Snapshot, SubscriberId, format_snapshot, round_price};
