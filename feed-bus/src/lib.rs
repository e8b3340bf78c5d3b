//! # feed-bus
//!
//! In-process движок публикации котировок: паблишер с реестром подписчиков,
//! синхронный fan-out и потоки-продьюсеры.
//!
//! Компоненты:
//!
//! - [`publisher`] — [`PricePublisher`]: наблюдаемые поля + реестр подписчиков
//!   под одним мьютексом; мутация поля и рассылка неделимы
//! - [`subscriber`] — трейт [`Subscriber`] и две реализации:
//!   синхронный [`PriceSubscriber`] и [`ChannelSubscriber`] с bounded-очередью
//! - [`producer`] — [`Producer`]: поток, который переживает `tick_count` тиков
//!   случайного блуждания цены одного поля и завершается
//!
//! ## Быстрый пример
//!
//! ```rust
//! use std::sync::Arc;
//! use feed_bus::{PricePublisher, PriceSubscriber};
//!
//! let publisher = Arc::new(
//!     PricePublisher::new(vec!["ibm".to_string(), "apple".to_string()]).unwrap(),
//! );
//! let sub = PriceSubscriber::attach(&publisher);
//!
//! publisher.set_field("ibm", 10.0).unwrap();
//! assert_eq!(sub.last_values()["ibm"], 10.0);
//! assert_eq!(sub.last_values()["apple"], 0.0);
//!
//! assert!(sub.detach());
//! publisher.set_field("apple", 20.0).unwrap();
//! assert_eq!(sub.last_values()["apple"], 0.0); // после detach снимок замирает
//! ```
//!
//! ## Конкурентность
//!
//! Сколько угодно продьюсеров может конкурентно звать `set_field`, и сколько
//! угодно потоков — `register`/`unregister`. Гарантии: нет гонок по полям и
//! реестру; каждый подписчик видит снимок ровно одной завершённой мутации;
//! внутри одного `set_field` порядок доставки равен порядку регистрации.
//! Обратная сторона синхронного fan-out: медленный подписчик тормозит
//! продьюсеров, поэтому обработчики обязаны быть короткими, а долгую работу
//! выносить в очередь ([`ChannelSubscriber`]).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Паблишер: поля + реестр, синхронный fan-out.
pub mod publisher;

/// Трейт подписчика и его реализации.
pub mod subscriber;

/// Поток-продьюсер: случайное блуждание цены одного поля.
pub mod producer;

// --- Re-exports (публичный фасад API) ---

pub use crate::producer::{Producer, ProducerConfig, ProducerHandle, ProducerReport, ProducerState};
pub use crate::publisher::{NotifyStats, PricePublisher};
pub use crate::subscriber::{ChannelSubscriber, PriceSubscriber, Subscriber};
