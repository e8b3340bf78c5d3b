//! Точка входа `feed-demo`.
//!
//! Жизненный цикл:
//! - парсинг CLI и загрузка списка полей
//! - создание паблишера и подключение подписчиков
//! - запуск продьюсеров (по потоку на продьюсера) с общим флагом остановки
//! - опциональный detach первого подписчика посреди прогона
//! - корректная остановка по `Ctrl+C`, итоговые снимки в stdout

mod cli;
mod config;

use std::sync::{Arc, atomic::AtomicBool, atomic::Ordering};
use std::thread;
use std::time::Duration;

use clap::Parser;
use feed_bus::{PricePublisher, PriceSubscriber, Producer, ProducerConfig};
use feed_core::format_snapshot;
use log::info;

fn main() -> anyhow::Result<()> {
    // Логи через RUST_LOG=info/debug
    env_logger::init();

    let stop = Arc::new(AtomicBool::new(false));

    // Ctrl+C => просим все продьюсеры остановиться
    {
        let stop = stop.clone();
        ctrlc::set_handler(move || {
            stop.store(true, Ordering::Relaxed);
            info!("shutting down...");
        })?;
    }

    let args = cli::Args::parse();

    let fields = config::load_fields(args.fields_file.clone(), args.fields.as_deref())?;
    anyhow::ensure!(!fields.is_empty(), "field list is empty");

    info!(
        "starting feed-demo: fields={}, subscribers={}, producers_per_field={}, ticks={}",
        fields.join(","),
        args.subscribers,
        args.producers_per_field,
        args.ticks
    );

    let publisher = Arc::new(PricePublisher::new(fields.clone())?);

    let subscribers: Vec<_> = (0..args.subscribers)
        .map(|_| PriceSubscriber::attach(&publisher))
        .collect();

    let mut producers = Vec::new();
    for field in &fields {
        for _ in 0..args.producers_per_field {
            let cfg = ProducerConfig {
                tick_count: args.ticks,
                tick_interval: Duration::from_millis(args.tick_interval_ms),
                start_value: args.start_price,
                max_step: args.max_step,
                ..ProducerConfig::for_field(field.clone())
            };
            let producer = Producer::new(publisher.clone(), cfg)?;
            producers.push(producer.spawn(stop.clone()));
        }
    }

    // имитация позднего отказа от подписки посреди потока уведомлений
    if let (Some(delay_ms), Some(first)) = (args.detach_first_after_ms, subscribers.first()) {
        thread::sleep(Duration::from_millis(delay_ms));
        let detached = first.detach();
        info!("detached first subscriber {} -> {detached}", first.id());
    }

    for handle in producers {
        let report = handle.join();
        println!("producer done: {report}");
    }

    println!("final publisher snapshot: {}", format_snapshot(&publisher.snapshot()));
    for sub in &subscribers {
        println!(
            "subscriber {}: updates={} last: {}",
            sub.id(),
            sub.update_count(),
            format_snapshot(&sub.last_values())
        );
    }

    Ok(())
}
