use crate::publisher::PricePublisher;
use feed_core::types::round_price;
use feed_core::{
    DEFAULT_MAX_STEP, DEFAULT_START_PRICE, DEFAULT_TICK_COUNT, DEFAULT_TICK_INTERVAL, FieldError,
};
use log::{info, warn};
use rand::Rng;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Конфигурация продьюсера одного поля.
#[derive(Debug, Clone)]
pub struct ProducerConfig {
    /// Поле, которое продьюсер возмущает
    pub field: String,
    /// Сколько тиков эмитить, после чего поток завершается
    pub tick_count: u32,
    /// Пауза между тиками
    pub tick_interval: Duration,
    /// Стартовая цена случайного блуждания
    pub start_value: f64,
    /// Максимальный абсолютный шаг за тик (пример: 0.03)
    pub max_step: f64,
}

impl ProducerConfig {
    /// Конфигурация для поля с дефолтными темпом и бюджетом.
    pub fn for_field(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            tick_count: DEFAULT_TICK_COUNT,
            tick_interval: DEFAULT_TICK_INTERVAL,
            start_value: DEFAULT_START_PRICE,
            max_step: DEFAULT_MAX_STEP,
        }
    }
}

/// Фаза запущенного продьюсера. Переход только вперёд:
/// `Running -> Done`, без пауз и повторного входа.
/// До [`Producer::spawn`] потока не существует, и фазы у продьюсера нет.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProducerState {
    /// Поток крутит тики
    Running,
    /// Бюджет тиков исчерпан или пришёл сигнал остановки
    Done,
}

/// Итог работы продьюсера.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProducerReport {
    /// Поле, которое возмущал продьюсер
    pub field: String,
    /// Сколько мутаций реально эмитнуто (меньше бюджета при остановке)
    pub ticks_emitted: u32,
}

impl fmt::Display for ProducerReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field={} ticks_emitted={}", self.field, self.ticks_emitted)
    }
}

/// Продьюсер: имитация внешнего фида. Отдельный поток раз в `tick_interval`
/// делает шаг случайного блуждания и зовёт `set_field` у паблишера.
///
/// До [`Producer::spawn`] продьюсер бездействует: это просто конфигурация
/// с привязкой к паблишеру, поток появляется только при запуске.
#[derive(Debug)]
pub struct Producer {
    publisher: Arc<PricePublisher>,
    cfg: ProducerConfig,
}

impl Producer {
    /// Привязывает продьюсера к паблишеру. Поле проверяется сразу:
    /// продьюсер на неизвестное поле не создаётся.
    pub fn new(publisher: Arc<PricePublisher>, cfg: ProducerConfig) -> Result<Self, FieldError> {
        if !publisher.has_field(&cfg.field) {
            return Err(FieldError::UnknownField(cfg.field.clone()));
        }

        Ok(Self { publisher, cfg })
    }

    /// Запускает поток тиков, продьюсер переходит в [`ProducerState::Running`].
    ///
    /// `stop` проверяется между тиками: общий флаг позволяет координатору
    /// остановить все продьюсеры разом, не теряя и не дублируя мутации.
    pub fn spawn(self, stop: Arc<AtomicBool>) -> ProducerHandle {
        let field = self.cfg.field.clone();
        let done = Arc::new(AtomicBool::new(false));

        let thread_done = done.clone();
        let thread_stop = stop.clone();
        let join = thread::spawn(move || {
            let report = self.run(&thread_stop);
            info!("producer finished: {report}");
            thread_done.store(true, Ordering::Relaxed);
            report
        });

        ProducerHandle {
            field,
            stop,
            done,
            join,
        }
    }

    fn run(self, stop: &AtomicBool) -> ProducerReport {
        let mut rng = rand::rng();
        let mut value = self.cfg.start_value;
        let mut ticks_emitted: u32 = 0;

        for _ in 0..self.cfg.tick_count {
            if stop.load(Ordering::Relaxed) {
                break;
            }

            thread::sleep(self.cfg.tick_interval);

            // сон мог пережить сигнал остановки
            if stop.load(Ordering::Relaxed) {
                break;
            }

            let delta = rng.random_range(-self.cfg.max_step..=self.cfg.max_step);
            value = round_price(value + delta);

            match self.publisher.set_field(&self.cfg.field, value) {
                Ok(_) => ticks_emitted += 1,
                Err(e) => {
                    // поле проверено в new(); сюда можно попасть только если
                    // контракт нарушен — останавливаемся, не зацикливаемся
                    warn!("producer for {}: set_field failed: {e}", self.cfg.field);
                    break;
                }
            }
        }

        ProducerReport {
            field: self.cfg.field,
            ticks_emitted,
        }
    }
}

/// Хэндл запущенного продьюсера: сигнал остановки + join.
pub struct ProducerHandle {
    field: String,
    stop: Arc<AtomicBool>,
    done: Arc<AtomicBool>,
    join: JoinHandle<ProducerReport>,
}

impl ProducerHandle {
    /// Просит продьюсера остановиться перед следующим тиком.
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Поле, которое возмущает продьюсер.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Текущая фаза: `Running`, пока поток не дошёл до конца цикла.
    pub fn state(&self) -> ProducerState {
        if self.done.load(Ordering::Relaxed) {
            ProducerState::Done
        } else {
            ProducerState::Running
        }
    }

    /// Ждёт завершения потока и возвращает отчёт.
    pub fn join(self) -> ProducerReport {
        match self.join.join() {
            Ok(report) => report,
            Err(_) => {
                // поток упал; считаем, что ничего не эмитнул
                warn!("producer thread for {} panicked", self.field);
                ProducerReport {
                    field: self.field,
                    ticks_emitted: 0,
                }
            }
        }
    }
}
