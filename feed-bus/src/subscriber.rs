use crate::publisher::PricePublisher;
use crossbeam_channel::{Receiver, Sender, TrySendError};
use feed_core::DeliveryError;
use feed_core::types::{Snapshot, SubscriberId};
use log::debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

/// Получатель уведомлений паблишера.
///
/// `on_update` вызывается синхронно, под мьютексом паблишера, поэтому
/// обработчик обязан быть коротким и неблокирующим: долгую работу
/// выносить в очередь (см. [`ChannelSubscriber`]). Мьютекс не реентерабелен:
/// звать из `on_update` `register`/`unregister`/`set_field` того же
/// паблишера нельзя — это самоблокировка. Ошибка обработчика
/// изолируется паблишером и до остальных подписчиков не доходит.
pub trait Subscriber: Send + Sync {
    /// Стабильный идентификатор, по которому подписчика снимают с реестра.
    fn id(&self) -> SubscriberId;

    /// Принимает снимок всех полей после одной завершённой мутации.
    fn on_update(&self, snapshot: &Snapshot) -> Result<(), DeliveryError>;
}

/// Синхронный подписчик: хранит последний доставленный снимок.
pub struct PriceSubscriber {
    id: SubscriberId,
    /// Обратная ссылка нужна только для unregister; Weak, чтобы
    /// не образовать цикл с Arc-ами реестра.
    publisher: Weak<PricePublisher>,
    last_values: Mutex<Snapshot>,
    updates: AtomicU64,
}

impl PriceSubscriber {
    /// Создаёт подписчика и сразу регистрирует его у паблишера
    /// (конструирование == подписка, идентификатор выдаёт паблишер).
    pub fn attach(publisher: &Arc<PricePublisher>) -> Arc<Self> {
        let sub = Arc::new(Self {
            id: publisher.next_subscriber_id(),
            publisher: Arc::downgrade(publisher),
            last_values: Mutex::new(Snapshot::new()),
            updates: AtomicU64::new(0),
        });

        debug!("new subscriber: {}", sub.id);
        publisher.register(sub.clone());
        sub
    }

    /// Снимает подписчика с реестра. `false`, если он уже снят
    /// (или паблишер не существует). Последний снимок сохраняется.
    pub fn detach(&self) -> bool {
        match self.publisher.upgrade() {
            Some(p) => p.unregister(self.id),
            None => false,
        }
    }

    /// Идентификатор, выданный паблишером при подписке.
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Последний доставленный снимок (пустой до первого уведомления).
    pub fn last_values(&self) -> Snapshot {
        match self.last_values.lock() {
            Ok(g) => g.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Сколько уведомлений доставлено за время жизни.
    pub fn update_count(&self) -> u64 {
        self.updates.load(Ordering::Relaxed)
    }
}

impl Subscriber for PriceSubscriber {
    fn id(&self) -> SubscriberId {
        self.id
    }

    fn on_update(&self, snapshot: &Snapshot) -> Result<(), DeliveryError> {
        {
            let mut last = match self.last_values.lock() {
                Ok(g) => g,
                Err(poisoned) => poisoned.into_inner(),
            };
            *last = snapshot.clone();
        }

        self.updates.fetch_add(1, Ordering::Relaxed);
        debug!("subscriber {}: {}", self.id, feed_core::format_snapshot(snapshot));
        Ok(())
    }
}

/// Подписчик с bounded-очередью: `on_update` только кладёт снимок в канал
/// и никогда не ждёт потребителя. Переполненная очередь — ошибка доставки
/// (паблишер залогирует и продолжит), а не блокировка его мьютекса.
pub struct ChannelSubscriber {
    id: SubscriberId,
    tx: Sender<Snapshot>,
}

impl ChannelSubscriber {
    /// Создаёт подписчика с очередью на `capacity` снимков, регистрирует его
    /// и отдаёт потребительский конец канала.
    pub fn attach(
        publisher: &Arc<PricePublisher>,
        capacity: usize,
    ) -> (Arc<Self>, Receiver<Snapshot>) {
        let (tx, rx) = crossbeam_channel::bounded(capacity);

        let sub = Arc::new(Self {
            id: publisher.next_subscriber_id(),
            tx,
        });

        debug!("new channel subscriber: {}", sub.id);
        publisher.register(sub.clone());
        (sub, rx)
    }

    /// Снимает подписчика с реестра паблишера.
    pub fn detach(&self, publisher: &PricePublisher) -> bool {
        publisher.unregister(self.id)
    }

    /// Идентификатор, выданный паблишером при подписке.
    pub fn id(&self) -> SubscriberId {
        self.id
    }
}

impl Subscriber for ChannelSubscriber {
    fn id(&self) -> SubscriberId {
        self.id
    }

    fn on_update(&self, snapshot: &Snapshot) -> Result<(), DeliveryError> {
        match self.tx.try_send(snapshot.clone()) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => Err(DeliveryError::new(format!(
                "subscriber {} queue is full",
                self.id
            ))),
            Err(TrySendError::Disconnected(_)) => Err(DeliveryError::new(format!(
                "subscriber {} consumer is gone",
                self.id
            ))),
        }
    }
}
