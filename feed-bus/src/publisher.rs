use crate::subscriber::Subscriber;
use feed_core::types::{Snapshot, SubscriberId};
use feed_core::{FieldError, format_snapshot};
use log::{debug, warn};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

/// Итог одной рассылки: сколько подписчиков получили снимок,
/// у скольких обработчик вернул ошибку.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotifyStats {
    /// Успешные доставки
    pub delivered: usize,
    /// Обработчик вернул ошибку (изолировано, рассылка продолжена)
    pub failed: usize,
}

impl fmt::Display for NotifyStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "delivered={} failed={}", self.delivered, self.failed)
    }
}

impl NotifyStats {
    /// Была ли хоть одна попытка доставки.
    pub fn not_empty(&self) -> bool {
        if self.delivered + self.failed > 0 {
            return true;
        }
        false
    }
}

/// Всё разделяемое состояние паблишера живёт под одним мьютексом:
/// мутация поля и обход реестра никогда не видят друг друга на полпути.
struct Inner {
    fields: Snapshot,
    subscribers: Vec<Arc<dyn Subscriber>>,
}

/// Паблишер котировок: наблюдаемые поля + упорядоченный реестр подписчиков.
///
/// `set_field` атомарен относительно `register`/`unregister` и других
/// `set_field`: значение обновляется и рассылается под одним захватом
/// мьютекса, в порядке регистрации. Подписчик, удалённый до рассылки,
/// уведомления не получит.
pub struct PricePublisher {
    inner: Mutex<Inner>,
    /// Генератор идентификаторов подписчиков. Принадлежит паблишеру,
    /// никакого глобального счётчика на процесс.
    next_id: AtomicU64,
}

impl fmt::Debug for PricePublisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PricePublisher").finish_non_exhaustive()
    }
}

impl PricePublisher {
    /// Создаёт паблишер с заданным набором полей, все значения = 0.0.
    pub fn new(field_names: Vec<String>) -> Result<Self, FieldError> {
        if field_names.is_empty() {
            return Err(FieldError::EmptyFieldSet);
        }

        let fields = field_names.into_iter().map(|n| (n, 0.0)).collect();

        Ok(Self {
            inner: Mutex::new(Inner {
                fields,
                subscribers: Vec::new(),
            }),
            next_id: AtomicU64::new(1),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        match self.inner.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(), // продолжаем, несмотря на poison
        }
    }

    /// Выдаёт следующий идентификатор подписчика (монотонно, уникально).
    pub fn next_subscriber_id(&self) -> SubscriberId {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Добавляет подписчика в конец реестра. Повторная регистрация того же
    /// подписчика даёт вторую запись (и второе уведомление на каждую мутацию).
    pub fn register(&self, subscriber: Arc<dyn Subscriber>) {
        let sid = subscriber.id();
        let mut inner = self.lock();
        inner.subscribers.push(subscriber);
        debug!("registered subscriber {sid}; registry size={}", inner.subscribers.len());
    }

    /// Удаляет первую запись с данным идентификатором.
    ///
    /// Возвращает `false`, если подписчик не найден: это штатный результат,
    /// а не ошибка. После возврата `true` подписчик не получит ни одного
    /// уведомления, отправленного позже.
    pub fn unregister(&self, id: SubscriberId) -> bool {
        let mut inner = self.lock();
        match inner.subscribers.iter().position(|s| s.id() == id) {
            Some(pos) => {
                inner.subscribers.remove(pos);
                debug!("unregistered subscriber {id}; registry size={}", inner.subscribers.len());
                true
            }
            None => {
                debug!("unregister: subscriber {id} not found");
                false
            }
        }
    }

    /// Обновляет поле и рассылает свежий снимок всем подписчикам,
    /// в порядке регистрации, под тем же захватом мьютекса.
    ///
    /// Неизвестное поле -> `FieldError::UnknownField`, состояние не меняется.
    pub fn set_field(&self, name: &str, value: f64) -> Result<NotifyStats, FieldError> {
        let mut inner = self.lock();

        match inner.fields.get_mut(name) {
            Some(slot) => *slot = value,
            None => return Err(FieldError::UnknownField(name.to_string())),
        }

        let snapshot = inner.fields.clone();
        Ok(fan_out(&inner.subscribers, &snapshot))
    }

    /// Рассылает текущий снимок без мутации (повторная доставка).
    pub fn notify_all(&self) -> NotifyStats {
        let inner = self.lock();
        let snapshot = inner.fields.clone();
        fan_out(&inner.subscribers, &snapshot)
    }

    /// Текущий снимок всех полей.
    pub fn snapshot(&self) -> Snapshot {
        self.lock().fields.clone()
    }

    /// Входит ли поле в сконфигурированный набор.
    pub fn has_field(&self, name: &str) -> bool {
        self.lock().fields.contains_key(name)
    }

    /// Текущий размер реестра (записей, не уникальных подписчиков).
    pub fn subscriber_count(&self) -> usize {
        self.lock().subscribers.len()
    }
}

/// Доставка снимка всем подписчикам по порядку. Ошибка одного обработчика
/// логируется и не мешает остальным.
fn fan_out(subscribers: &[Arc<dyn Subscriber>], snapshot: &Snapshot) -> NotifyStats {
    let mut delivered: usize = 0;
    let mut failed: usize = 0;

    for sub in subscribers {
        match sub.on_update(snapshot) {
            Ok(()) => delivered += 1,
            Err(e) => {
                warn!("delivery to subscriber {} failed: {e}; snapshot: {}", sub.id(), format_snapshot(snapshot));
                failed += 1;
            }
        }
    }

    NotifyStats { delivered, failed }
}
