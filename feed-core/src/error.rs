use thiserror::Error;

/// Верхнеуровневый тип ошибок крейта
#[derive(Debug, Error)]
pub enum FeedError {
    /// Ошибки набора полей
    #[error(transparent)]
    Field(#[from] FieldError),

    /// Ошибка доставки уведомления подписчику
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

/// Ошибки набора наблюдаемых полей
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    /// Поле не входит в сконфигурированный набор паблишера
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// Паблишер создан с пустым набором полей
    #[error("field set is empty")]
    EmptyFieldSet,
}

/// Ошибка обработчика `on_update` одного подписчика.
///
/// Изолируется на уровне паблишера: логируется, fan-out продолжается,
/// до продьюсера, вызвавшего `set_field`, не доходит.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("subscriber delivery failed: {0}")]
pub struct DeliveryError(pub String);

impl DeliveryError {
    /// Ошибка с текстовым описанием причины.
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}
