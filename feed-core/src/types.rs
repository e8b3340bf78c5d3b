use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Идентификатор подписчика. Выдаётся паблишером, монотонно растёт.
pub type SubscriberId = u64;

/// Снимок всех наблюдаемых полей на момент одной завершённой мутации.
///
/// BTreeMap, а не HashMap: детерминированный порядок обхода
/// упрощает вывод и сравнение в тестах.
pub type Snapshot = BTreeMap<String, f64>;

/// Округляет цену до 2 знаков после запятой (фиксированная точность фида).
pub fn round_price(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Текстовое представление снимка: `apple=20.00 google=30.00 ibm=10.00`.
pub fn format_snapshot(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    for (i, (name, value)) in snapshot.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        // запись в String не падает
        let _ = write!(out, "{name}={value:.2}");
    }
    out
}
