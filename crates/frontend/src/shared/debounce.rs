//! Debounce с отсечением повторов (debounce + distinct-until-changed)
//!
//! Чистая машина состояний без таймеров: вызывающий код сам ждёт
//! задержку и потом сообщает, какой тикет истёк. Сработает только
//! последний тикет, и только если значение отличается от уже отданного.

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    ticket: u64,
    pending: Option<T>,
    last_emitted: Option<T>,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    pub fn new() -> Self {
        Self {
            ticket: 0,
            pending: None,
            last_emitted: None,
        }
    }

    /// Новое значение; предыдущий ожидающий тикет становится недействительным
    pub fn push(&mut self, value: T) -> u64 {
        self.ticket += 1;
        self.pending = Some(value);
        self.ticket
    }

    /// Таймер тикета истёк; возвращает значение, которое нужно отдать дальше
    pub fn elapsed(&mut self, ticket: u64) -> Option<T> {
        if ticket != self.ticket {
            return None;
        }
        let value = self.pending.take()?;
        self.emit_if_changed(value)
    }

    /// Отдать значение сразу, минуя задержку (например, кнопка очистки)
    pub fn emit_now(&mut self, value: T) -> Option<T> {
        self.cancel();
        self.emit_if_changed(value)
    }

    /// Отменить ожидающее значение
    pub fn cancel(&mut self) {
        self.ticket += 1;
        self.pending = None;
    }

    fn emit_if_changed(&mut self, value: T) -> Option<T> {
        if self.last_emitted.as_ref() == Some(&value) {
            return None;
        }
        self.last_emitted = Some(value.clone());
        Some(value)
    }
}

impl<T: Clone + PartialEq> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new()
    }
}
