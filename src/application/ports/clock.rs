use chrono::NaiveDateTime;

/// Source of server-local wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}
