//! Observability subsystem for zhuzi
//!
//! Structured JSON logging of table binding and schema validation.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on results
//! 3. No async or background threads
//! 4. Deterministic output
//!
//! Logging is disabled unless enabled through [`LogConfig`](crate::config::LogConfig)
//! or the `ZHUZI_LOG` environment variable.

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

#[cfg(test)]
thread_local! {
    /// Events emitted on this thread, regardless of the active config
    static EMITTED: std::cell::RefCell<Vec<Event>> = std::cell::RefCell::new(Vec::new());
}

/// Drains the events emitted on the current thread
#[cfg(test)]
pub(crate) fn take_emitted() -> Vec<Event> {
    EMITTED.with(|emitted| emitted.borrow_mut().drain(..).collect())
}

/// Log an event at its own severity
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log an event with fields at its own severity
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    #[cfg(test)]
    EMITTED.with(|emitted| emitted.borrow_mut().push(event));
    Logger::log(event.severity(), event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event() {
        // Only verifies no panic
        log_event(Event::TableBound);
        log_event(Event::TemplateGenerated);
    }

    #[test]
    fn test_log_event_with_fields() {
        log_event_with_fields(Event::SchemaMismatch, &[("record", "CustomPoint")]);
    }

    #[test]
    fn test_emitted_events_in_order() {
        take_emitted();
        log_event(Event::TemplateGenerated);
        log_event_with_fields(Event::TemplateDefined, &[("template", "T")]);
        assert_eq!(
            take_emitted(),
            vec![Event::TemplateGenerated, Event::TemplateDefined]
        );
        assert!(take_emitted().is_empty());
    }
}
