//! Debounce
//!
//! Delays a rapidly changing value until it has been stable for a fixed
//! interval. Every change bumps a generation; a timer only delivers its value
//! if no newer change arrived in the meantime.

use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;

/// Delay between the last keystroke and the URL update
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Handle for one scheduled delivery
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Last-write-wins debounce state
#[derive(Debug, Clone, Default)]
pub struct Debouncer<T> {
    generation: u64,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    pub fn new() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }

    /// Record a new value, superseding any pending one
    pub fn push(&mut self, value: T) -> Ticket {
        self.generation += 1;
        self.pending = Some(value);
        Ticket(self.generation)
    }

    /// Called when the timer for `ticket` elapses. Yields the pending value
    /// only for the most recent ticket.
    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        if ticket.0 != self.generation {
            return None;
        }
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Signal that follows `source` after it has been unchanged for `delay`.
///
/// Starts out equal to the current source value.
pub fn use_debounced<T>(source: Signal<T>, delay: Duration) -> ReadSignal<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let (debounced, set_debounced) = signal(source.get_untracked());
    let state = StoredValue::new(Debouncer::<T>::new());
    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);

    Effect::new(move |previous: Option<()>| {
        let value = source.get();
        // Skip the initial run; the signal already holds this value.
        if previous.is_none() {
            return;
        }
        let Some(ticket) = state.try_update_value(|d| d.push(value)) else {
            return;
        };
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(millis).await;
            if let Some(value) = state.try_update_value(|d| d.fire(ticket)).flatten() {
                if debounced.get_untracked() != value {
                    set_debounced.set(value);
                }
            }
        });
    });

    debounced
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rapid_updates_deliver_only_the_last_value() {
        let mut debouncer = Debouncer::new();
        let tickets: Vec<_> = ["a", "ab", "abc"].into_iter().map(|v| debouncer.push(v)).collect();

        let delivered: Vec<_> = tickets.into_iter().filter_map(|t| debouncer.fire(t)).collect();
        assert_eq!(delivered, vec!["abc"]);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn separate_bursts_deliver_separately() {
        let mut debouncer = Debouncer::new();
        let first = debouncer.push(1);
        assert_eq!(debouncer.fire(first), Some(1));
        let second = debouncer.push(2);
        assert_eq!(debouncer.fire(first), None);
        assert_eq!(debouncer.fire(second), Some(2));
    }

    #[test]
    fn a_ticket_fires_at_most_once() {
        let mut debouncer = Debouncer::new();
        let ticket = debouncer.push("x");
        assert_eq!(debouncer.fire(ticket), Some("x"));
        assert_eq!(debouncer.fire(ticket), None);
    }
}
