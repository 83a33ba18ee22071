// src/ui/timer.rs

//! The host's timer facility, as seen by widgets.
use std::collections::VecDeque;
use std::time::Duration;

/// Handle carried by a scheduled blink tick. The generation identifies the
/// blinking run that scheduled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlinkToken {
    pub generation: u64,
}

/// Delivers a [`BlinkToken`] back to its widget once `delay` has elapsed.
///
/// Delivery happens on the same dispatch thread that handles resizes, so
/// widgets never observe a tick concurrently with a relayout.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, token: BlinkToken);
}

/// Queues ticks instead of waiting for them. The caller decides when each
/// one "fires" by popping it.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    pending: VecDeque<(Duration, BlinkToken)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop the oldest pending tick.
    pub fn next_due(&mut self) -> Option<BlinkToken> {
        self.pending.pop_front().map(|(_, token)| token)
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn last_delay(&self) -> Option<Duration> {
        self.pending.back().map(|(delay, _)| *delay)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, token: BlinkToken) {
        self.pending.push_back((delay, token));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_scheduler_is_fifo() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(Duration::from_millis(30), BlinkToken { generation: 1 });
        scheduler.schedule(Duration::from_millis(45), BlinkToken { generation: 2 });

        assert_eq!(scheduler.pending(), 2);
        assert_eq!(scheduler.last_delay(), Some(Duration::from_millis(45)));
        assert_eq!(scheduler.next_due(), Some(BlinkToken { generation: 1 }));
        assert_eq!(scheduler.next_due(), Some(BlinkToken { generation: 2 }));
        assert_eq!(scheduler.next_due(), None);
    }
}
