use std::time::Instant;

pub(crate) trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

pub(crate) struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[cfg(test)]
pub(crate) use manual::ManualClock;

#[cfg(test)]
mod manual {
    use std::{
        sync::Mutex,
        time::{Duration, Instant},
    };

    use super::Clock;

    /// A clock that only moves when told to.
    pub(crate) struct ManualClock {
        now: Mutex<Instant>,
    }

    impl ManualClock {
        pub(crate) fn new() -> Self {
            Self { now: Mutex::new(Instant::now()) }
        }

        pub(crate) fn advance(&self, duration: Duration) {
            let mut now = self.now.lock().expect("clock lock should not be poisoned");
            *now += duration;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            *self.now.lock().expect("clock lock should not be poisoned")
        }
    }
}
