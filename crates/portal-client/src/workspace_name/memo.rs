use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};

use futures_util::{
    future::{BoxFuture, Shared},
    FutureExt,
};
use tokio::time::Instant;
use tracing::debug;

use super::{checker::HttpAvailabilityChecker, AvailabilityChecker, CheckError};
use crate::config::AvailabilityClientConfig;

type SharedOutcome = Shared<BoxFuture<'static, Result<bool, CheckError>>>;

struct MemoEntry {
    created_at: Instant,
    outcome: SharedOutcome,
}

/// Deduplicates availability lookups by composed name.
///
/// The first caller for a name starts the lookup; every caller for the same name within
/// the TTL awaits that same outcome, whether it is still in flight or already resolved.
/// Failed lookups are remembered as well. Expired entries are dropped whenever a new
/// lookup is started; callers already waiting keep their own handle on the outcome.
///
/// The lookup runs as its own task, so a caller that stops waiting does not cancel it for
/// the others.
pub struct AvailabilityMemo {
    checker: Arc<dyn AvailabilityChecker + Send + Sync>,
    ttl: Duration,
    entries: Mutex<HashMap<String, MemoEntry>>,
}

impl AvailabilityMemo {
    pub fn new(checker: Arc<dyn AvailabilityChecker + Send + Sync>, ttl: Duration) -> Self {
        Self { checker, ttl, entries: Mutex::new(HashMap::new()) }
    }

    pub fn from_config(config: &AvailabilityClientConfig) -> Self {
        Self::new(Arc::new(HttpAvailabilityChecker::new(config.base_url.clone())), config.memo_ttl)
    }

    pub async fn is_available(&self, name: &str) -> Result<bool, CheckError> {
        self.outcome_for(name).await
    }

    fn outcome_for(&self, name: &str) -> SharedOutcome {
        let now = Instant::now();
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(entry) = entries.get(name) {
            if now.duration_since(entry.created_at) < self.ttl {
                debug!("availability memo hit for \"{name}\"");
                return entry.outcome.clone();
            }
        }

        debug!("availability memo miss for \"{name}\"");
        let checker = self.checker.clone();
        let owned_name = name.to_owned();
        let lookup = tokio::spawn(async move { checker.check(&owned_name).await });
        let outcome = async move {
            match lookup.await {
                Ok(result) => result,
                Err(e) if e.is_cancelled() => Err(CheckError::Cancelled),
                Err(e) => Err(CheckError::Transport(e.to_string())),
            }
        }
        .boxed()
        .shared();

        let ttl = self.ttl;
        entries.retain(|_, entry| now.duration_since(entry.created_at) < ttl);
        entries.insert(name.to_owned(), MemoEntry { created_at: now, outcome: outcome.clone() });
        outcome
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

#[cfg(test)]
mod test {
    use std::{
        sync::{
            atomic::{AtomicUsize, Ordering},
            Arc,
        },
        time::Duration,
    };

    use async_trait::async_trait;
    use mockall::Sequence;

    use super::AvailabilityMemo;
    use crate::workspace_name::{checker::MockAvailabilityChecker, AvailabilityChecker, CheckError};

    const TTL: Duration = Duration::from_secs(5);

    /// Answers `true` after `delay`, counting calls.
    struct SlowChecker {
        calls: AtomicUsize,
        delay: Duration,
    }

    #[async_trait]
    impl AvailabilityChecker for SlowChecker {
        async fn check(&self, _name: &str) -> Result<bool, CheckError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            Ok(true)
        }
    }

    #[tokio::test(start_paused = true)]
    async fn when_same_name_is_looked_up_concurrently_then_checker_is_called_once() {
        let mut checker_mock = MockAvailabilityChecker::new();
        checker_mock.expect_check().withf(|name| name == "lake-DRN001e").times(1).returning(|_| Ok(true));
        let memo = AvailabilityMemo::new(Arc::new(checker_mock), TTL);

        let (first, second) = tokio::join!(memo.is_available("lake-DRN001e"), memo.is_available("lake-DRN001e"));

        assert_eq!(first, Ok(true));
        assert_eq!(second, Ok(true));
    }

    #[tokio::test(start_paused = true)]
    async fn when_resolved_entry_is_within_ttl_then_it_is_reused() {
        let mut checker_mock = MockAvailabilityChecker::new();
        checker_mock.expect_check().times(1).returning(|_| Ok(false));
        let memo = AvailabilityMemo::new(Arc::new(checker_mock), TTL);

        assert_eq!(memo.is_available("lake-DRN001e").await, Ok(false));
        tokio::time::advance(Duration::from_millis(4_999)).await;
        assert_eq!(memo.is_available("lake-DRN001e").await, Ok(false));
    }

    #[tokio::test(start_paused = true)]
    async fn when_ttl_has_passed_then_lookup_is_repeated() {
        let mut sequence = Sequence::new();
        let mut checker_mock = MockAvailabilityChecker::new();
        checker_mock.expect_check().times(1).in_sequence(&mut sequence).returning(|_| Ok(true));
        checker_mock.expect_check().times(1).in_sequence(&mut sequence).returning(|_| Ok(false));
        let memo = AvailabilityMemo::new(Arc::new(checker_mock), TTL);

        assert_eq!(memo.is_available("lake-DRN001e").await, Ok(true));
        tokio::time::advance(TTL).await;
        assert_eq!(memo.is_available("lake-DRN001e").await, Ok(false));
    }

    #[tokio::test(start_paused = true)]
    async fn when_names_differ_then_each_is_looked_up() {
        let mut checker_mock = MockAvailabilityChecker::new();
        checker_mock.expect_check().withf(|name| name == "a-DRN001e").times(1).returning(|_| Ok(true));
        checker_mock.expect_check().withf(|name| name == "b-DRN001e").times(1).returning(|_| Ok(false));
        let memo = AvailabilityMemo::new(Arc::new(checker_mock), TTL);

        assert_eq!(memo.is_available("a-DRN001e").await, Ok(true));
        assert_eq!(memo.is_available("b-DRN001e").await, Ok(false));
    }

    #[tokio::test(start_paused = true)]
    async fn when_lookup_fails_then_failure_is_shared_within_ttl() {
        let mut checker_mock = MockAvailabilityChecker::new();
        checker_mock
            .expect_check()
            .times(1)
            .returning(|_| Err(CheckError::Rejected("Databricks token error: 401".to_owned())));
        let memo = AvailabilityMemo::new(Arc::new(checker_mock), TTL);

        let expected = Err(CheckError::Rejected("Databricks token error: 401".to_owned()));
        assert_eq!(memo.is_available("lake-DRN001e").await, expected);
        assert_eq!(memo.is_available("lake-DRN001e").await, expected);
    }

    #[tokio::test(start_paused = true)]
    async fn when_a_waiter_is_aborted_mid_lookup_then_other_waiters_still_get_the_shared_result() {
        let checker = Arc::new(SlowChecker { calls: AtomicUsize::new(0), delay: Duration::from_secs(1) });
        let memo = Arc::new(AvailabilityMemo::new(checker.clone(), TTL));

        let abandoned = tokio::spawn({
            let memo = memo.clone();
            async move { memo.is_available("lake-DRN001e").await }
        });
        while checker.calls.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }
        assert_eq!(memo.len(), 1);
        assert_eq!(checker.calls.load(Ordering::SeqCst), 1);

        abandoned.abort();
        let aborted = abandoned.await.expect_err("aborted waiter should not complete");
        assert!(aborted.is_cancelled());

        assert_eq!(memo.is_available("lake-DRN001e").await, Ok(true));
        assert_eq!(checker.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn when_new_lookup_starts_then_expired_entries_are_dropped() {
        let mut checker_mock = MockAvailabilityChecker::new();
        checker_mock.expect_check().times(3).returning(|_| Ok(true));
        let memo = AvailabilityMemo::new(Arc::new(checker_mock), TTL);

        memo.is_available("a-DRN001e").await.expect("lookup should be successful");
        memo.is_available("b-DRN001e").await.expect("lookup should be successful");
        assert_eq!(memo.len(), 2);

        tokio::time::advance(TTL).await;
        memo.is_available("c-DRN001e").await.expect("lookup should be successful");

        assert_eq!(memo.len(), 1);
    }
}
