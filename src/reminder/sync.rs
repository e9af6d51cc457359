use anyhow::Result;
use tracing::{debug, info, warn};

use crate::{
    notify::{NotificationRequest, NotificationService},
    store::{IndexStore, LAST_INDEX_KEY},
    utils::clock::Clock,
    words::{
        day_index::{compute_day_index, EPOCH},
        WordEntry, WordList,
    },
};

/// Result of a user-triggered enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnableOutcome {
    Enabled,
    PermissionDenied,
}

/// Keeps the outstanding reminder in step with the calendar day.
///
/// The stored index only advances after the schedule call went through. An
/// interruption between the two leaves a mismatch that the next
/// [sync_if_day_changed](Self::sync_if_day_changed) repairs by rescheduling,
/// which is idempotent because scheduling replaces rather than accumulates.
pub struct ReminderSync<S, N> {
    words: WordList,
    store: S,
    notifier: N,
    clock: Box<dyn Clock>,
}

impl<S: IndexStore, N: NotificationService> ReminderSync<S, N> {
    pub fn new(words: WordList, store: S, notifier: N, clock: Box<dyn Clock>) -> Self {
        Self {
            words,
            store,
            notifier,
            clock,
        }
    }

    /// Index of today's word. Recomputed from the wall clock on every call so
    /// a date or timezone change while the process was away corrects itself.
    pub fn current_index(&self) -> Result<usize> {
        compute_day_index(self.clock.now().date_naive(), EPOCH, self.words.len())
    }

    pub fn current_word(&self) -> Result<&WordEntry> {
        Ok(self.words.get(self.current_index()?))
    }

    async fn last_synced_index(&self) -> Result<Option<usize>> {
        let Some(value) = self.store.get(LAST_INDEX_KEY).await? else {
            return Ok(None);
        };
        match value.parse::<usize>() {
            Ok(v) => Ok(Some(v)),
            Err(e) => {
                warn!("Stored index {value:?} is not a number: {e}");
                Ok(None)
            }
        }
    }

    async fn schedule_and_persist(&self, index: usize) -> Result<()> {
        let word = self.words.get(index);
        self.notifier
            .schedule_repeating(NotificationRequest::hourly_word(&word.word))
            .await?;
        // Persist strictly after the schedule landed, see the type docs.
        self.store.set(LAST_INDEX_KEY, &index.to_string()).await?;
        Ok(())
    }

    /// Reconciles the stored index with today's. Invoked on every activation;
    /// when the day has not changed nothing is scheduled and nothing written,
    /// so the hourly timer is never reset without cause.
    pub async fn sync_if_day_changed(&self) -> Result<()> {
        let current = self.current_index()?;
        let last = self.last_synced_index().await?;
        if last == Some(current) {
            debug!("Index {current} already synced");
            return Ok(());
        }
        info!("Day rolled over to index {current} (last synced {last:?})");
        self.schedule_and_persist(current).await
    }

    /// Turns the hourly reminder on. Always reschedules, even when today's
    /// index is already synced: the user asked explicitly.
    pub async fn enable(&self) -> Result<EnableOutcome> {
        if !self.notifier.request_permission().await? {
            info!("Notification permission denied");
            return Ok(EnableOutcome::PermissionDenied);
        }
        self.schedule_and_persist(self.current_index()?).await?;
        Ok(EnableOutcome::Enabled)
    }

    /// Turns the reminder off. The stored index stays as is, so the next
    /// day-change sync fires no earlier than the next rollover.
    pub async fn disable(&self) -> Result<()> {
        self.notifier.cancel_all().await
    }
}
