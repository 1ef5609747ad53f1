use std::{sync::Arc, time::Duration};

use chrono::NaiveDateTime;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::{
    application::ports::clock::Clock,
    infra::cron::CronSchedule,
    use_cases::reminder::{ReminderJob, ReminderOutcome},
};

/// Longest single timer sleep before the wall clock is read again.
const MAX_SLEEP: Duration = Duration::from_secs(60);

/// Fires the reminder job on a cron schedule for the life of the process.
pub struct ReminderScheduler {
    job: Arc<ReminderJob>,
    schedule: CronSchedule,
    clock: Arc<dyn Clock>,
}

impl ReminderScheduler {
    pub fn new(job: Arc<ReminderJob>, schedule: CronSchedule, clock: Arc<dyn Clock>) -> Self {
        Self {
            job,
            schedule,
            clock,
        }
    }

    pub fn next_fire(&self) -> Option<NaiveDateTime> {
        self.schedule.next_after(self.clock.now())
    }

    /// Starts one job run on its own task.
    pub fn fire(&self) -> JoinHandle<ReminderOutcome> {
        let job = Arc::clone(&self.job);
        tokio::spawn(async move { job.run().await })
    }

    pub async fn run(self) {
        info!(schedule = %self.schedule, "Reminder scheduler started");

        // Last slot that fired. Keeps an early timer wake-up from firing the
        // same slot twice.
        let mut cursor: Option<NaiveDateTime> = None;

        loop {
            let now = self.clock.now();
            let from = cursor.map_or(now, |last| last.max(now));
            let Some(next) = self.schedule.next_after(from) else {
                error!(schedule = %self.schedule, "Schedule has no upcoming fire time; stopping");
                return;
            };

            let wait = (next - now).to_std().unwrap_or_default();
            info!(next = %next, wait_secs = wait.as_secs(), "Next reminder run scheduled");
            self.sleep_until(next).await;

            info!(slot = %next, "Running scheduled reminder job");
            // Production does not observe the outcome; the job logs it.
            drop(self.fire());
            cursor = Some(next);
        }
    }

    /// Sleeps until the injected clock reads `slot` or later, rereading it at
    /// least every `MAX_SLEEP` so DST shifts and clock steps move the wake-up.
    async fn sleep_until(&self, slot: NaiveDateTime) {
        loop {
            let remaining = match (slot - self.clock.now()).to_std() {
                Ok(remaining) if !remaining.is_zero() => remaining,
                _ => return,
            };
            tokio::time::sleep(remaining.min(MAX_SLEEP)).await;
        }
    }
}
