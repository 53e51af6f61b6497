//! Reminder processors and orchestrator
//!
//! Four batch processors scan the document store, apply calendar-day
//! proximity predicates, deduplicate against the sent-reminder ledger, and
//! dispatch templated emails:
//!
//! - interview: jobs in `interview` status whose interview is tomorrow
//! - offer: jobs in `offer` status whose start date is tomorrow
//! - task: any task due tomorrow
//! - weekly: one digest per opted-in user per calendar week
//!
//! Processors run strictly sequentially and never fail the run: a failed
//! collection scan logs an error and yields the count accumulated so far; a
//! failed single entity logs a warning and the scan continues. An email
//! rejection writes no ledger record, so the entity stays eligible on the
//! next run.

pub mod digest;
pub mod ports;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, error, info, warn};
use worktrack_domain::utils::dates::{is_tomorrow, WeekWindow};
use worktrack_domain::{
    Job, JobStatus, ProcessedCounts, ReminderKind, ReminderRecord, Result, Task, UserPreferences,
    UserType,
};

use crate::notify::ports::EmailSender;
use crate::notify::templates;
use crate::reminders::ports::Clock;
use crate::store::ports::{
    ClientRepository, JobRepository, PreferencesRepository, ReminderLedger, TaskRepository,
    UserRepository,
};

/// Dependencies injected into [`ReminderEngine`].
///
/// Constructed once per process and wired explicitly; the engine never
/// reaches for ambient globals.
pub struct ReminderDeps {
    pub jobs: Arc<dyn JobRepository>,
    pub clients: Arc<dyn ClientRepository>,
    pub tasks: Arc<dyn TaskRepository>,
    pub preferences: Arc<dyn PreferencesRepository>,
    pub users: Arc<dyn UserRepository>,
    pub ledger: Arc<dyn ReminderLedger>,
    pub mailer: Arc<dyn EmailSender>,
    pub clock: Arc<dyn Clock>,
}

/// Reminder batch engine: four processors plus the aggregating orchestrator
pub struct ReminderEngine {
    jobs: Arc<dyn JobRepository>,
    clients: Arc<dyn ClientRepository>,
    tasks: Arc<dyn TaskRepository>,
    preferences: Arc<dyn PreferencesRepository>,
    users: Arc<dyn UserRepository>,
    ledger: Arc<dyn ReminderLedger>,
    mailer: Arc<dyn EmailSender>,
    clock: Arc<dyn Clock>,
    dashboard_url: String,
}

impl ReminderEngine {
    /// Create a new engine over the given ports
    pub fn new(deps: ReminderDeps, dashboard_url: impl Into<String>) -> Self {
        let ReminderDeps { jobs, clients, tasks, preferences, users, ledger, mailer, clock } = deps;
        Self {
            jobs,
            clients,
            tasks,
            preferences,
            users,
            ledger,
            mailer,
            clock,
            dashboard_url: dashboard_url.into(),
        }
    }

    /// Run all four processors sequentially and aggregate their counts.
    ///
    /// Never short-circuits: a processor that fails internally contributes
    /// its partial count and its siblings still run.
    pub async fn process_all(&self) -> ProcessedCounts {
        info!("starting reminder run");

        let interviews = self.process_interview_reminders().await;
        let offers = self.process_offer_reminders().await;
        let tasks = self.process_task_reminders().await;
        let digests = self.process_weekly_digests().await;

        let counts = ProcessedCounts { interviews, offers, tasks, digests };
        info!(interviews, offers, tasks, digests, "reminder run completed");
        counts
    }

    /// Scan jobs in `interview` status and remind owners of interviews
    /// happening tomorrow. Returns the number of emails sent.
    pub async fn process_interview_reminders(&self) -> u32 {
        let jobs = match self.jobs.list_by_status(JobStatus::Interview).await {
            Ok(jobs) => jobs,
            Err(err) => {
                error!(error = %err, "interview reminder scan failed");
                return 0;
            }
        };

        let today = self.clock.today();
        let mut sent = 0u32;
        for job in jobs {
            let Some(when) = job.interview_date else { continue };
            if !is_tomorrow(when, today) {
                continue;
            }
            match self.remind_for_job(&job, ReminderKind::Interview, when).await {
                Ok(true) => sent += 1,
                Ok(false) => {}
                Err(err) => {
                    warn!(job_id = %job.id, error = %err, "interview reminder failed; continuing")
                }
            }
        }

        debug!(sent, "interview reminder pass completed");
        sent
    }

    /// Scan jobs in `offer` status and remind owners of start dates
    /// falling tomorrow. Returns the number of emails sent.
    pub async fn process_offer_reminders(&self) -> u32 {
        let jobs = match self.jobs.list_by_status(JobStatus::Offer).await {
            Ok(jobs) => jobs,
            Err(err) => {
                error!(error = %err, "offer reminder scan failed");
                return 0;
            }
        };

        let today = self.clock.today();
        let mut sent = 0u32;
        for job in jobs {
            let Some(when) = job.start_date else { continue };
            if !is_tomorrow(when, today) {
                continue;
            }
            match self.remind_for_job(&job, ReminderKind::Offer, when).await {
                Ok(true) => sent += 1,
                Ok(false) => {}
                Err(err) => {
                    warn!(job_id = %job.id, error = %err, "offer reminder failed; continuing")
                }
            }
        }

        debug!(sent, "offer reminder pass completed");
        sent
    }

    /// Scan every task (no status filter) and remind owners of due dates
    /// falling tomorrow. Returns the number of emails sent.
    pub async fn process_task_reminders(&self) -> u32 {
        let tasks = match self.tasks.list_all().await {
            Ok(tasks) => tasks,
            Err(err) => {
                error!(error = %err, "task reminder scan failed");
                return 0;
            }
        };

        let today = self.clock.today();
        let mut sent = 0u32;
        for task in tasks {
            let Some(due) = task.due_date else { continue };
            if !is_tomorrow(due, today) {
                continue;
            }
            match self.remind_for_task(&task, due).await {
                Ok(true) => sent += 1,
                Ok(false) => {}
                Err(err) => {
                    warn!(task_id = %task.id, error = %err, "task reminder failed; continuing")
                }
            }
        }

        debug!(sent, "task reminder pass completed");
        sent
    }

    /// Send at most one digest per opted-in user per calendar week.
    /// Returns the number of digests sent.
    pub async fn process_weekly_digests(&self) -> u32 {
        let all_prefs = match self.preferences.list_all().await {
            Ok(prefs) => prefs,
            Err(err) => {
                error!(error = %err, "weekly digest scan failed");
                return 0;
            }
        };

        let now = self.clock.now();
        let window = WeekWindow::containing(now.date_naive());
        let mut sent = 0u32;
        for prefs in all_prefs {
            if !prefs.notifications.weekly_digest {
                continue;
            }
            match self.send_weekly_digest(&prefs, now, &window).await {
                Ok(true) => sent += 1,
                Ok(false) => {}
                Err(err) => {
                    warn!(user_id = %prefs.user_id, error = %err, "weekly digest failed; continuing")
                }
            }
        }

        debug!(sent, "weekly digest pass completed");
        sent
    }

    /// Shared interview/offer path: preference gate, ledger dedup, send,
    /// conditional ledger append. `Ok(false)` means skipped or not sent.
    async fn remind_for_job(
        &self,
        job: &Job,
        kind: ReminderKind,
        scheduled_for: DateTime<Utc>,
    ) -> Result<bool> {
        let Some(prefs) = self.preferences.get(&job.user_id).await? else {
            return Ok(false);
        };
        let wanted = match kind {
            ReminderKind::Interview => prefs.notifications.interview_reminders,
            ReminderKind::Offer => prefs.notifications.offer_deadline_reminders,
            ReminderKind::Task | ReminderKind::Weekly => false,
        };
        if !wanted {
            return Ok(false);
        }
        let Some(user) = self.users.get(&job.user_id).await? else {
            return Ok(false);
        };
        if self.ledger.was_sent(&job.user_id, kind, &job.id).await? {
            return Ok(false);
        }

        let message = match kind {
            ReminderKind::Interview => {
                templates::interview_reminder(job, &user, &self.dashboard_url)
            }
            _ => templates::offer_start_reminder(job, &user, &self.dashboard_url),
        };
        if let Err(err) = self.mailer.send(&message).await {
            warn!(job_id = %job.id, error = %err, "reminder email rejected; eligible next run");
            return Ok(false);
        }

        self.append_ledger(&job.user_id, kind, job.id.clone(), scheduled_for).await?;
        Ok(true)
    }

    /// Task path: additionally resolves the owning client; a deleted client
    /// skips the task silently.
    async fn remind_for_task(&self, task: &Task, due: DateTime<Utc>) -> Result<bool> {
        let Some(prefs) = self.preferences.get(&task.user_id).await? else {
            return Ok(false);
        };
        if !prefs.notifications.deadline_reminders {
            return Ok(false);
        }
        let Some(user) = self.users.get(&task.user_id).await? else {
            return Ok(false);
        };
        let Some(client) = self.clients.get(&task.client_id).await? else {
            debug!(task_id = %task.id, client_id = %task.client_id, "client missing; skipping task");
            return Ok(false);
        };
        if self.ledger.was_sent(&task.user_id, ReminderKind::Task, &task.id).await? {
            return Ok(false);
        }

        let message = templates::task_deadline_reminder(task, &client, &user, &self.dashboard_url);
        if let Err(err) = self.mailer.send(&message).await {
            warn!(task_id = %task.id, error = %err, "reminder email rejected; eligible next run");
            return Ok(false);
        }

        self.append_ledger(&task.user_id, ReminderKind::Task, task.id.clone(), due).await?;
        Ok(true)
    }

    /// Digest path for one user: week-window dedup, stats, send, append.
    async fn send_weekly_digest(
        &self,
        prefs: &UserPreferences,
        now: DateTime<Utc>,
        window: &WeekWindow,
    ) -> Result<bool> {
        if self.ledger.weekly_sent_within(&prefs.user_id, window).await? {
            return Ok(false);
        }
        let Some(user) = self.users.get(&prefs.user_id).await? else {
            return Ok(false);
        };

        let message = match prefs.user_type {
            UserType::JobSeeker => {
                let jobs = self.jobs.list_for_user(&prefs.user_id).await?;
                let stats = digest::job_seeker_week_stats(&jobs, window);
                templates::job_seeker_digest(&user, &stats, &self.dashboard_url)
            }
            UserType::Freelancer => {
                let tasks = self.tasks.list_for_user(&prefs.user_id).await?;
                let clients = self.clients.list_for_user(&prefs.user_id).await?;
                let stats = digest::freelancer_week_stats(&tasks, &clients, window, now);
                templates::freelancer_digest(&user, &stats, &self.dashboard_url)
            }
        };
        if let Err(err) = self.mailer.send(&message).await {
            warn!(user_id = %prefs.user_id, error = %err, "digest email rejected; eligible next run");
            return Ok(false);
        }

        let entity_id = format!("weekly-digest-{}", now.date_naive());
        self.append_ledger(&prefs.user_id, ReminderKind::Weekly, entity_id, now).await?;
        Ok(true)
    }

    async fn append_ledger(
        &self,
        user_id: &str,
        kind: ReminderKind,
        entity_id: String,
        scheduled_for: DateTime<Utc>,
    ) -> Result<()> {
        let record = ReminderRecord {
            user_id: user_id.to_string(),
            kind,
            entity_id,
            scheduled_for,
            sent: true,
            sent_at: Some(self.clock.now()),
        };
        if !self.ledger.record_sent(&record).await? {
            // The insert-if-absent lost a race with a concurrent run; the
            // email went out but the ledger row already existed.
            warn!(user_id, kind = kind.as_str(), "ledger record already present");
        }
        Ok(())
    }
}
