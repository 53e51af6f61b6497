//! Weekly digest statistics
//!
//! Pure interval-membership counters over a user's records. The freelancer
//! revenue figure is derived from task payment data over the current
//! calendar month rather than stubbed.

use chrono::{DateTime, Utc};
use worktrack_domain::utils::dates::{MonthWindow, WeekWindow};
use worktrack_domain::{Client, ClientStatus, Job, JobStatus, PaymentStatus, Task, TaskStatus};

/// Weekly activity counts for a job seeker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JobSeekerWeekStats {
    /// Applications with `appliedDate` inside the week
    pub applications_submitted: u32,
    /// Jobs with `interviewDate` inside the week
    pub interviews_scheduled: u32,
    /// Offers with `startDate` inside the week
    pub offers_starting: u32,
}

/// Compute job seeker digest counts for the given week
pub fn job_seeker_week_stats(jobs: &[Job], window: &WeekWindow) -> JobSeekerWeekStats {
    let applications_submitted =
        jobs.iter().filter(|job| window.contains(job.applied_date)).count() as u32;
    let interviews_scheduled = jobs
        .iter()
        .filter(|job| job.interview_date.is_some_and(|ts| window.contains(ts)))
        .count() as u32;
    let offers_starting = jobs
        .iter()
        .filter(|job| {
            job.status == JobStatus::Offer && job.start_date.is_some_and(|ts| window.contains(ts))
        })
        .count() as u32;

    JobSeekerWeekStats { applications_submitted, interviews_scheduled, offers_starting }
}

/// Weekly activity counts for a freelancer
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FreelancerWeekStats {
    /// Tasks with `completedDate` inside the week
    pub tasks_completed: u32,
    /// Open tasks whose due date is still ahead
    pub tasks_upcoming: u32,
    /// Clients currently in `active` status
    pub active_clients: u32,
    /// Paid task payments collected in the current calendar month
    pub revenue_this_month: f64,
}

/// Compute freelancer digest counts for the given week
pub fn freelancer_week_stats(
    tasks: &[Task],
    clients: &[Client],
    window: &WeekWindow,
    now: DateTime<Utc>,
) -> FreelancerWeekStats {
    let tasks_completed = tasks
        .iter()
        .filter(|task| task.completed_date.is_some_and(|ts| window.contains(ts)))
        .count() as u32;
    let tasks_upcoming = tasks
        .iter()
        .filter(|task| {
            !matches!(task.status, TaskStatus::Completed | TaskStatus::Cancelled)
                && task.due_date.is_some_and(|ts| ts > now)
        })
        .count() as u32;
    let active_clients =
        clients.iter().filter(|client| client.status == ClientStatus::Active).count() as u32;

    let month = MonthWindow::containing(now.date_naive());
    let revenue_this_month = tasks
        .iter()
        .filter(|task| {
            task.payment_status == PaymentStatus::Paid
                && task.completed_date.is_some_and(|ts| month.contains(ts))
        })
        .filter_map(|task| task.payment_amount)
        .sum();

    FreelancerWeekStats { tasks_completed, tasks_upcoming, active_clients, revenue_this_month }
}
