//! Notification email templates
//!
//! Pure entity → email rendering. Bodies are interpolated HTML; every
//! user-controlled field passes through [`escape`] before interpolation.

use chrono::{DateTime, Utc};
use worktrack_domain::{Client, Job, Task, UserAccount};

use crate::reminders::digest::{FreelancerWeekStats, JobSeekerWeekStats};

/// A rendered email ready for dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Minimal HTML entity escaping for interpolated fields
fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn greeting_name(user: &UserAccount) -> String {
    user.display_name.as_deref().map_or_else(|| "there".to_string(), escape)
}

fn long_date(ts: DateTime<Utc>) -> String {
    ts.format("%A, %B %-d, %Y").to_string()
}

fn footer(dashboard_url: &str) -> String {
    format!(
        r#"<p style="margin-top:24px"><a href="{url}">Open your dashboard</a></p>
<p style="color:#888;font-size:12px">You are receiving this because reminders are enabled in your Worktrack notification settings.</p>"#,
        url = escape(dashboard_url),
    )
}

/// Interview-tomorrow reminder for a job application
pub fn interview_reminder(job: &Job, user: &UserAccount, dashboard_url: &str) -> EmailMessage {
    let company = escape(&job.company);
    let position = escape(&job.position);
    let when = job.interview_date.map(long_date).unwrap_or_default();

    // Subjects are plain text, only the body is HTML-escaped
    let subject = format!("Interview tomorrow: {} at {}", job.position, job.company);
    let html = format!(
        r#"<div style="font-family:sans-serif;max-width:600px">
<h2>Your interview is tomorrow</h2>
<p>Hi {name},</p>
<p>You have an interview scheduled for <strong>{when}</strong>:</p>
<ul>
<li><strong>Company:</strong> {company}</li>
<li><strong>Position:</strong> {position}</li>
<li><strong>Location:</strong> {location}</li>
</ul>
<p>Good luck!</p>
{footer}
</div>"#,
        name = greeting_name(user),
        location = escape(&job.location),
        footer = footer(dashboard_url),
    );

    EmailMessage { to: user.email.clone(), subject, html }
}

/// Offer start-date reminder for a job application
pub fn offer_start_reminder(job: &Job, user: &UserAccount, dashboard_url: &str) -> EmailMessage {
    let company = escape(&job.company);
    let position = escape(&job.position);
    let when = job.start_date.map(long_date).unwrap_or_default();

    let subject = format!("You start tomorrow: {} at {}", job.position, job.company);
    let html = format!(
        r#"<div style="font-family:sans-serif;max-width:600px">
<h2>Your new role starts tomorrow</h2>
<p>Hi {name},</p>
<p>Your start date at <strong>{company}</strong> as <strong>{position}</strong> is <strong>{when}</strong>.</p>
<p>Congratulations, and have a great first day!</p>
{footer}
</div>"#,
        name = greeting_name(user),
        footer = footer(dashboard_url),
    );

    EmailMessage { to: user.email.clone(), subject, html }
}

/// Task due-tomorrow reminder; the owning client is required for context
pub fn task_deadline_reminder(
    task: &Task,
    client: &Client,
    user: &UserAccount,
    dashboard_url: &str,
) -> EmailMessage {
    let title = escape(&task.title);
    let client_name = escape(&client.name);
    let project = escape(&client.project);
    let when = task.due_date.map(long_date).unwrap_or_default();

    let subject = format!("Task due tomorrow: {}", task.title);
    let html = format!(
        r#"<div style="font-family:sans-serif;max-width:600px">
<h2>A task is due tomorrow</h2>
<p>Hi {name},</p>
<p><strong>{title}</strong> for {client_name} ({project}) is due on <strong>{when}</strong>.</p>
{footer}
</div>"#,
        name = greeting_name(user),
        footer = footer(dashboard_url),
    );

    EmailMessage { to: user.email.clone(), subject, html }
}

/// Weekly digest for a job seeker
pub fn job_seeker_digest(
    user: &UserAccount,
    stats: &JobSeekerWeekStats,
    dashboard_url: &str,
) -> EmailMessage {
    let subject = "Your week in job applications".to_string();
    let html = format!(
        r#"<div style="font-family:sans-serif;max-width:600px">
<h2>Your weekly summary</h2>
<p>Hi {name}, here is what happened this week:</p>
<ul>
<li><strong>{applications}</strong> applications submitted</li>
<li><strong>{interviews}</strong> interviews scheduled</li>
<li><strong>{offers}</strong> offers starting</li>
</ul>
{footer}
</div>"#,
        name = greeting_name(user),
        applications = stats.applications_submitted,
        interviews = stats.interviews_scheduled,
        offers = stats.offers_starting,
        footer = footer(dashboard_url),
    );

    EmailMessage { to: user.email.clone(), subject, html }
}

/// Weekly digest for a freelancer
pub fn freelancer_digest(
    user: &UserAccount,
    stats: &FreelancerWeekStats,
    dashboard_url: &str,
) -> EmailMessage {
    let subject = "Your week in client work".to_string();
    let html = format!(
        r#"<div style="font-family:sans-serif;max-width:600px">
<h2>Your weekly summary</h2>
<p>Hi {name}, here is what happened this week:</p>
<ul>
<li><strong>{completed}</strong> tasks completed</li>
<li><strong>{upcoming}</strong> tasks coming up</li>
<li><strong>{clients}</strong> active clients</li>
<li><strong>${revenue:.2}</strong> collected this month</li>
</ul>
{footer}
</div>"#,
        name = greeting_name(user),
        completed = stats.tasks_completed,
        upcoming = stats.tasks_upcoming,
        clients = stats.active_clients,
        revenue = stats.revenue_this_month,
        footer = footer(dashboard_url),
    );

    EmailMessage { to: user.email.clone(), subject, html }
}
