use actix_web::web;
use remindly_domain::{Reminder, ReminderGroup};
use remindly_infra::RemindlyContext;

mod create_reminder;
mod delete_reminder;
mod get_reminder;
mod get_reminders;
pub mod send_reminders;
mod toggle_reminder;
mod update_reminder;

use create_reminder::create_reminder_controller;
use delete_reminder::delete_reminder_controller;
use get_reminder::get_reminder_controller;
use get_reminders::get_reminders_controller;
use toggle_reminder::toggle_reminder_controller;
use update_reminder::update_reminder_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/reminders", web::get().to(get_reminders_controller));
    cfg.route("/reminders", web::post().to(create_reminder_controller));
    cfg.route(
        "/reminders/{reminder_id}",
        web::get().to(get_reminder_controller),
    );
    cfg.route(
        "/reminders/{reminder_id}",
        web::put().to(update_reminder_controller),
    );
    cfg.route(
        "/reminders/{reminder_id}",
        web::delete().to(delete_reminder_controller),
    );
    cfg.route(
        "/reminders/{reminder_id}/toggle_active",
        web::patch().to(toggle_reminder_controller),
    );
}

/// The group a `Reminder` is linked to together with its member count
async fn find_reminder_group(
    ctx: &RemindlyContext,
    reminder: &Reminder,
) -> Option<(ReminderGroup, i64)> {
    let group = ctx.repos.groups.find(reminder.group_id.as_ref()?).await?;
    let members = ctx
        .repos
        .memberships
        .count_by_group(&group.id)
        .await
        .unwrap_or_default();
    Some((group, members))
}
