use crate::reminder::send_reminders::send_reminders;
use actix_web::rt::time::{interval_at, Instant};
use remindly_infra::RemindlyContext;
use std::time::Duration;
use tracing::info;

/// Seconds until `secs_before_min` seconds before the next whole minute
pub fn get_start_delay(now_ts: usize, secs_before_min: usize) -> usize {
    let secs_to_next_minute = 60 - (now_ts / 1000) % 60;
    if secs_to_next_minute > secs_before_min {
        secs_to_next_minute - secs_before_min
    } else {
        secs_to_next_minute + (60 - secs_before_min)
    }
}

pub fn start_send_reminders_job(ctx: RemindlyContext) {
    let period = Duration::from_secs(ctx.config.send_reminders_interval_secs.max(1));
    info!("Sending reminders every {} seconds", period.as_secs());

    actix_web::rt::spawn(async move {
        let now = ctx.sys.get_timestamp_millis();
        let secs_to_next_run = get_start_delay(now as usize, 0);
        let start = Instant::now() + Duration::from_secs(secs_to_next_run as u64);

        let mut interval = interval_at(start, period);
        loop {
            interval.tick().await;
            send_reminders(&ctx).await;
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_delay_works() {
        assert_eq!(get_start_delay(50 * 1000, 5), 5);
        assert_eq!(get_start_delay(50 * 1000, 10), 60);
        assert_eq!(get_start_delay(50 * 1000, 15), 55);
        assert_eq!(get_start_delay(60 * 1000, 60), 60);
        assert_eq!(get_start_delay(60 * 1000, 10), 50);
        assert_eq!(get_start_delay(59 * 1000, 0), 1);
        assert_eq!(get_start_delay(59 * 1000, 1), 60);
    }
}
