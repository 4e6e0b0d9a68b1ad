use std::time::Duration;

use komento_api::{EntityId, Time};

use crate::Store;

/// Cadence at which the rendering layer re-derives the labels below. The
/// refresh is read-only and scheduled between user events on the same
/// thread; it never mutates the model.
pub const LABEL_REFRESH_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Human "time ago" label for a creation timestamp: years (365.25-day
/// years), then days, hours, minutes, and "now" under a minute.
pub fn time_ago(created: Time, now: Time) -> String {
    fn ago(n: i64, unit: &str) -> String {
        let s = if n != 1 { "s" } else { "" };
        format!("{n} {unit}{s} ago")
    }

    let minutes = (now - created).num_minutes();
    if minutes < 1 {
        return String::from("now");
    }
    let hours = minutes / 60;
    let days = hours / 24;
    let years = (days as f64 / 365.25) as i64;

    if years >= 1 {
        ago(years, "year")
    } else if days >= 1 {
        ago(days, "day")
    } else if hours >= 1 {
        ago(hours, "hour")
    } else {
        ago(minutes, "minute")
    }
}

/// Display label per entity, in render order.
pub fn time_labels(store: &Store, now: Time) -> Vec<(EntityId, String)> {
    let mut labels = Vec::new();
    for c in &store.comments {
        labels.push((c.id, time_ago(c.created_at, now)));
        for r in &c.replies {
            labels.push((r.id, time_ago(r.created_at, now)));
        }
    }
    labels
}
