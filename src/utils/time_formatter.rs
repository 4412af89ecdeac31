use crate::time::{ClockTime, CLOCK_TIME_NONE};
use chrono::TimeDelta;

/// Renders clock times for labels and tooltips.
pub trait TimeFormatter {
    /// Fixed-width `H:MM:SS.mmm` style text.
    fn format(&self, time: ClockTime) -> String;

    /// Human readable length, e.g. `1 hour, 2 minutes`.
    fn beautify(&self, time: ClockTime) -> String;
}

/// Default formatter used when the host does not provide one.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClockFormatter;

struct Parts {
    hours: i64,
    minutes: i64,
    seconds: i64,
    millis: i64,
}

fn split(time: ClockTime) -> Parts {
    let nanos = i64::try_from(time).unwrap_or(i64::MAX);
    let delta = TimeDelta::nanoseconds(nanos);
    Parts {
        hours: delta.num_hours(),
        minutes: delta.num_minutes() % 60,
        seconds: delta.num_seconds() % 60,
        millis: delta.num_milliseconds() % 1000,
    }
}

fn plural(count: i64, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

impl TimeFormatter for ClockFormatter {
    fn format(&self, time: ClockTime) -> String {
        if time == CLOCK_TIME_NONE {
            return "--:--:--.---".to_string();
        }
        let p = split(time);
        format!("{}:{:02}:{:02}.{:03}", p.hours, p.minutes, p.seconds, p.millis)
    }

    fn beautify(&self, time: ClockTime) -> String {
        if time == CLOCK_TIME_NONE {
            return "Unknown".to_string();
        }
        let p = split(time);
        let mut parts = Vec::new();
        if p.hours > 0 {
            parts.push(plural(p.hours, "hour", "hours"));
        }
        if p.minutes > 0 {
            parts.push(plural(p.minutes, "minute", "minutes"));
        }
        // No seconds next to hours.
        if p.hours == 0 && (p.seconds > 0 || parts.is_empty()) {
            parts.push(plural(p.seconds, "second", "seconds"));
        }
        parts.join(", ")
    }
}
