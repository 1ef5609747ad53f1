//! Five-field cron expressions (`minute hour day-of-month month day-of-week`).
//!
//! Each field accepts `*`, single values, comma lists, ranges `a-b` and steps
//! (`*/n`, `a-b/n`, `a/n`). Day-of-week runs 0-7 with both 0 and 7 meaning
//! Sunday. When day-of-month and day-of-week are both restricted a day
//! matches if either does, as in classic cron.

use std::fmt;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use thiserror::Error;

// Long enough to reach the next Feb 29 across a skipped century leap year.
const MAX_LOOKAHEAD_DAYS: u64 = 366 * 9;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CronError {
    #[error("expected 5 fields, found {0}")]
    FieldCount(usize),

    #[error("invalid {field} value `{value}`")]
    InvalidValue { field: &'static str, value: String },

    #[error("{field} value {value} is outside {min}-{max}")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("invalid {field} range `{value}`")]
    InvalidRange { field: &'static str, value: String },

    #[error("invalid {field} step `{value}`")]
    InvalidStep { field: &'static str, value: String },
}

struct FieldSpec {
    name: &'static str,
    min: u32,
    max: u32,
}

const MINUTE: FieldSpec = FieldSpec {
    name: "minute",
    min: 0,
    max: 59,
};
const HOUR: FieldSpec = FieldSpec {
    name: "hour",
    min: 0,
    max: 23,
};
const DAY_OF_MONTH: FieldSpec = FieldSpec {
    name: "day-of-month",
    min: 1,
    max: 31,
};
const MONTH: FieldSpec = FieldSpec {
    name: "month",
    min: 1,
    max: 12,
};
const DAY_OF_WEEK: FieldSpec = FieldSpec {
    name: "day-of-week",
    min: 0,
    max: 7,
};

/// Bitset of allowed values for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FieldSet(u64);

impl FieldSet {
    fn contains(self, value: u32) -> bool {
        value < 64 && self.0 & (1 << value) != 0
    }

    fn iter(self) -> impl Iterator<Item = u32> {
        (0..64).filter(move |v| self.contains(*v))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CronSchedule {
    expr: String,
    minutes: FieldSet,
    hours: FieldSet,
    days_of_month: FieldSet,
    months: FieldSet,
    days_of_week: FieldSet,
    any_day_of_month: bool,
    any_day_of_week: bool,
}

impl CronSchedule {
    pub fn parse(expr: &str) -> Result<Self, CronError> {
        let fields: Vec<&str> = expr.split_whitespace().collect();
        let [minute, hour, dom, month, dow] = fields[..] else {
            return Err(CronError::FieldCount(fields.len()));
        };

        let mut days_of_week = parse_field(dow, &DAY_OF_WEEK)?;
        if days_of_week.contains(7) {
            days_of_week = FieldSet((days_of_week.0 | 1) & !(1 << 7));
        }

        Ok(Self {
            expr: fields.join(" "),
            minutes: parse_field(minute, &MINUTE)?,
            hours: parse_field(hour, &HOUR)?,
            days_of_month: parse_field(dom, &DAY_OF_MONTH)?,
            months: parse_field(month, &MONTH)?,
            days_of_week,
            any_day_of_month: dom.starts_with('*'),
            any_day_of_week: dow.starts_with('*'),
        })
    }

    /// The first matching minute strictly after `after`.
    pub fn next_after(&self, after: NaiveDateTime) -> Option<NaiveDateTime> {
        let start = after
            .with_second(0)?
            .with_nanosecond(0)?
            .checked_add_signed(TimeDelta::minutes(1))?;
        let (start_hour, start_minute) = (start.hour(), start.minute());

        for offset in 0..=MAX_LOOKAHEAD_DAYS {
            let date = start.date().checked_add_days(Days::new(offset))?;
            if !self.day_matches(date) {
                continue;
            }
            let first_day = offset == 0;
            for hour in self.hours.iter() {
                if first_day && hour < start_hour {
                    continue;
                }
                for minute in self.minutes.iter() {
                    if first_day && hour == start_hour && minute < start_minute {
                        continue;
                    }
                    return date.and_hms_opt(hour, minute, 0);
                }
            }
        }
        None
    }

    fn day_matches(&self, date: NaiveDate) -> bool {
        if !self.months.contains(date.month()) {
            return false;
        }
        let dom = self.days_of_month.contains(date.day());
        let dow = self
            .days_of_week
            .contains(date.weekday().num_days_from_sunday());
        match (self.any_day_of_month, self.any_day_of_week) {
            (true, true) => true,
            (true, false) => dow,
            (false, true) => dom,
            (false, false) => dom || dow,
        }
    }
}

impl fmt::Display for CronSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expr)
    }
}

fn parse_field(raw: &str, spec: &FieldSpec) -> Result<FieldSet, CronError> {
    let mut set = 0u64;
    for part in raw.split(',') {
        let (range, step) = match part.split_once('/') {
            Some((range, step)) => (range, Some(parse_step(step, spec)?)),
            None => (part, None),
        };

        let (lo, hi) = if range == "*" {
            (spec.min, spec.max)
        } else if let Some((a, b)) = range.split_once('-') {
            let (lo, hi) = (parse_value(a, spec)?, parse_value(b, spec)?);
            if lo > hi {
                return Err(CronError::InvalidRange {
                    field: spec.name,
                    value: range.to_string(),
                });
            }
            (lo, hi)
        } else {
            let value = parse_value(range, spec)?;
            match step {
                Some(_) => (value, spec.max),
                None => (value, value),
            }
        };

        for value in (lo..=hi).step_by(step.unwrap_or(1)) {
            set |= 1 << value;
        }
    }
    Ok(FieldSet(set))
}

fn parse_value(raw: &str, spec: &FieldSpec) -> Result<u32, CronError> {
    let value: u32 = raw.parse().map_err(|_| CronError::InvalidValue {
        field: spec.name,
        value: raw.to_string(),
    })?;
    if value < spec.min || value > spec.max {
        return Err(CronError::OutOfRange {
            field: spec.name,
            value,
            min: spec.min,
            max: spec.max,
        });
    }
    Ok(value)
}

fn parse_step(raw: &str, spec: &FieldSpec) -> Result<usize, CronError> {
    match raw.parse::<usize>() {
        Ok(step) if step > 0 => Ok(step),
        _ => Err(CronError::InvalidStep {
            field: spec.name,
            value: raw.to_string(),
        }),
    }
}
