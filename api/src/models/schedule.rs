//! Scraper schedules and the form payload that creates/updates them.

use serde::{Deserialize, Serialize};

/// A recurring scraper run, as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: String,
    pub name: String,
    /// Id of the scraper source this schedule runs.
    pub source: String,
    pub cron_expr: String,
    pub enabled: bool,
    #[serde(default)]
    pub last_run_at: Option<String>,
    #[serde(default)]
    pub next_run_at: Option<String>,
}

/// Payload for creating or updating a schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleInput {
    pub name: String,
    pub source: String,
    pub cron_expr: String,
    pub enabled: bool,
}

impl ScheduleInput {
    /// Client-side checks before the payload is sent. The backend validates
    /// again; this only catches what a form can catch.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut problems = Vec::new();
        if self.name.trim().is_empty() {
            problems.push("name must not be empty".to_string());
        }
        if self.source.trim().is_empty() {
            problems.push("pick a scraper source".to_string());
        }
        let fields: Vec<&str> = self.cron_expr.split_whitespace().collect();
        if fields.len() != 5 {
            problems.push(format!(
                "cron expression needs 5 fields (minute hour day month weekday), got {}",
                fields.len()
            ));
        } else if !fields.iter().all(|f| is_cron_field(f)) {
            problems.push("cron expression contains invalid characters".to_string());
        }
        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }
}

fn is_cron_field(field: &str) -> bool {
    !field.is_empty()
        && field
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '*' | '/' | ',' | '-'))
}

impl From<&Schedule> for ScheduleInput {
    fn from(schedule: &Schedule) -> Self {
        Self {
            name: schedule.name.clone(),
            source: schedule.source.clone(),
            cron_expr: schedule.cron_expr.clone(),
            enabled: schedule.enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ScheduleInput {
        ScheduleInput {
            name: "Morning sweep".into(),
            source: "hotdeals".into(),
            cron_expr: "0 6 * * *".into(),
            enabled: true,
        }
    }

    #[test]
    fn a_complete_input_validates() {
        assert!(input().validate().is_ok());
    }

    #[test]
    fn blank_name_and_source_are_both_reported() {
        let bad = ScheduleInput {
            name: "  ".into(),
            source: String::new(),
            ..input()
        };
        let problems = bad.validate().unwrap_err();
        assert_eq!(problems.len(), 2);
    }

    #[test]
    fn cron_must_have_exactly_five_fields() {
        let short = ScheduleInput {
            cron_expr: "0 6 * *".into(),
            ..input()
        };
        assert!(short.validate().is_err());

        let long = ScheduleInput {
            cron_expr: "0 6 * * * *".into(),
            ..input()
        };
        assert!(long.validate().is_err());
    }

    #[test]
    fn cron_rejects_stray_characters() {
        let bad = ScheduleInput {
            cron_expr: "0 6 * * $".into(),
            ..input()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn steps_ranges_and_lists_are_accepted() {
        for expr in ["*/15 * * * *", "0 6-18 * * 1-5", "0 0 1,15 * mon"] {
            let ok = ScheduleInput {
                cron_expr: expr.into(),
                ..input()
            };
            assert!(ok.validate().is_ok(), "{expr} should validate");
        }
    }
}
