// SPDX-FileCopyrightText: 2026 Schedview Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use colored::Colorize;
use jiff::civil::Time;

use schedview_api::ScheduleSummary;

/// Renders schedule summaries as terminal cards.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScheduleFormatter {
    /// Include per-section detail lines.
    pub detailed: bool,
}

impl ScheduleFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_details(mut self, detailed: bool) -> Self {
        self.detailed = detailed;
        self
    }

    pub fn format<'a>(&self, schedule: &'a ScheduleSummary, favorited: bool) -> Display<'a> {
        Display {
            schedule,
            favorited,
            detailed: self.detailed,
        }
    }
}

/// One schedule card, ready to print.
#[derive(Debug)]
pub struct Display<'a> {
    schedule: &'a ScheduleSummary,
    favorited: bool,
    detailed: bool,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.schedule;

        let star = if self.favorited {
            "★".yellow().to_string()
        } else {
            "☆".dimmed().to_string()
        };
        let header = format!("#{}", s.schedule_id).bold();
        let rating = match s.total_instructor_score {
            Some(score) => format!("{score:.1}/5.0"),
            None => "unrated".to_string(),
        };

        writeln!(f, "{star} {header}  {}", s.campus_pattern.cyan())?;
        writeln!(
            f,
            "  {} credits, {} sections, instructors {rating}",
            s.total_credits, s.num_sections,
        )?;
        writeln!(
            f,
            "  {}  {} - {}",
            meeting_days(s),
            format_time(s.earliest_start),
            format_time(s.latest_end),
        )?;

        if self.detailed {
            for section in &s.sections {
                let instructor = section.instructor_name.as_deref().unwrap_or("Staff");
                writeln!(
                    f,
                    "  {} {}-{}: {} ({} cr, {instructor})",
                    section.subject_code,
                    section.course_number,
                    section.section_code,
                    section.course_title,
                    section.credits,
                )?;
            }
        }

        Ok(())
    }
}

/// Formats a civil time in 12-hour clock notation, e.g. "9:30 AM".
pub fn format_time(time: Time) -> String {
    let (hour, suffix) = match time.hour() {
        0 => (12, "AM"),
        h @ 1..=11 => (h, "AM"),
        12 => (12, "PM"),
        h => (h - 12, "PM"),
    };
    format!("{hour}:{:02} {suffix}", time.minute())
}

fn meeting_days(s: &ScheduleSummary) -> String {
    let days = [
        (s.meets_mon, "Mon"),
        (s.meets_tue, "Tue"),
        (s.meets_wed, "Wed"),
        (s.meets_thu, "Thu"),
        (s.meets_fri, "Fri"),
        (s.meets_sat, "Sat"),
    ];
    let named: Vec<&str> = days
        .into_iter()
        .filter_map(|(meets, name)| meets.then_some(name))
        .collect();
    if named.is_empty() {
        "No meetings".to_string()
    } else {
        named.join("/")
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::time;

    use super::*;

    #[test]
    fn format_time_uses_twelve_hour_clock() {
        assert_eq!(format_time(time(0, 5, 0, 0)), "12:05 AM");
        assert_eq!(format_time(time(9, 30, 0, 0)), "9:30 AM");
        assert_eq!(format_time(time(12, 0, 0, 0)), "12:00 PM");
        assert_eq!(format_time(time(17, 45, 0, 0)), "5:45 PM");
    }
}
