// src/commands/date/mod.rs
use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};

use crate::commands::{Command, CommandContext};
use crate::output::OutputLine;

pub struct DateCommand;

const WEEKDAYS: [&str; 7] = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];
const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September", "October", "November",
    "December",
];

impl Command for DateCommand {
    fn name(&self) -> &'static str {
        "date"
    }

    fn description(&self) -> &'static str {
        "Print the current date and time"
    }

    fn usage(&self) -> &'static str {
        "date [-u] [-I] [-R] [-d STRING] [+FORMAT]"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        let args = &ctx.args;
        if ctx.wants_help() {
            return vec![
                OutputLine::output(format!("Usage: {}", self.usage())),
                OutputLine::output("  -u          print Coordinated Universal Time"),
                OutputLine::output("  -I          output date/time in ISO 8601 format"),
                OutputLine::output("  -R          output date and time in RFC 5322 format"),
                OutputLine::output("  -d STRING   display time described by STRING, not 'now'"),
            ];
        }

        let mut utc = false;
        let mut iso = false;
        let mut rfc = false;
        let mut date_str: Option<&str> = None;
        let mut format_str: Option<&str> = None;
        let mut i = 0;

        while i < args.len() {
            let a = args[i].as_str();
            match a {
                "-u" | "--utc" => utc = true,
                "-I" | "--iso-8601" => iso = true,
                "-R" | "--rfc-email" => rfc = true,
                "-d" | "--date" => {
                    i += 1;
                    match args.get(i) {
                        Some(value) => date_str = Some(value.as_str()),
                        None => return vec![OutputLine::error("date: option '-d' requires an argument")],
                    }
                }
                _ if a.starts_with("--date=") => date_str = Some(&a[7..]),
                _ if a.starts_with('+') => format_str = Some(&a[1..]),
                _ if a.starts_with("--") => {
                    return vec![OutputLine::error(format!("date: unrecognized option '{}'", a))]
                }
                _ => return vec![OutputLine::error(format!("date: invalid date '{}'", a))],
            }
            i += 1;
        }

        let now_utc = ctx.now.with_timezone(&Utc);
        let dt_utc = match date_str {
            Some(ds) => match parse_date_string(ds, now_utc) {
                Some(dt) => dt,
                None => return vec![OutputLine::error(format!("date: invalid date '{}'", ds))],
            },
            None => now_utc,
        };
        let local: DateTime<Local> = dt_utc.with_timezone(&Local);

        let output = match (iso, rfc, format_str) {
            (true, _, _) if utc => dt_utc.format("%Y-%m-%dT%H:%M:%S+00:00").to_string(),
            (true, _, _) => local.format("%Y-%m-%dT%H:%M:%S%:z").to_string(),
            (_, true, _) if utc => dt_utc.format("%a, %d %b %Y %H:%M:%S +0000").to_string(),
            (_, true, _) => local.format("%a, %d %b %Y %H:%M:%S %z").to_string(),
            (_, _, Some(fmt)) if utc => format_date(&dt_utc, fmt),
            (_, _, Some(fmt)) => format_date(&local, fmt),
            _ if utc => dt_utc.format("%a %b %e %H:%M:%S UTC %Y").to_string(),
            _ => local.format("%a %b %e %H:%M:%S %Z %Y").to_string(),
        };

        output.split('\n').map(OutputLine::output).collect()
    }
}

fn local_midnight(date: NaiveDate) -> Option<DateTime<Utc>> {
    let ndt = date.and_hms_opt(0, 0, 0)?;
    Local.from_local_datetime(&ndt).single().map(|dt| dt.with_timezone(&Utc))
}

fn parse_date_string(s: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let s = s.trim();
    let today = now.with_timezone(&Local).date_naive();
    match s.to_lowercase().as_str() {
        "now" => return Some(now),
        "today" => return local_midnight(today),
        "yesterday" => return local_midnight(today - Duration::days(1)),
        "tomorrow" => return local_midnight(today + Duration::days(1)),
        _ => {}
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Local.from_local_datetime(&ndt).single().map(|dt| dt.with_timezone(&Utc));
    }
    if let Ok(nd) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return local_midnight(nd);
    }
    // @1700000000 形式的时间戳
    let ts = s.strip_prefix('@').unwrap_or(s).parse::<i64>().ok()?;
    DateTime::from_timestamp(ts, 0)
}

/// Render a `+FORMAT` string. Unknown specifiers are copied through, so a
/// malformed format never fails.
fn format_date<Tz: TimeZone>(dt: &DateTime<Tz>, fmt: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let mut result = String::new();
    let mut chars = fmt.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            result.push(c);
            continue;
        }
        let Some(spec) = chars.next() else {
            result.push('%');
            break;
        };
        let hour12 = match dt.hour() % 12 {
            0 => 12,
            h => h,
        };
        let weekday = WEEKDAYS[dt.weekday().num_days_from_sunday() as usize];
        let month = MONTHS[dt.month0() as usize];
        match spec {
            'Y' => result.push_str(&format!("{:04}", dt.year())),
            'y' => result.push_str(&format!("{:02}", dt.year() % 100)),
            'm' => result.push_str(&format!("{:02}", dt.month())),
            'd' => result.push_str(&format!("{:02}", dt.day())),
            'e' => result.push_str(&format!("{:2}", dt.day())),
            'H' => result.push_str(&format!("{:02}", dt.hour())),
            'I' => result.push_str(&format!("{:02}", hour12)),
            'M' => result.push_str(&format!("{:02}", dt.minute())),
            'S' => result.push_str(&format!("{:02}", dt.second())),
            'F' => result.push_str(&format!("{:04}-{:02}-{:02}", dt.year(), dt.month(), dt.day())),
            'T' => result.push_str(&format!("{:02}:{:02}:{:02}", dt.hour(), dt.minute(), dt.second())),
            'R' => result.push_str(&format!("{:02}:{:02}", dt.hour(), dt.minute())),
            'p' => result.push_str(if dt.hour() < 12 { "AM" } else { "PM" }),
            'a' => result.push_str(&weekday[..3]),
            'A' => result.push_str(weekday),
            'b' | 'h' => result.push_str(&month[..3]),
            'B' => result.push_str(month),
            'j' => result.push_str(&format!("{:03}", dt.ordinal())),
            's' => result.push_str(&dt.timestamp().to_string()),
            'u' => result.push_str(&dt.weekday().number_from_monday().to_string()),
            'w' => result.push_str(&dt.weekday().num_days_from_sunday().to_string()),
            'Z' => result.push_str(&dt.offset().to_string()),
            'z' => result.push_str(&dt.format("%z").to_string()),
            'n' => result.push('\n'),
            't' => result.push('\t'),
            '%' => result.push('%'),
            other => {
                result.push('%');
                result.push(other);
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::{texts, Fixture};

    #[test]
    fn test_date_uses_session_clock() {
        let mut fx = Fixture::new();
        assert_eq!(texts(&fx.run(&DateCommand, &["+%Y-%m-%d %H:%M"])), vec!["2024-03-01 10:35"]);
    }

    #[test]
    fn test_date_names() {
        let mut fx = Fixture::new();
        assert_eq!(texts(&fx.run(&DateCommand, &["+%a %A %b %B"])), vec!["Fri Friday Mar March"]);
        assert_eq!(texts(&fx.run(&DateCommand, &["+%I%p %j"])), vec!["10AM 061"]);
    }

    #[test]
    fn test_date_percent_and_unknown() {
        let mut fx = Fixture::new();
        assert_eq!(texts(&fx.run(&DateCommand, &["+%% %Q"])), vec!["% %Q"]);
        assert_eq!(texts(&fx.run(&DateCommand, &["+%Y%n%m"])), vec!["2024", "03"]);
    }

    #[test]
    fn test_date_with_date_option() {
        let mut fx = Fixture::new();
        assert_eq!(texts(&fx.run(&DateCommand, &["-d", "2024-06-20T12:00:00", "+%F"])), vec!["2024-06-20"]);
        assert_eq!(texts(&fx.run(&DateCommand, &["--date=yesterday", "+%F"])), vec!["2024-02-29"]);
    }

    #[test]
    fn test_date_default_and_iso() {
        let mut fx = Fixture::new();
        let out = fx.run(&DateCommand, &[]);
        assert!(out[0].text.starts_with("Fri Mar  1 10:35:00"));
        assert!(fx.run(&DateCommand, &["-I"])[0].text.starts_with("2024-03-01T10:35:00"));
    }

    #[test]
    fn test_date_errors() {
        let mut fx = Fixture::new();
        assert!(fx.run(&DateCommand, &["-d", "garbage xyz"])[0].is_error());
        assert!(fx.run(&DateCommand, &["--unknown"])[0].text.contains("unrecognized"));
        assert!(fx.run(&DateCommand, &["-d"])[0].is_error());
    }
}
