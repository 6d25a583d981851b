use crate::stats::{CarrierDurations, PriceStatistics};
use colored::Colorize;

pub const DURATIONS_HEADER: &str = "Minimum flight time between Vladivostok and Tel Aviv:";
pub const PRICES_HEADER: &str = "Difference between average and median price for Vladivostok - Tel Aviv flights:";

/// Renders a second count like a clock reading, `HH:MM` or `HH:MM:SS` when seconds are present.
/// Hours keep counting past a day.
pub fn format_duration(secs: i64) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let abs = secs.unsigned_abs();
    let (hours, mins, rest) = (abs / 3600, abs % 3600 / 60, abs % 60);
    if rest == 0 {
        format!("{}{:02}:{:02}", sign, hours, mins)
    } else {
        format!("{}{:02}:{:02}:{:02}", sign, hours, mins, rest)
    }
}

pub fn durations_report(durations: &CarrierDurations) -> String {
    if durations.is_empty() {
        return format!("{}\nNo flights found.\n", DURATIONS_HEADER.bold());
    }
    let lines = durations
        .iter()
        .map(|(carrier, secs)| format!("Carrier: {}, flight time: {}\n", carrier, format_duration(secs)))
        .collect::<String>();
    format!("{}\n{}", DURATIONS_HEADER.bold(), lines)
}

pub fn prices_report(stats: &PriceStatistics) -> String {
    format!(
        "{}\n\
        Average price: {:.2}\n\
        Median price: {:.2}\n\
        Difference: {:.2}\n",
        PRICES_HEADER.bold(),
        stats.mean,
        stats.median,
        stats.difference
    )
}
