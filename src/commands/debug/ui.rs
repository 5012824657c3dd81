//! Renders the inspection report as a monospace block.

use super::logic::Inspection;
use crate::constants::{DEBUG_RAW_VALUE_LIMIT, DEBUG_RECORD_LIMIT, DEBUG_SEGMENT_LIMIT};
use crate::ui::style::{COLOR_INFO, error_embed};
use serenity::builder::CreateEmbed;
use serenity::model::id::UserId;
use std::fmt::Write;

/// Makes a stored value safe to show inside the code block: backticks and
/// control characters are replaced and the value is cut to a fixed length.
pub fn display_raw(raw: &str) -> String {
    let mut shown: String = raw
        .chars()
        .take(DEBUG_RAW_VALUE_LIMIT)
        .map(|c| match c {
            '`' => '\'',
            c if c.is_control() => ' ',
            c => c,
        })
        .collect();
    if raw.chars().count() > DEBUG_RAW_VALUE_LIMIT {
        shown.push('…');
    }
    shown
}

pub fn render_report(display_name: &str, user_id: UserId, inspection: &Inspection) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "Debug Info for {}", display_name);
    let _ = writeln!(out, "User ID: {}", user_id.get());
    let _ = writeln!(
        out,
        "Total records: {} ({} malformed)",
        inspection.records.len(),
        inspection.malformed_count()
    );

    if inspection.records.is_empty() {
        out.push_str("\nNo records found!\n");
        return out;
    }

    out.push_str("\nRaw Records:\n");
    for (i, record) in inspection.records.iter().take(DEBUG_RECORD_LIMIT).enumerate() {
        let resolved = match &record.parsed {
            Ok(day) => day.to_string(),
            Err(_) => "unparsable, skipped".to_string(),
        };
        let _ = writeln!(
            out,
            "{}. {} -> {}",
            i + 1,
            display_raw(&record.sign_in_time),
            resolved
        );
    }
    if inspection.records.len() > DEBUG_RECORD_LIMIT {
        let _ = writeln!(
            out,
            "... and {} more",
            inspection.records.len() - DEBUG_RECORD_LIMIT
        );
    }

    out.push_str("\nStreak Segments (most recent first):\n");
    for segment in inspection.segments.iter().rev().take(DEBUG_SEGMENT_LIMIT) {
        let _ = writeln!(
            out,
            "{} .. {}: {} day(s), {} credits",
            segment.start_date, segment.end_date, segment.length, segment.credits
        );
    }
    if inspection.segments.len() > DEBUG_SEGMENT_LIMIT {
        let _ = writeln!(
            out,
            "... and {} older",
            inspection.segments.len() - DEBUG_SEGMENT_LIMIT
        );
    }

    out.push_str("\nCalculated Results:\n");
    let _ = writeln!(out, "Total Credits: {}", inspection.summary.total_credits);
    let _ = writeln!(
        out,
        "Consecutive Days: {}",
        inspection.summary.current_streak_length
    );
    out
}

pub fn create_report_embed(display_name: &str, user_id: UserId, inspection: &Inspection) -> CreateEmbed {
    CreateEmbed::new()
        .title("Check-in Debug")
        .description(format!(
            "```\n{}```",
            render_report(display_name, user_id, inspection)
        ))
        .color(COLOR_INFO)
}

pub fn create_forbidden_embed() -> CreateEmbed {
    error_embed(
        "Not Allowed",
        "Only administrators can inspect another user's check-ins.",
    )
}

pub fn create_failure_embed() -> CreateEmbed {
    error_embed(
        "Debug Failed",
        "The check-in store couldn't be read. No data is shown rather than an empty history.",
    )
}
