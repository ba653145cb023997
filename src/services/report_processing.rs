//! Report header creation and duplicate-report detection
//!
//! A report is keyed by the calendar date it covers. The transport layer
//! redelivers scrape results, so the same date arriving twice is the normal
//! case, not an error.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set,
};

use crate::entities::price_reports::{self, ReportStatus};
use crate::entities::prelude::*;
use crate::models::scrape::ScrapeResult;

/// Checks whether a report has already been ingested for the given date
/// string. Unparsable input falls back to today, so a malformed date can
/// only ever collide with today's report, never create a second one.
pub async fn report_exists<C: ConnectionTrait>(conn: &C, date_str: &str) -> Result<bool, DbErr> {
    let report_date = parse_report_date(date_str);

    let count = PriceReports::find()
        .filter(price_reports::Column::DateReported.eq(report_date))
        .count(conn)
        .await?;

    Ok(count > 0)
}

/// Creates and persists the report header for a scrape result.
pub async fn create_from_scrape_result<C: ConnectionTrait>(
    conn: &C,
    result: &ScrapeResult,
) -> Result<price_reports::Model, DbErr> {
    let now = Utc::now().naive_utc();

    let report = price_reports::ActiveModel {
        date_reported: Set(parse_report_date(&result.date_processed)),
        date_processed: Set(now),
        url: Set(result.url.clone()),
        status: Set(determine_status(result.status.as_deref())),
        created_at: Set(Some(now)),
        ..Default::default()
    };

    report.insert(conn).await
}

/// Parses an ISO calendar date (YYYY-MM-DD), falling back to the current
/// date when the input is empty or malformed.
pub fn parse_report_date(date_str: &str) -> NaiveDate {
    if date_str.is_empty() {
        return Utc::now().date_naive();
    }
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap_or_else(|_| Utc::now().date_naive())
}

/// Maps the worker's free-form status string onto the closed status enum.
/// Case-insensitive: anything containing "success" counts as completed,
/// everything else (including absent) as failed.
fn determine_status(status: Option<&str>) -> ReportStatus {
    match status {
        Some(s) if s.to_lowercase().contains("success") => ReportStatus::Completed,
        _ => ReportStatus::Failed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determine_status_success_variants() {
        assert_eq!(determine_status(Some("success")), ReportStatus::Completed);
        assert_eq!(determine_status(Some("SUCCESS")), ReportStatus::Completed);
        assert_eq!(determine_status(Some("Scrape Successful")), ReportStatus::Completed);
        assert_eq!(determine_status(Some("partial_success")), ReportStatus::Completed);
    }

    #[test]
    fn test_determine_status_everything_else_fails() {
        assert_eq!(determine_status(Some("failed")), ReportStatus::Failed);
        assert_eq!(determine_status(Some("done")), ReportStatus::Failed);
        assert_eq!(determine_status(Some("")), ReportStatus::Failed);
        assert_eq!(determine_status(None), ReportStatus::Failed);
    }

    #[test]
    fn test_parse_report_date_valid() {
        assert_eq!(
            parse_report_date("2025-12-15"),
            NaiveDate::from_ymd_opt(2025, 12, 15).unwrap()
        );
    }

    #[test]
    fn test_parse_report_date_falls_back_to_today() {
        let today = Utc::now().date_naive();
        assert_eq!(parse_report_date(""), today);
        assert_eq!(parse_report_date("not-a-date"), today);
        assert_eq!(parse_report_date("15/12/2025"), today);
    }
}
