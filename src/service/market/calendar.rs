use crate::models::{CalendarEnvelope, CorporateCalendarRecord, EarningsEvent};
use crate::service::market::MarketServiceError;

/// Status literal marking a scheduled event as locked in.
const CONFIRMED_STATUS: &str = "Confirmed";

/// Description marker for quarterly earnings releases. Tradier also carries
/// a numeric event-type code, but it has proven unreliable upstream, so
/// classification goes by description text.
const QUARTER_EARNINGS_MARKER: &str = "Quarter Earnings Result";

/// Flatten a calendar response into confirmed quarterly-earnings events,
/// earliest first.
///
/// The envelope list must hold exactly one entry, since this client only
/// issues single-symbol calendar queries. Companies without a calendar
/// table and null records contribute nothing; an envelope with no matching
/// events yields an empty list, not an error.
pub fn extract_earnings_events(
    envelopes: &[CalendarEnvelope],
) -> Result<Vec<EarningsEvent>, MarketServiceError> {
    let envelope = match envelopes {
        [] => return Err(MarketServiceError::CalendarEmpty),
        [one] => one,
        many => {
            return Err(MarketServiceError::CalendarAmbiguous { count: many.len() });
        }
    };

    let mut events: Vec<EarningsEvent> = envelope
        .results
        .iter()
        .flat_map(|company| company.tables.corporate_calendars.iter().flatten())
        .flatten()
        .filter(|record| is_confirmed(record))
        .filter(|record| is_quarterly_earnings_result(record))
        .map(|record| EarningsEvent {
            begin_date_time: record.begin_date_time.clone(),
            event_type: record.event_type,
            event: record.event.clone(),
        })
        .collect();

    // Fixed-width ISO timestamps, so lexical order is chronological.
    events.sort_by(|a, b| a.begin_date_time.cmp(&b.begin_date_time));

    Ok(events)
}

fn is_confirmed(record: &CorporateCalendarRecord) -> bool {
    record.event_status.as_deref() == Some(CONFIRMED_STATUS)
}

/// The classification policy for which calendar events count as quarterly
/// earnings. Swapping the predicate (say, back to a numeric event-type
/// code) leaves the rest of the pipeline untouched.
fn is_quarterly_earnings_result(record: &CorporateCalendarRecord) -> bool {
    record.event.contains(QUARTER_EARNINGS_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Vec<CalendarEnvelope> {
        serde_json::from_str(json).unwrap()
    }

    const FIXTURE: &str = r#"[
        {
            "request": "aapl",
            "type": "Symbol",
            "results": [
                {
                    "type": "Company",
                    "id": "0C000007GL",
                    "tables": {
                        "corporate_calendars": [
                            {
                                "company_id": "0C000007GL",
                                "begin_date_time": "2024-08-01",
                                "end_date_time": "2024-08-01",
                                "event_type": 8,
                                "estimated_date_for_next_event": "2024-10-31",
                                "event": "Apple Inc Q3 2024 Quarter Earnings Result",
                                "event_fiscal_year": 2024,
                                "event_status": "Confirmed",
                                "time_zone": "1970-01-01"
                            },
                            null,
                            {
                                "company_id": "0C000007GL",
                                "begin_date_time": "2024-02-01",
                                "event_type": 8,
                                "event": "Apple Inc Q1 2024 Quarter Earnings Result",
                                "event_status": "Confirmed"
                            },
                            {
                                "company_id": "0C000007GL",
                                "begin_date_time": "2024-09-10",
                                "event_type": 15,
                                "event": "Apple Inc Shareholder Meeting",
                                "event_status": "Confirmed"
                            },
                            {
                                "company_id": "0C000007GL",
                                "begin_date_time": "2024-05-02",
                                "event_type": 8,
                                "event": "Apple Inc Q2 2024 Quarter Earnings Result",
                                "event_status": "Confirmed"
                            },
                            {
                                "company_id": "0C000007GL",
                                "begin_date_time": "2024-10-31",
                                "event_type": 8,
                                "event": "Apple Inc Q4 2024 Quarter Earnings Result",
                                "event_status": "Pending"
                            }
                        ]
                    }
                },
                {
                    "type": "Company",
                    "id": "0C00000000",
                    "tables": {
                        "corporate_calendars": null
                    }
                }
            ]
        }
    ]"#;

    #[test]
    fn pipeline_filters_sorts_and_projects() {
        let events = extract_earnings_events(&parse(FIXTURE)).unwrap();

        // Pending Q4 and the shareholder meeting are gone; order is by date.
        let begins: Vec<&str> = events.iter().map(|e| e.begin_date_time.as_str()).collect();
        assert_eq!(begins, vec!["2024-02-01", "2024-05-02", "2024-08-01"]);
    }

    #[test]
    fn unconfirmed_events_are_excluded_even_with_matching_description() {
        let events = extract_earnings_events(&parse(FIXTURE)).unwrap();

        assert!(events.iter().all(|e| !e.begin_date_time.starts_with("2024-10")));
    }

    #[test]
    fn null_calendar_table_contributes_nothing() {
        let json = r#"[
            {
                "request": "shell",
                "type": "Symbol",
                "results": [
                    { "type": "Company", "id": "x", "tables": { "corporate_calendars": null } }
                ]
            }
        ]"#;

        let events = extract_earnings_events(&parse(json)).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn empty_results_is_a_valid_no_events_answer() {
        let json = r#"[ { "request": "aapl", "type": "Symbol", "results": [] } ]"#;

        let events = extract_earnings_events(&parse(json)).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn empty_envelope_list_fails_loudly() {
        let err = extract_earnings_events(&[]).unwrap_err();
        assert!(matches!(err, MarketServiceError::CalendarEmpty));
    }

    #[test]
    fn multiple_envelopes_fail_loudly() {
        let json = r#"[
            { "request": "aapl", "type": "Symbol", "results": [] },
            { "request": "msft", "type": "Symbol", "results": [] }
        ]"#;

        let err = extract_earnings_events(&parse(json)).unwrap_err();
        assert!(matches!(
            err,
            MarketServiceError::CalendarAmbiguous { count: 2 }
        ));
    }

    #[test]
    fn projection_carries_exactly_three_fields() {
        let events = extract_earnings_events(&parse(FIXTURE)).unwrap();
        let value = serde_json::to_value(&events[0]).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["begin_date_time", "event", "event_type"]);
    }

    #[test]
    fn extraction_is_idempotent() {
        let envelopes = parse(FIXTURE);

        let first = extract_earnings_events(&envelopes).unwrap();
        let second = extract_earnings_events(&envelopes).unwrap();
        assert_eq!(first, second);
    }
}
