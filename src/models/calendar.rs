use serde::{Deserialize, Serialize};

/// Raw corporate-calendar record from
/// `beta/markets/fundamentals/calendars`. Only `begin_date_time`,
/// `event_type`, and `event` survive into [`EarningsEvent`]; the rest is
/// read for filtering and then dropped.
#[derive(Debug, Clone, Deserialize)]
pub struct CorporateCalendarRecord {
    #[serde(default)]
    pub company_id: Option<String>,
    pub begin_date_time: String,
    #[serde(default)]
    pub end_date_time: Option<String>,
    pub event_type: i64,
    #[serde(default)]
    pub estimated_date_for_next_event: Option<String>,
    pub event: String,
    #[serde(default)]
    pub event_fiscal_year: Option<i64>,
    #[serde(default)]
    pub event_status: Option<String>,
    #[serde(default)]
    pub time_zone: Option<String>,
}

/// Per-company table container. `corporate_calendars` is null when the
/// company has nothing scheduled, and individual entries can be null too.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarTables {
    #[serde(default)]
    pub corporate_calendars: Option<Vec<Option<CorporateCalendarRecord>>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarCompany {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub tables: CalendarTables,
}

/// One result envelope of the calendar response. The API wraps these in a
/// top-level array, one per requested symbol.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarEnvelope {
    #[serde(default)]
    pub request: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub results: Vec<CalendarCompany>,
}

/// A confirmed quarterly-earnings event, projected down to the fields
/// callers consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsEvent {
    pub begin_date_time: String,
    pub event_type: i64,
    pub event: String,
}
