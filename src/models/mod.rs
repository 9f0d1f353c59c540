use serde::Deserialize;

pub mod calendar;
pub mod history;
pub mod lookup;
pub mod options;
pub mod quotes;

pub use calendar::{
    CalendarCompany, CalendarEnvelope, CalendarTables, CorporateCalendarRecord, EarningsEvent,
};
pub use history::{HistoryResponse, PriceBar};
pub use lookup::{LookupResponse, Security};
pub use options::{ExpirationsResponse, Greeks, OptionChainResponse, OptionContract, OptionType};
pub use quotes::{Quote, QuoteResponse};

/// A field Tradier serializes as either a single object or an array,
/// depending on how many entries there are.
///
/// Normalized to a `Vec` once at the deserialization boundary so downstream
/// code never branches on shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}
