//! `stockworth-report`
//!
//! Presentation-neutral report content built on top of a valuation result:
//! formatted metric cards, insights, recommendations and chart series. No
//! rendering technology lives here; export surfaces lay this data out.

pub mod charts;
pub mod recipient;
pub mod report;

pub use charts::{ChartSeries, CompositionSlice, MarginBar};
pub use recipient::{ReportRecipient, is_email_shaped};
pub use report::{
    MetricCard, Tone, URGENT_CAPITAL_LOCKED_PERCENT, ValuationReport, insights, metric_cards,
    recommendations,
};
