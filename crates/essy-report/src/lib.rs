//! Classification engine behind ESSY whole-child screener reports.
//!
//! Given one completed screener record, the engine works out which broad domains are
//! concerns, resolves cross-loaded items, buckets every answered item into strengths,
//! monitor or concerns, and resolves the narrative sentence shown for it.

pub mod config;
pub mod error;
pub mod screener;
pub mod telemetry;
