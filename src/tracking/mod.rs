//! Access tracking for the "most accessed contacts" report.

pub mod access_tracker;

pub use access_tracker::AccessTracker;
