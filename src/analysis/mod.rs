//! Overlay computations derived from a fetched series.
//!
//! Both tools are display-only: they annotate or accompany the series,
//! never alter its prices or volumes, and produce nothing at all when the
//! series is too short for them.

pub mod bollinger;
pub mod fibonacci;
