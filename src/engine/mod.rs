// The selection state machine, kept apart from the UI so that transitions
// can be exercised without a rendering environment.
pub mod controller;

pub use controller::{ChartController, FetchRequest, FetchState};
