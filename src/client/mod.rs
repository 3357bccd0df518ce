//! Upstream integration layer.
//!
//! Everything that talks to the upstream employee directory lives here:
//! the HTTP client, the typed outcomes it produces, and the derived
//! computations performed over fetched collections.

mod derived;
mod outcome;
mod upstream;

pub use derived::{filter_by_name, highest_salary, top_earning_names};
pub use outcome::{DeleteOutcome, FetchOutcome};
pub use upstream::UpstreamEmployeeClient;
