//! Domain entities

mod search_session;
mod trip;

pub use search_session::{Candidate, MAX_CANDIDATES, SearchResults, SearchSession, SelectionTarget};
pub use trip::Trip;
