//! Detail navigation trait.

use crate::Result;
use crate::present::Route;
use crate::types::MovieRecord;

/// Takes a movie selected on the list screen to its detail view.
///
/// The record is passed by value; the list keeps its own copy.
pub trait Navigator {
    fn show_detail(&mut self, record: MovieRecord) -> Result<Route>;
}
