//! Competition logic: pairing generation, date assignment, results, standings.

mod dates;
mod import;
mod results;
mod round_robin;
mod setup;
mod standings;

pub use dates::{assign_dates, min_dates_required, validate_inputs};
pub use import::{import_csv, ImportSummary};
pub use results::{parse_score, record_result, set_match_result};
pub use round_robin::generate_schedule;
pub use setup::build_schedule;
pub use standings::compute_standings;
