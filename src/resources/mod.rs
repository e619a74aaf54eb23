// Per-resource wrappers: each method pins a URL path and a response model.

pub mod auth;
pub mod calendars;
pub mod events;
pub mod grants;

pub use auth::Auth;
pub use calendars::Calendars;
pub use events::Events;
pub use grants::Grants;

use crate::utils::error::Result;
use crate::utils::validation::validate_path_segment;

pub(crate) fn grant_path(identifier: &str) -> Result<String> {
    validate_path_segment("identifier", identifier)?;
    Ok(format!("/v3/grants/{}", identifier))
}
