use serde::Serialize;

use super::ordered_map::OrderedMap;

/// Value of one row in the candidate's info panel. Both variants go out on the
/// wire as a bare string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProfileValue {
    Text(String),
    /// `src` of the `<img>` found in the value cell.
    Image(String),
}

pub type ProfileFields = OrderedMap<ProfileValue>;
