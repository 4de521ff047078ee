//! List-query pipeline: pure transformations from a fetched collection and
//! the current query state to the ordered subset that gets displayed.

mod founder;
mod hackathon;
mod text;

pub use founder::{FounderParams, FounderQuery, FounderSort};
pub use hackathon::{HackathonPostParams, HackathonPostQuery, PostSort, PostTab};
pub use text::collation_key;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryParamError {
    #[error("invalid value for `{param}`: {value}")]
    InvalidValue { param: &'static str, value: String },
}

/// `None`, blank and `all` select every value.
fn selected(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
}
