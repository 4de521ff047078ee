use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;
use uuid::Uuid;

use super::text::{contains_folded, needle};
use super::{selected, QueryParamError};
use crate::entities::{HackathonPost, PostStatus};

//
// ──────────────────────────────────────────────────────────
// Query state
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PostTab {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "my")]
    Mine,
}

impl FromStr for PostTab {
    type Err = QueryParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" => Ok(PostTab::All),
            "my" | "mine" => Ok(PostTab::Mine),
            _ => Err(QueryParamError::InvalidValue {
                param: "tab",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostSort {
    #[default]
    Newest,
    Oldest,
    Soonest,
    Teammates,
}

impl FromStr for PostSort {
    type Err = QueryParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "newest" => Ok(PostSort::Newest),
            "oldest" => Ok(PostSort::Oldest),
            "soonest" => Ok(PostSort::Soonest),
            "teammates" => Ok(PostSort::Teammates),
            _ => Err(QueryParamError::InvalidValue {
                param: "sort",
                value: s.to_string(),
            }),
        }
    }
}

/// Search, filter and sort state of the hackathon post list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HackathonPostQuery {
    pub tab: PostTab,
    pub search: String,
    pub status: Option<PostStatus>,
    /// Compared case-insensitively.
    pub location: Option<String>,
    /// Inclusive lower bound on `startDate`, from 00:00 UTC.
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound on `endDate`, at 00:00 UTC.
    pub end_date: Option<NaiveDate>,
    pub sort: PostSort,
}

impl HackathonPostQuery {
    /// Runs the pipeline: tab, text, status, location, start bound, end bound,
    /// then a stable sort. The input slice is left untouched.
    pub fn apply(&self, posts: &[HackathonPost], current_user: Option<Uuid>) -> Vec<HackathonPost> {
        let needle = needle(&self.search);
        let location = self
            .location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_lowercase);
        let start_bound = self.start_date.map(day_start);
        let end_bound = self.end_date.map(day_start);

        let mut visible: Vec<HackathonPost> = posts
            .iter()
            .filter(|post| match self.tab {
                PostTab::All => true,
                PostTab::Mine => current_user.is_some_and(|me| post.is_owned_by(me)),
            })
            .filter(|post| needle.as_deref().map_or(true, |n| matches_text(post, n)))
            .filter(|post| self.status.map_or(true, |status| post.status == status))
            .filter(|post| {
                location
                    .as_deref()
                    .map_or(true, |l| post.location.to_lowercase() == l)
            })
            .filter(|post| {
                start_bound.map_or(true, |bound| post.start_date.is_some_and(|d| d >= bound))
            })
            .filter(|post| {
                end_bound.map_or(true, |bound| post.end_date.is_some_and(|d| d <= bound))
            })
            .cloned()
            .collect();

        sort_posts(&mut visible, self.sort);
        visible
    }
}

fn matches_text(post: &HackathonPost, needle: &str) -> bool {
    contains_folded(&post.hackathon_name, needle)
        || contains_folded(&post.description, needle)
        || contains_folded(&post.skills.join(" "), needle)
}

fn day_start(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

// `sort_by` is stable: equal keys keep their input order.
fn sort_posts(posts: &mut [HackathonPost], sort: PostSort) {
    match sort {
        PostSort::Newest => posts.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        PostSort::Oldest => posts.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        PostSort::Soonest => posts.sort_by(|a, b| match (a.start_date, b.start_date) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }),
        PostSort::Teammates => {
            posts.sort_by(|a, b| b.teammates_required.cmp(&a.teammates_required))
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Query-string form
// ──────────────────────────────────────────────────────────
//

/// Raw query-string parameters, as sent by a browser or the client crate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HackathonPostParams {
    pub tab: Option<String>,
    pub search: Option<String>,
    pub status: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub sort: Option<String>,
}

impl TryFrom<HackathonPostParams> for HackathonPostQuery {
    type Error = QueryParamError;

    fn try_from(params: HackathonPostParams) -> Result<Self, Self::Error> {
        let status = selected(params.status.as_deref())
            .map(|s| {
                s.parse::<PostStatus>()
                    .map_err(|_| QueryParamError::InvalidValue {
                        param: "status",
                        value: s.to_string(),
                    })
            })
            .transpose()?;

        Ok(HackathonPostQuery {
            tab: params.tab.as_deref().unwrap_or_default().parse()?,
            search: params.search.unwrap_or_default(),
            status,
            location: selected(params.location.as_deref()).map(str::to_string),
            start_date: parse_date("startDate", params.start_date.as_deref())?,
            end_date: parse_date("endDate", params.end_date.as_deref())?,
            sort: params.sort.as_deref().unwrap_or_default().parse()?,
        })
    }
}

fn parse_date(param: &'static str, raw: Option<&str>) -> Result<Option<NaiveDate>, QueryParamError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| QueryParamError::InvalidValue {
                param,
                value: value.to_string(),
            }),
    }
}
