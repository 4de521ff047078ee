//! Job board listing parameters. Filtering itself runs on the server.

use serde::{Deserialize, Serialize};

use crate::entities::Job;

pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 50;
/// Largest offset a Postgres `OFFSET` (bigint) accepts.
pub const MAX_OFFSET: u64 = i64::MAX as u64;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub search: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    /// Years of experience the candidate has.
    pub experience: Option<u32>,
}

impl JobQuery {
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    pub fn offset(&self) -> u64 {
        (self.page() - 1)
            .saturating_mul(self.limit())
            .min(MAX_OFFSET)
    }

    pub fn search_term(&self) -> Option<&str> {
        non_blank(self.search.as_deref())
    }

    pub fn location_term(&self) -> Option<&str> {
        non_blank(self.location.as_deref()).filter(|l| !l.eq_ignore_ascii_case("all"))
    }

    pub fn job_type_term(&self) -> Option<&str> {
        non_blank(self.job_type.as_deref()).filter(|t| !t.eq_ignore_ascii_case("all"))
    }

    /// Query-string pairs, omitting unset filters.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page().to_string()),
            ("limit", self.limit().to_string()),
        ];
        if let Some(search) = self.search_term() {
            pairs.push(("search", search.to_string()));
        }
        if let Some(location) = self.location_term() {
            pairs.push(("location", location.to_string()));
        }
        if let Some(job_type) = self.job_type_term() {
            pairs.push(("jobType", job_type.to_string()));
        }
        if let Some(years) = self.experience {
            pairs.push(("experience", years.to_string()));
        }
        pairs
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl Pagination {
    pub fn new(page: u64, limit: u64, total: u64) -> Self {
        let total_pages = if limit == 0 { 0 } else { total.div_ceil(limit) };
        Self {
            page,
            limit,
            total,
            total_pages,
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListResponse {
    pub success: bool,
    pub jobs: Vec<Job>,
    pub pagination: Pagination,
}
