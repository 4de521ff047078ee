//! Job board. Unlike the collaborate page, filtering and paging happen on
//! the server; the board only holds the query and the current page.

use hub_core::jobs::{JobQuery, Pagination};
use hub_core::Job;
use tracing::warn;
use uuid::Uuid;

use crate::api::BackendApi;
use crate::notification::NotificationCenter;
use crate::session::SessionStore;

#[derive(Debug, Default)]
pub struct JobBoard {
    query: JobQuery,
    jobs: Vec<Job>,
    pagination: Option<Pagination>,
    loading: bool,
    applying: Option<Uuid>,
}

impl JobBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &JobQuery {
        &self.query
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_applying(&self, id: Uuid) -> bool {
        self.applying == Some(id)
    }

    /// Replaces the filters and goes back to the first page. Call
    /// [`JobBoard::load`] afterwards.
    pub fn set_filters(
        &mut self,
        search: Option<String>,
        location: Option<String>,
        job_type: Option<String>,
        experience: Option<u32>,
    ) {
        self.query = JobQuery {
            page: Some(1),
            limit: self.query.limit,
            search,
            location,
            job_type,
            experience,
        };
    }

    pub async fn load(&mut self, api: &dyn BackendApi, notifications: &mut NotificationCenter) {
        self.loading = true;
        match api.list_jobs(&self.query).await {
            Ok(response) => {
                self.jobs = response.jobs;
                self.pagination = Some(response.pagination);
            }
            Err(err) => {
                warn!(error = %err, "failed to load jobs");
                notifications.error(err.to_string());
            }
        }
        self.loading = false;
    }

    /// Loads the next page if there is one.
    pub async fn next_page(
        &mut self,
        api: &dyn BackendApi,
        notifications: &mut NotificationCenter,
    ) -> bool {
        if !self.pagination.is_some_and(|p| p.has_next()) {
            return false;
        }
        self.query.page = Some(self.query.page() + 1);
        self.load(api, notifications).await;
        true
    }

    pub async fn apply(
        &mut self,
        api: &dyn BackendApi,
        session: &SessionStore,
        notifications: &mut NotificationCenter,
        id: Uuid,
    ) {
        let Some(token) = session.token() else {
            notifications.error("Please login to apply for jobs");
            return;
        };
        if self.applying.is_some() {
            return;
        }

        self.applying = Some(id);
        match api.apply_to_job(token, id).await {
            Ok(job) => {
                if let Some(slot) = self.jobs.iter_mut().find(|j| j.id == job.id) {
                    *slot = job;
                }
                notifications.success("Application submitted");
            }
            Err(err) => {
                notifications.error(err.to_string());
            }
        }
        self.applying = None;
    }
}
