use tracing::{debug, warn};

use crate::core::{
    notify::{Notifier, Severity},
    store::{ProfileStore, Project, ProjectStore},
};

use super::{error::FeedError, filter::FilterSelection, state::FeedState};

/// Drives the project feed against injected store and notification
/// capabilities. The host forwards user interactions and auth transitions;
/// the controller owns the feed state and the fetch orchestration.
#[derive(Debug)]
pub struct FeedController<S, N> {
    store: S,
    notifier: N,
    state: FeedState,
}

impl<S, N> FeedController<S, N>
where
    S: ProjectStore + ProfileStore,
    N: Notifier,
{
    pub fn new(store: S, notifier: N) -> Self {
        Self {
            store,
            notifier,
            state: FeedState::new(),
        }
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    /// The currently displayed subset.
    pub fn visible(&self) -> Vec<&Project> {
        self.state.visible()
    }

    /// Observe an auth transition. A present identity costs exactly one
    /// profile read; an absent one resolves to no college without touching
    /// the store. A failed read clears the resolved college rather than
    /// leaving a stale value behind.
    pub async fn session_changed(&mut self, identity: Option<&str>) -> Result<(), FeedError> {
        let ticket = self.state.begin_identity();
        let Some(id) = identity else {
            self.state.set_resolved_college(ticket, None);
            return Ok(());
        };
        match self.store.get_profile(id).await {
            Ok(profile) => {
                let college = profile.and_then(|p| p.college);
                self.state.set_resolved_college(ticket, college);
                Ok(())
            }
            Err(source) => {
                warn!(identity = id, error = %source, "profile fetch failed, clearing resolved college");
                self.state.set_resolved_college(ticket, None);
                Err(FeedError::ProfileFetch { source })
            }
        }
    }

    /// Change the server-side filter selection, reloading only when the
    /// selection actually changed.
    pub async fn set_filter(&mut self, selection: FilterSelection) -> Result<(), FeedError> {
        if self.state.selection == selection {
            return Ok(());
        }
        self.state.selection = selection;
        self.reload().await
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.state.search_term = term.into();
    }

    pub fn set_my_college_only(&mut self, enabled: bool) {
        self.state.my_college_only = enabled;
    }

    /// The explicit search action. The term never reaches the server:
    /// searching re-runs the current query to pick up fresh data and the
    /// term is applied client-side by the view filter.
    pub async fn submit_search(&mut self) -> Result<(), FeedError> {
        self.reload().await
    }

    /// Fetch the project collection under the current selection and replace
    /// the in-memory list. On failure the list is left as it was, a single
    /// error notification is emitted, and the loading flag is cleared.
    pub async fn reload(&mut self) -> Result<(), FeedError> {
        let ticket = self.state.begin_load();
        let query = self.state.selection.to_query();
        match self.store.query_projects(&query).await {
            Ok(projects) => {
                debug!(count = projects.len(), "project feed loaded");
                self.state.complete_load(ticket, projects);
                Ok(())
            }
            Err(source) => {
                self.state.abort_load(ticket);
                self.notifier.notify("Failed to load projects", Severity::Error);
                Err(FeedError::ProjectLoad { source })
            }
        }
    }
}
