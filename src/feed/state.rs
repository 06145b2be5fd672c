use crate::core::store::Project;

use super::filter::{self, FilterSelection};

/// Pairs an issued project fetch with the state generation that issued it.
/// A result is applied only while its ticket is still the newest one, so a
/// slow response can never overwrite the outcome of a later request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Same fencing for identity transitions, kept as a separate type so the
/// two counters cannot be mixed up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityTicket(u64);

/// The feed component's in-memory state. Mutated only through the ticket
/// API and the plain setters; the visible subset is a pure derivation.
#[derive(Debug, Default)]
pub struct FeedState {
    pub projects: Vec<Project>,
    pub loading: bool,
    pub search_term: String,
    pub selection: FilterSelection,
    pub my_college_only: bool,
    pub resolved_college: Option<String>,
    load_seq: u64,
    identity_seq: u64,
}

impl FeedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a project fetch: bumps the load generation and raises the
    /// loading flag. The returned ticket is handed back to `complete_load`
    /// or `abort_load`.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.load_seq += 1;
        self.loading = true;
        LoadTicket(self.load_seq)
    }

    /// Replace the project list with a fetched set. A stale ticket is
    /// discarded wholesale, leaving the list and the loading flag for the
    /// newer request to settle. Returns whether the ticket was current.
    pub fn complete_load(&mut self, ticket: LoadTicket, projects: Vec<Project>) -> bool {
        if ticket.0 != self.load_seq {
            return false;
        }
        self.projects = projects;
        self.loading = false;
        true
    }

    /// Record a failed fetch: the list stays as it was, the loading flag is
    /// cleared. Stale tickets are discarded like in `complete_load`.
    pub fn abort_load(&mut self, ticket: LoadTicket) -> bool {
        if ticket.0 != self.load_seq {
            return false;
        }
        self.loading = false;
        true
    }

    /// Start an identity resolution for the latest auth transition.
    pub fn begin_identity(&mut self) -> IdentityTicket {
        self.identity_seq += 1;
        IdentityTicket(self.identity_seq)
    }

    /// Record the college resolved for an identity transition. Resolutions
    /// belonging to a superseded transition are discarded.
    pub fn set_resolved_college(
        &mut self,
        ticket: IdentityTicket,
        college: Option<String>,
    ) -> bool {
        if ticket.0 != self.identity_seq {
            return false;
        }
        self.resolved_college = college;
        true
    }

    /// The currently displayed subset, in load order.
    pub fn visible(&self) -> Vec<&Project> {
        filter::visible(
            &self.projects,
            &self.search_term,
            self.selection,
            self.my_college_only,
            self.resolved_college.as_deref(),
        )
    }
}
