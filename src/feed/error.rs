use thiserror::Error;

/// Recoverable failures surfaced by the feed. Neither variant is fatal and
/// neither triggers an automatic retry; the state left behind is documented
/// on the controller methods.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Failed to resolve profile: {source}")]
    ProfileFetch {
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to load projects: {source}")]
    ProjectLoad {
        #[source]
        source: anyhow::Error,
    },
}
