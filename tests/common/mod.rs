mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from campusfeed for tests
pub use campusfeed::{
    FeedController, FeedDb, FeedError, FeedState, FilterSelection, NewProfile, NewProject,
    Notifier, ProfileStore, Project, ProjectQuery, ProjectStore, Severity, UserProfile, visible,
};
