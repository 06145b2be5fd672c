pub mod core;
pub mod feed;

pub use crate::core::notify::{Notifier, Severity, TracingNotifier};
pub use crate::core::store::{
    FeedDb, NewProfile, NewProject, ProfileStore, Project, ProjectQuery, ProjectStore, UserProfile,
};
pub use crate::feed::{
    FeedController, FeedError, FeedState, FilterSelection, IdentityTicket, LoadTicket, visible,
};
