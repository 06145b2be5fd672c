mod controller;
mod error;
mod filter;
mod state;

pub use controller::FeedController;
pub use error::FeedError;
pub use filter::{FilterSelection, visible};
pub use state::{FeedState, IdentityTicket, LoadTicket};
