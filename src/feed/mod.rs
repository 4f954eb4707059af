//! Community feed interaction state.

pub mod like;

pub use like::{FeedState, LikeState};
