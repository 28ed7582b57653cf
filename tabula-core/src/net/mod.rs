//! Network side of the poll loop
//!
//! Link bring-up and document retrieval, written against the collaborator
//! traits so the radio and HTTP stack stay outside this crate.

pub mod github;
pub mod link;

pub use github::{GithubSource, API_BASE};
pub use link::{connect, CONNECT_ATTEMPTS, CONNECT_POLL_MS};
