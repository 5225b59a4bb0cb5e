//! Typed wrappers for the backend's resource CRUD surfaces.
//!
//! Route spellings follow the backend verbatim, inconsistent casing included
//! (`User/addNewuser`, `Channel/updatechannel/{id}`); they are the wire
//! contract, not typos. Everything funnels through [`crate::client::ApiClient`]
//! and inherits its refresh/retry behavior.

pub mod channels;
pub mod dashboard;
pub mod episodes;
pub mod movies;
pub mod series;
pub mod settings;
pub mod subscriptions;
pub mod user_subscriptions;
pub mod users;
