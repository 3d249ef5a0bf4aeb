//! Wire types for the Folio backend API.
//!
//! All response and request bodies use camelCase field names on the wire,
//! matching the backend DTOs. Timestamps are `LocalDateTime` ISO-8601
//! strings and deserialize into [`chrono::NaiveDateTime`].

pub mod auth;
pub mod chat;
pub mod guestbook;
pub mod page;
pub mod post;
pub mod project;
