//! Typed endpoint functions over the authenticated channel.

pub mod chat;
pub mod guestbook;
pub mod posts;
pub mod projects;
