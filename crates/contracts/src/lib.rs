//! Types shared between the portal server and its clients.

pub mod domain;
pub mod enums;
