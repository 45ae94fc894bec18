//! Portal State - Membership and pricing state resolution
//!
//! This crate answers the questions a membership portal asks about a visitor:
//! are they paying, which subscription backs that, what does it cost in their
//! currency, and which price does a page request refer to.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
