//! Boardwatch - Resource-Watch Notifications for Task-Board Sessions
//!
//! Long-lived client sessions subscribe to task-board resources (a board,
//! a list's card collection, a card, its comments) and receive a
//! notification descriptor whenever a mutation elsewhere invalidates one
//! of those resources, without polling.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
