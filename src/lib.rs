//! Bootup - a terminal installer for common server software
//!
//! This library provides the service catalog (what can be installed, how to
//! check for it, how to install it) and the interactive browser used to pick
//! a service.

pub mod catalog;
pub mod logging;
pub mod ui;
