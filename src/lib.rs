//! Query API over GNSS station readings, including decoded station positions.

pub mod dto;
pub mod gnss;
pub mod service;
pub mod store;
pub mod util;
pub mod web_interface;
