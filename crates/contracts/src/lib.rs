//! Shared contracts between the frontend and the hosted table API.

pub mod domain;
