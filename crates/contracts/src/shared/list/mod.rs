//! List-view plumbing shared between the frontend and the backend contract:
//! query state, response-envelope normalization, debounce policy and the
//! single-fetch gate.

pub mod debounce;
pub mod envelope;
pub mod gate;
pub mod query;
