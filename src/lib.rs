//! In-memory user management: a single store of user records fetched once
//! from a remote endpoint, a pure filter/sort/paginate projection for the
//! list screen, and validated create/update/delete.

pub mod app;
pub mod config;
pub mod form;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod mvi;
pub mod store;
pub mod validation;
pub mod view;
