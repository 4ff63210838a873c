//! Product endpoints

pub(crate) mod handlers;
pub(crate) mod models;
pub(crate) mod params;

pub(crate) use handlers::*;
