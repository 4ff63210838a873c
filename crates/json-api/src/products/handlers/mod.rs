pub(crate) mod featured;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod new_arrivals;
pub(crate) mod related;
