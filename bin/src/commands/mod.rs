//! CLI command implementations.

pub(crate) mod price;
pub(crate) mod show;
pub(crate) mod yields;
