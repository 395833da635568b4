pub(crate) mod context;
pub(crate) mod instructions;
pub(crate) mod paint;
