pub(crate) mod check;
pub(crate) mod validate_config;
