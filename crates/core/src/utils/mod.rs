pub mod decimal_utils;
pub mod id_generator;
pub mod time_utils;
pub mod validation;
