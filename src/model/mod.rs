pub mod data_core;
pub mod form;
pub mod record;
