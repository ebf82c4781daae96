pub mod csv_log;
pub mod record;
