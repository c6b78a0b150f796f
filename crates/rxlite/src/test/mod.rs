pub mod test_errors;
pub mod test_replace;
pub mod test_scan;
