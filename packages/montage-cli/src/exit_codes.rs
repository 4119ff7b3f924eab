pub const SUCCESS: i32 = 0;
/// Bad labels, unreadable input or invalid reference tables
pub const INPUT_ERROR: i32 = 1;
/// Output could not be produced
pub const EXECUTION_ERROR: i32 = 2;
/// Batch run where some files failed
pub const PARTIAL_FAILURE: i32 = 3;
