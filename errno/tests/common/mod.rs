pub mod assertions;
pub mod process;

pub use assertions::{assert_contains, assert_lines};
pub use logging::init_test_logging;
pub use process::{RunOutput, run_errno, run_errno_os, run_errno_with_env};
