pub mod bench_program;
pub mod bench_width;
pub mod logger;
pub mod print_utils;
pub mod timing;
