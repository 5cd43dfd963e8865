pub mod string;
pub mod types;
