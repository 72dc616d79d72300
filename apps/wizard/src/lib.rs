// Form engine behind the resume builder and job-posting composer.
// Validation, step navigation and persistence live here; the terminal front
// end in main.rs is only one presentation of it.

pub mod config;
pub mod errors;
pub mod form;
pub mod navigation;
pub mod persistence;
pub mod state;
pub mod storage;
pub mod submit;
