// Form engine: field schema, validation rules, and the step-by-step wizard
// shared by the resume builder and the job-posting composer.
// Presentation code talks to `Wizard<R>` only; records are never indexed by string.

pub mod job_posting;
pub mod resume;
pub mod schema;
pub mod validation;
pub mod wizard;

pub use job_posting::{JobPostingField, JobPostingRecord};
pub use resume::{ResumeField, ResumeRecord};
pub use schema::{Choice, FieldFormat, FormField, FormRecord, Step};
pub use validation::{validate, FieldError};
pub use wizard::{Advance, PreviewRow, StepState, Wizard};
