pub mod form_run;
pub mod question_ctx;

pub use form_run::{FormRun, RunReport};
pub use question_ctx::{PageCtx, QuestionCtx};
