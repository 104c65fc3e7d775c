pub mod answer_sink;
pub mod selector;
pub mod transcript_writer;

pub use answer_sink::AnswerSink;
pub use selector::{AccuracyBounds, Decision, ScoreState, Selection, SelectionSession};
pub use transcript_writer::TranscriptWriter;
