pub mod answer_key;
pub mod loaders;
pub mod respondent;
pub mod target;

pub use answer_key::{letter_to_index, option_letter, AnswerKey};
pub use loaders::{load_answer_key, parse_letter_key, save_answer_key};
pub use respondent::Respondent;
pub use target::{TargetAccuracy, TargetWindow};
