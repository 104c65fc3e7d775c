//! 分数区间选项决策 - 业务能力层
//!
//! 只负责"这道题选哪个选项"，不关心分页、日志输出和页面操作。
//!
//! 决策规则（按优先级）：
//! 1. 剩余题目所需最低正确率 > 0.9 → 必须答对
//! 2. 剩余题目允许最高正确率 < 0.1 → 必须答错（在错误选项中均匀随机）
//! 3. 其余情况按目标正确率抽样
//!
//! 只要 `min_score <= max_score <= 题目总数`，依次作答全部题目后最终得分一定落在区间内。

use crate::error::SelectionError;
use crate::infrastructure::RandomSource;
use crate::models::{AnswerKey, TargetAccuracy, TargetWindow};

/// 所需最低正确率超过此值时强制答对
pub const FORCE_CORRECT_THRESHOLD: f64 = 0.9;
/// 允许最高正确率低于此值时强制答错
pub const FORCE_INCORRECT_THRESHOLD: f64 = 0.1;

/// 当前得分状态
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreState {
    correct_answers: usize,
}

impl ScoreState {
    pub fn correct_answers(&self) -> usize {
        self.correct_answers
    }
}

/// 剩余题目的正确率上下界
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccuracyBounds {
    /// 达到最低分所需的最低正确率，不小于 0
    pub min_needed: f64,
    /// 不超过最高分允许的最高正确率，不大于 1
    pub max_allowed: f64,
}

/// 决策来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// 为保证达到最低分而强制答对
    ForcedCorrect,
    /// 为保证不超过最高分而强制答错
    ForcedIncorrect,
    /// 抽样结果为答对
    SampledCorrect,
    /// 抽样结果为答错
    SampledIncorrect,
}

impl Decision {
    pub fn is_correct(self) -> bool {
        matches!(self, Decision::ForcedCorrect | Decision::SampledCorrect)
    }

    pub fn is_forced(self) -> bool {
        matches!(self, Decision::ForcedCorrect | Decision::ForcedIncorrect)
    }

    /// 日志显示名称
    pub fn label(self) -> &'static str {
        match self {
            Decision::ForcedCorrect => "强制答对",
            Decision::ForcedIncorrect => "强制答错",
            Decision::SampledCorrect => "抽样答对",
            Decision::SampledIncorrect => "抽样答错",
        }
    }
}

/// 单道题的决策结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    /// 题目索引（从 0 开始）
    pub question_index: usize,
    /// 标准答案
    pub correct_option: usize,
    /// 实际选择的选项
    pub selected_option: usize,
    pub decision: Decision,
    /// 作答前计算的正确率上下界
    pub bounds: AccuracyBounds,
    /// 作答后的累计答对数
    pub correct_so_far: usize,
}

impl Selection {
    pub fn is_correct(&self) -> bool {
        self.decision.is_correct()
    }
}

/// 一次作答的决策会话
///
/// 持有答案表、目标区间、目标正确率和得分状态，由编排层独占。
/// 每次作答创建新的会话，不在多次作答之间共享。
#[derive(Debug, Clone)]
pub struct SelectionSession {
    key: AnswerKey,
    window: TargetWindow,
    accuracy: TargetAccuracy,
    state: ScoreState,
}

impl SelectionSession {
    /// 创建决策会话
    ///
    /// 目标区间的上界不能超过答案表的题目数
    pub fn new(
        key: AnswerKey,
        window: TargetWindow,
        accuracy: TargetAccuracy,
    ) -> Result<Self, SelectionError> {
        if window.max_score() > key.len() {
            return Err(SelectionError::InfeasibleWindow {
                min_score: window.min_score(),
                max_score: window.max_score(),
                total: key.len(),
            });
        }

        Ok(Self {
            key,
            window,
            accuracy,
            state: ScoreState::default(),
        })
    }

    /// 题目总数
    pub fn total(&self) -> usize {
        self.key.len()
    }

    pub fn correct_answers(&self) -> usize {
        self.state.correct_answers()
    }

    pub fn window(&self) -> TargetWindow {
        self.window
    }

    pub fn accuracy(&self) -> TargetAccuracy {
        self.accuracy
    }

    pub fn key(&self) -> &AnswerKey {
        &self.key
    }

    /// 计算从第 `question_index` 题（含）开始的正确率上下界
    pub fn bounds(&self, question_index: usize) -> Result<AccuracyBounds, SelectionError> {
        let total = self.total();
        if question_index >= total {
            return Err(SelectionError::ExhaustedQuestions {
                question_index,
                total,
            });
        }

        let remaining = (total - question_index) as f64;
        let correct = self.state.correct_answers as f64;
        let min_needed = self.window.min_score() as f64 - correct;
        let max_allowed = self.window.max_score() as f64 - correct;

        Ok(AccuracyBounds {
            min_needed: (min_needed / remaining).max(0.0),
            max_allowed: (max_allowed / remaining).min(1.0),
        })
    }

    /// 决定第 `question_index` 题（从 0 开始）选择哪个选项
    ///
    /// 答对时累计答对数加一。题目应按索引递增顺序依次调用。
    pub fn select_answer(
        &mut self,
        question_index: usize,
        num_options: usize,
        rng: &mut dyn RandomSource,
    ) -> Result<Selection, SelectionError> {
        if num_options < 2 {
            return Err(SelectionError::InvalidOptionCount { num_options });
        }
        let bounds = self.bounds(question_index)?;

        let correct_option = self
            .key
            .get(question_index)
            .ok_or(SelectionError::ExhaustedQuestions {
                question_index,
                total: self.total(),
            })?;
        if correct_option >= num_options {
            return Err(SelectionError::AnswerKeyOutOfRange {
                question: question_index + 1,
                answer: correct_option,
                num_options,
            });
        }

        let decision = if bounds.min_needed > FORCE_CORRECT_THRESHOLD {
            Decision::ForcedCorrect
        } else if bounds.max_allowed < FORCE_INCORRECT_THRESHOLD {
            Decision::ForcedIncorrect
        } else if rng.next_unit() < self.accuracy.value() {
            Decision::SampledCorrect
        } else {
            Decision::SampledIncorrect
        };

        let selected_option = if decision.is_correct() {
            self.state.correct_answers += 1;
            correct_option
        } else {
            pick_wrong_option(correct_option, num_options, rng)
        };

        Ok(Selection {
            question_index,
            correct_option,
            selected_option: selected_option.min(num_options - 1),
            decision,
            bounds,
            correct_so_far: self.state.correct_answers,
        })
    }
}

/// 在除标准答案外的 `num_options - 1` 个选项中均匀选择一个
fn pick_wrong_option(
    correct_option: usize,
    num_options: usize,
    rng: &mut dyn RandomSource,
) -> usize {
    let pick = rng.next_index(num_options - 1);
    if pick >= correct_option {
        pick + 1
    } else {
        pick
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{RngSource, ScriptedSource};

    fn session(answers: Vec<usize>, min: usize, max: usize, accuracy: f64) -> SelectionSession {
        let total = answers.len();
        let key = AnswerKey::new(answers, 4).unwrap();
        let window = TargetWindow::new(min, max, total).unwrap();
        SelectionSession::new(key, window, TargetAccuracy::new(accuracy).unwrap()).unwrap()
    }

    fn run_all(session: &mut SelectionSession, rng: &mut dyn RandomSource) -> Vec<Selection> {
        (0..session.total())
            .map(|i| session.select_answer(i, 4, rng).unwrap())
            .collect()
    }

    #[test]
    fn test_exact_single_point_window() {
        let answers = vec![0, 1, 2, 3, 0, 1, 2, 3, 0, 1];
        for seed in 0..200 {
            let mut s = session(answers.clone(), 5, 5, 0.6);
            let mut rng = RngSource::seeded(seed);
            let selections = run_all(&mut s, &mut rng);

            assert_eq!(s.correct_answers(), 5, "seed {}", seed);
            let counted = selections.iter().filter(|sel| sel.is_correct()).count();
            assert_eq!(counted, 5);
            for sel in &selections {
                assert_eq!(sel.selected_option == sel.correct_option, sel.is_correct());
            }
        }
    }

    #[test]
    fn test_exact_window_forces_when_draws_always_wrong() {
        let answers = vec![0, 1, 2, 3, 0, 1, 2, 3, 0, 1];
        let mut s = session(answers, 5, 5, 0.6);
        // 抽样永远答错，只能靠强制答对达到 5 分
        let mut rng = ScriptedSource::new(vec![0.99], vec![0, 1, 2]);
        let selections = run_all(&mut s, &mut rng);

        assert_eq!(s.correct_answers(), 5);
        let forced = selections
            .iter()
            .filter(|sel| sel.decision == Decision::ForcedCorrect)
            .count();
        assert_eq!(forced, 5);
        assert!(selections[9].is_correct());
    }

    #[test]
    fn test_exact_window_forces_when_draws_always_right() {
        let answers = vec![0, 1, 2, 3, 0, 1, 2, 3, 0, 1];
        let mut s = session(answers, 5, 5, 0.6);
        let mut rng = ScriptedSource::new(vec![0.0], vec![]);
        let selections = run_all(&mut s, &mut rng);

        assert_eq!(s.correct_answers(), 5);
        assert!(selections
            .iter()
            .any(|sel| sel.decision == Decision::ForcedIncorrect));
    }

    #[test]
    fn test_full_accuracy_answers_everything() {
        let mut s = session(vec![3, 0, 2, 1], 0, 4, 1.0);
        let mut rng = RngSource::seeded(11);
        let selections = run_all(&mut s, &mut rng);

        for sel in &selections {
            assert_eq!(sel.selected_option, sel.correct_option);
            assert_eq!(sel.decision, Decision::SampledCorrect);
        }
        assert_eq!(s.correct_answers(), 4);
    }

    #[test]
    fn test_two_options_forced_incorrect_picks_other() {
        let key = AnswerKey::new(vec![0, 0, 0], 2).unwrap();
        let window = TargetWindow::new(0, 0, 3).unwrap();
        let mut s =
            SelectionSession::new(key, window, TargetAccuracy::new(0.5).unwrap()).unwrap();
        let mut rng = RngSource::seeded(3);

        for i in 0..3 {
            let sel = s.select_answer(i, 2, &mut rng).unwrap();
            assert_eq!(sel.decision, Decision::ForcedIncorrect);
            assert_eq!(sel.selected_option, 1);
        }
        assert_eq!(s.correct_answers(), 0);
    }

    #[test]
    fn test_forced_correct_ignores_random_source() {
        let mut s = session(vec![2; 10], 10, 10, 0.0);
        let mut rng = ScriptedSource::new(vec![0.99], vec![]);

        for i in 0..10 {
            let sel = s.select_answer(i, 4, &mut rng).unwrap();
            assert!(sel.bounds.min_needed > FORCE_CORRECT_THRESHOLD);
            assert_eq!(sel.decision, Decision::ForcedCorrect);
            assert_eq!(sel.selected_option, 2);
        }
        assert_eq!(rng.units_drawn(), 0);
    }

    #[test]
    fn test_wrong_option_never_equals_truth() {
        let mut rng = RngSource::seeded(99);
        for correct in 0..4 {
            for _ in 0..200 {
                let wrong = pick_wrong_option(correct, 4, &mut rng);
                assert_ne!(wrong, correct);
                assert!(wrong < 4);
            }
        }
    }

    #[test]
    fn test_wrong_option_mapping_is_exact() {
        // 标准答案为 B 时，抽到 0/1/2 分别对应 A/C/D
        let mut rng = ScriptedSource::new(vec![], vec![0, 1, 2]);
        assert_eq!(pick_wrong_option(1, 4, &mut rng), 0);
        assert_eq!(pick_wrong_option(1, 4, &mut rng), 2);
        assert_eq!(pick_wrong_option(1, 4, &mut rng), 3);
    }

    #[test]
    fn test_sampled_branch_uses_target_accuracy() {
        let mut s = session(vec![1; 100], 0, 100, 0.6);
        let mut rng = ScriptedSource::new(vec![0.59, 0.6], vec![0]);

        let first = s.select_answer(0, 4, &mut rng).unwrap();
        assert_eq!(first.decision, Decision::SampledCorrect);
        assert_eq!(first.selected_option, 1);

        let second = s.select_answer(1, 4, &mut rng).unwrap();
        assert_eq!(second.decision, Decision::SampledIncorrect);
        assert_eq!(second.selected_option, 0);
        assert_eq!(s.correct_answers(), 1);
    }

    #[test]
    fn test_final_score_always_in_window() {
        let windows = [(0, 0), (0, 50), (20, 30), (45, 50), (50, 50), (10, 40), (25, 25)];
        for &(min, max) in &windows {
            for accuracy in [0.0, 0.3, 0.6, 1.0] {
                for seed in 0..20 {
                    let mut key_rng = RngSource::seeded(seed + 1000);
                    let key = AnswerKey::random(50, 4, &mut key_rng);
                    let window = TargetWindow::new(min, max, 50).unwrap();
                    let mut s = SelectionSession::new(
                        key,
                        window,
                        TargetAccuracy::new(accuracy).unwrap(),
                    )
                    .unwrap();
                    let mut rng = RngSource::seeded(seed);
                    run_all(&mut s, &mut rng);

                    assert!(
                        window.contains(s.correct_answers()),
                        "window {}-{}, accuracy {}, seed {}: score {}",
                        min,
                        max,
                        accuracy,
                        seed,
                        s.correct_answers()
                    );
                }
            }
        }
    }

    #[test]
    fn test_default_run_lands_in_window() {
        let mut key_rng = RngSource::seeded(500);
        let key = AnswerKey::random(500, 4, &mut key_rng);
        let window = TargetWindow::new(250, 350, 500).unwrap();
        let accuracy = TargetAccuracy::sample(0.5, 0.7, &mut key_rng).unwrap();
        let mut s = SelectionSession::new(key, window, accuracy).unwrap();
        let mut rng = RngSource::seeded(1);
        run_all(&mut s, &mut rng);

        assert!(window.contains(s.correct_answers()));
    }

    #[test]
    fn test_same_state_same_draws_same_result() {
        let answers = vec![0, 1, 2, 3, 0, 1, 2, 3, 0, 1];
        let mut a = session(answers.clone(), 3, 7, 0.5);
        let mut b = session(answers, 3, 7, 0.5);
        let mut rng_a = RngSource::seeded(5);
        let mut rng_b = RngSource::seeded(5);

        assert_eq!(run_all(&mut a, &mut rng_a), run_all(&mut b, &mut rng_b));
    }

    #[test]
    fn test_invalid_option_count() {
        let mut s = session(vec![0, 0], 0, 2, 0.5);
        let mut rng = ScriptedSource::new(vec![], vec![]);

        assert_eq!(
            s.select_answer(0, 1, &mut rng).unwrap_err(),
            SelectionError::InvalidOptionCount { num_options: 1 }
        );
        assert_eq!(s.correct_answers(), 0);
    }

    #[test]
    fn test_answer_key_out_of_range() {
        let mut s = session(vec![3, 0], 0, 2, 0.5);
        let mut rng = ScriptedSource::new(vec![], vec![]);

        assert_eq!(
            s.select_answer(0, 3, &mut rng).unwrap_err(),
            SelectionError::AnswerKeyOutOfRange {
                question: 1,
                answer: 3,
                num_options: 3
            }
        );
    }

    #[test]
    fn test_exhausted_questions() {
        let mut s = session(vec![0, 1], 0, 2, 0.5);
        let mut rng = ScriptedSource::new(vec![], vec![]);

        assert_eq!(
            s.select_answer(2, 4, &mut rng).unwrap_err(),
            SelectionError::ExhaustedQuestions {
                question_index: 2,
                total: 2
            }
        );
        assert!(s.bounds(2).is_err());
    }

    #[test]
    fn test_window_larger_than_key_rejected() {
        let key = AnswerKey::new(vec![0, 1], 4).unwrap();
        let window = TargetWindow::new(0, 3, 3).unwrap();
        let err = SelectionSession::new(key, window, TargetAccuracy::new(0.5).unwrap())
            .unwrap_err();
        assert!(matches!(err, SelectionError::InfeasibleWindow { total: 2, .. }));
    }

    #[test]
    fn test_bounds_values() {
        let s = session(vec![0; 10], 5, 8, 0.5);
        let bounds = s.bounds(0).unwrap();
        assert!((bounds.min_needed - 0.5).abs() < 1e-12);
        assert!((bounds.max_allowed - 0.8).abs() < 1e-12);

        let s = session(vec![0; 10], 0, 10, 0.5);
        let bounds = s.bounds(5).unwrap();
        assert_eq!(bounds.min_needed, 0.0);
        assert_eq!(bounds.max_allowed, 1.0);
    }
}
