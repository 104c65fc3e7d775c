use crate::error::AnswerKeyError;
use crate::infrastructure::RandomSource;
use serde::{Deserialize, Serialize};

/// 标准答案表
///
/// 每道题一个正确选项索引（从 0 开始，0=A, 1=B ...）。加载后不可修改。
/// 序列化格式为整数 JSON 数组。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerKey {
    answers: Vec<usize>,
}

impl AnswerKey {
    /// 创建答案表并校验每个答案都在 `[0, num_options)` 内
    pub fn new(answers: Vec<usize>, num_options: usize) -> Result<Self, AnswerKeyError> {
        let key = Self { answers };
        key.validate(num_options)?;
        Ok(key)
    }

    /// 随机生成答案表
    pub fn random(len: usize, num_options: usize, rng: &mut dyn RandomSource) -> Self {
        let answers = (0..len).map(|_| rng.next_index(num_options)).collect();
        Self { answers }
    }

    /// 用随机答案补齐到 `len` 道题
    pub fn padded(mut self, len: usize, num_options: usize, rng: &mut dyn RandomSource) -> Self {
        while self.answers.len() < len {
            self.answers.push(rng.next_index(num_options));
        }
        self
    }

    /// 校验答案表非空且所有答案在范围内
    pub fn validate(&self, num_options: usize) -> Result<(), AnswerKeyError> {
        if self.answers.is_empty() {
            return Err(AnswerKeyError::Empty);
        }
        match self
            .answers
            .iter()
            .enumerate()
            .find(|(_, &answer)| answer >= num_options)
        {
            Some((index, &answer)) => Err(AnswerKeyError::OptionOutOfRange {
                question: index + 1,
                answer,
                num_options,
            }),
            None => Ok(()),
        }
    }

    /// 校验题目数量
    pub fn expect_len(&self, expected: usize) -> Result<(), AnswerKeyError> {
        if self.answers.len() != expected {
            return Err(AnswerKeyError::LengthMismatch {
                expected,
                actual: self.answers.len(),
            });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// 获取第 `index` 题（从 0 开始）的正确选项
    pub fn get(&self, index: usize) -> Option<usize> {
        self.answers.get(index).copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.answers
    }
}

/// 选项索引转字母（0 → 'A'）
pub fn option_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map(|i| (b'A' + i) as char)
        .unwrap_or('?')
}

/// 字母转选项索引（'A' / 'a' → 0），非字母返回 None
pub fn letter_to_index(letter: char) -> Option<usize> {
    if letter.is_ascii_alphabetic() {
        Some((letter.to_ascii_uppercase() as u8 - b'A') as usize)
    } else {
        None
    }
}
