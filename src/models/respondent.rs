use crate::infrastructure::RandomSource;
use std::fmt;
use std::ops::RangeInclusive;

/// 第一页可选的名字
pub const RESPONDENT_NAMES: [&str; 27] = [
    "Alex", "Jordan", "Taylor", "Casey", "Morgan", "Riley", "Avery", "Quinn", "Jamie", "Blake",
    "Skyler", "Dakota", "Cameron", "Reese", "Finley", "Harley", "Phoenix", "Robin", "Charlie",
    "Emerson", "Apple", "Orange", "Melon", "Skye", "Euro", "Luna", "Ginger",
];

/// 年龄范围（含两端）
pub const RESPONDENT_AGES: RangeInclusive<u32> = 18..=21;

/// 表单第一页填写的作答者信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Respondent {
    pub name: String,
    pub age: u32,
}

impl Respondent {
    /// 随机抽取名字和年龄
    pub fn random(rng: &mut dyn RandomSource) -> Self {
        let name = RESPONDENT_NAMES[rng.next_index(RESPONDENT_NAMES.len())];
        let span = (RESPONDENT_AGES.end() - RESPONDENT_AGES.start() + 1) as usize;
        let age = RESPONDENT_AGES.start() + rng.next_index(span) as u32;

        Self {
            name: name.to_string(),
            age,
        }
    }
}

impl fmt::Display for Respondent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} 岁", self.name, self.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{RngSource, ScriptedSource};

    #[test]
    fn test_seeded_respondent_in_range() {
        for seed in 0..100 {
            let respondent = Respondent::random(&mut RngSource::seeded(seed));
            assert!(RESPONDENT_NAMES.contains(&respondent.name.as_str()));
            assert!(RESPONDENT_AGES.contains(&respondent.age));
        }
    }

    #[test]
    fn test_same_seed_same_respondent() {
        let a = Respondent::random(&mut RngSource::seeded(5));
        let b = Respondent::random(&mut RngSource::seeded(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_scripted_draws_reach_both_ends() {
        let first = Respondent::random(&mut ScriptedSource::new(vec![], vec![0, 0]));
        assert_eq!(
            first,
            Respondent {
                name: "Alex".to_string(),
                age: 18,
            }
        );

        let last = Respondent::random(&mut ScriptedSource::new(vec![], vec![26, 3]));
        assert_eq!(last.name, "Ginger");
        assert_eq!(last.age, 21);
        assert_eq!(last.to_string(), "Ginger, 21 岁");
    }
}
