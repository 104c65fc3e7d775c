use crate::error::{AppResult, ConfigError, FileError};
use serde::Deserialize;
use std::str::FromStr;

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 题目总数
    pub total_questions: usize,
    /// 每题选项数
    pub num_options: usize,
    /// 目标最低分（含）
    pub min_score: usize,
    /// 目标最高分（含）
    pub max_score: usize,
    /// 目标正确率抽样下限
    pub accuracy_min: f64,
    /// 目标正确率抽样上限
    pub accuracy_max: f64,
    /// 每页题目数
    pub questions_per_page: usize,
    /// 每隔多少题输出一次进度
    pub progress_interval: usize,
    /// 答案表文件（.json 为整数数组，其余为 "1. C" 字母格式），为空时随机生成
    pub answer_key_path: Option<String>,
    /// 答案表不足题目总数时是否用随机答案补齐
    pub pad_short_key: bool,
    /// 作答完成后保存答案表的位置
    pub save_answer_key_path: Option<String>,
    /// 作答记录文件
    pub transcript_file: String,
    /// 输出日志文件
    pub output_log_file: String,
    /// 随机种子，为空时使用系统熵
    pub seed: Option<u64>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            total_questions: 500,
            num_options: 4,
            min_score: 250,
            max_score: 350,
            accuracy_min: 0.50,
            accuracy_max: 0.70,
            questions_per_page: 10,
            progress_interval: 50,
            answer_key_path: None,
            pad_short_key: false,
            save_answer_key_path: Some("answer_key.json".to_string()),
            transcript_file: "transcript.txt".to_string(),
            output_log_file: "output.txt".to_string(),
            seed: None,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 从环境变量加载（未设置或无法解析的项使用默认值）
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 加载配置：若设置了 `CONFIG_FILE` 先读取 TOML 文件，再用环境变量覆盖
    pub fn load() -> AppResult<Self> {
        let config = match std::env::var("CONFIG_FILE") {
            Ok(path) => Self::from_toml_file(&path)?.with_env_overrides(),
            Err(_) => Self::from_env(),
        };
        config.validate()?;
        Ok(config)
    }

    /// 从 TOML 文件加载
    pub fn from_toml_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| FileError::read(path, e))?;
        let config = Self::from_toml_str(&content).map_err(|source| FileError::TomlParseFailed {
            path: path.to_string(),
            source,
        })?;
        Ok(config)
    }

    /// 从 TOML 文本解析，缺失的字段使用默认值
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn with_env_overrides(self) -> Self {
        Self {
            total_questions: env_or("TOTAL_QUESTIONS", self.total_questions),
            num_options: env_or("NUM_OPTIONS", self.num_options),
            min_score: env_or("MIN_SCORE", self.min_score),
            max_score: env_or("MAX_SCORE", self.max_score),
            accuracy_min: env_or("ACCURACY_MIN", self.accuracy_min),
            accuracy_max: env_or("ACCURACY_MAX", self.accuracy_max),
            questions_per_page: env_or("QUESTIONS_PER_PAGE", self.questions_per_page),
            progress_interval: env_or("PROGRESS_INTERVAL", self.progress_interval),
            answer_key_path: std::env::var("ANSWER_KEY_PATH").ok().or(self.answer_key_path),
            pad_short_key: env_or("PAD_SHORT_KEY", self.pad_short_key),
            save_answer_key_path: std::env::var("SAVE_ANSWER_KEY_PATH")
                .ok()
                .or(self.save_answer_key_path),
            transcript_file: std::env::var("TRANSCRIPT_FILE").unwrap_or(self.transcript_file),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(self.output_log_file),
            seed: std::env::var("RUN_SEED").ok().and_then(|v| v.parse().ok()).or(self.seed),
            verbose_logging: env_or("VERBOSE_LOGGING", self.verbose_logging),
        }
    }

    /// 校验配置的一致性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_questions == 0 {
            return Err(ConfigError::NoQuestions);
        }
        if self.num_options < 2 {
            return Err(ConfigError::InvalidOptionCount(self.num_options));
        }
        if self.min_score > self.max_score {
            return Err(ConfigError::InvertedWindow {
                min_score: self.min_score,
                max_score: self.max_score,
            });
        }
        if self.max_score > self.total_questions {
            return Err(ConfigError::WindowExceedsTotal {
                max_score: self.max_score,
                total: self.total_questions,
            });
        }
        let unit = 0.0..=1.0;
        if !unit.contains(&self.accuracy_min)
            || !unit.contains(&self.accuracy_max)
            || self.accuracy_min > self.accuracy_max
        {
            return Err(ConfigError::InvalidAccuracyRange {
                min: self.accuracy_min,
                max: self.accuracy_max,
            });
        }
        if self.questions_per_page == 0 {
            return Err(ConfigError::EmptyPage);
        }
        Ok(())
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
