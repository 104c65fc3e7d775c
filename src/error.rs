use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 选项决策错误
    #[error("选项决策错误: {0}")]
    Selection(#[from] SelectionError),
    /// 答案表错误
    #[error("答案表错误: {0}")]
    AnswerKey(#[from] AnswerKeyError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 选项决策错误
///
/// 均属于调用方错误，出现时整个作答过程应当终止
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// 选项数量不足，无法构造错误选项
    #[error("选项数量 {num_options} 无效，至少需要 2 个选项")]
    InvalidOptionCount { num_options: usize },
    /// 答案表中的正确选项超出本题选项范围
    #[error("第 {question} 题的标准答案 {answer} 超出范围 [0, {num_options})")]
    AnswerKeyOutOfRange {
        question: usize,
        answer: usize,
        num_options: usize,
    },
    /// 题目索引超出题目总数
    #[error("题目索引 {question_index} 超出题目总数 {total}")]
    ExhaustedQuestions { question_index: usize, total: usize },
    /// 目标分数区间无法达成
    #[error("目标分数区间 [{min_score}, {max_score}] 对 {total} 道题无效")]
    InfeasibleWindow {
        min_score: usize,
        max_score: usize,
        total: usize,
    },
}

/// 答案表错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerKeyError {
    /// 答案表为空
    #[error("答案表为空")]
    Empty,
    /// 无法识别的答案字母
    #[error("第 {line} 行的答案 '{letter}' 无法识别")]
    InvalidLetter { line: usize, letter: String },
    /// 无法识别的行格式
    #[error("第 {line} 行格式无法解析: {content}")]
    MalformedLine { line: usize, content: String },
    /// 题号不连续
    #[error("题号不连续: 期望 {expected}，实际 {found}")]
    NumberingGap { expected: usize, found: usize },
    /// 答案超出选项范围
    #[error("第 {question} 题的答案 {answer} 超出范围 [0, {num_options})")]
    OptionOutOfRange {
        question: usize,
        answer: usize,
        num_options: usize,
    },
    /// 答案数量与题目总数不符
    #[error("答案表有 {actual} 个答案，题目总数为 {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// JSON 解析失败
    #[error("JSON解析失败 ({path}): {source}")]
    JsonParseFailed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// JSON 序列化失败
    #[error("JSON序列化失败 ({path}): {source}")]
    JsonSerializeFailed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 配置错误
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// 选项数量不足
    #[error("选项数量 {0} 无效，至少需要 2 个选项")]
    InvalidOptionCount(usize),
    /// 题目总数为 0
    #[error("题目总数不能为 0")]
    NoQuestions,
    /// 分数区间上下界颠倒
    #[error("最低分 {min_score} 大于最高分 {max_score}")]
    InvertedWindow { min_score: usize, max_score: usize },
    /// 分数上界超过题目总数
    #[error("最高分 {max_score} 超过题目总数 {total}")]
    WindowExceedsTotal { max_score: usize, total: usize },
    /// 正确率范围无效
    #[error("正确率范围 [{min}, {max}] 无效")]
    InvalidAccuracyRange { min: f64, max: f64 },
    /// 每页题目数为 0
    #[error("每页题目数不能为 0")]
    EmptyPage,
}

// ========== 便捷构造函数 ==========

impl FileError {
    /// 创建文件读取错误
    pub fn read(path: impl Into<String>, source: std::io::Error) -> Self {
        FileError::ReadFailed {
            path: path.into(),
            source,
        }
    }

    /// 创建文件写入错误
    pub fn write(path: impl Into<String>, source: std::io::Error) -> Self {
        FileError::WriteFailed {
            path: path.into(),
            source,
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
