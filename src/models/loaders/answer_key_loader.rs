use crate::error::{AnswerKeyError, AppResult, FileError};
use crate::models::answer_key::{letter_to_index, AnswerKey};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tokio::fs;

/// 字母答案行：`12. C` 或 `12) C`
static LETTER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s*[.)]\s*(\S+)$").expect("答案行正则无效"));

/// 解析字母格式的答案表
///
/// 每行形如 `12. C`，空行忽略。题号必须从 1 开始连续递增。
/// 无法识别的字母直接报错，不做默认值替换。
pub fn parse_letter_key(text: &str, num_options: usize) -> AppResult<AnswerKey> {
    let mut answers = Vec::new();

    for (line_index, raw) in text.lines().enumerate() {
        let line_no = line_index + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let caps = LETTER_LINE.captures(line).ok_or_else(|| AnswerKeyError::MalformedLine {
            line: line_no,
            content: line.to_string(),
        })?;

        let number: usize = caps[1]
            .parse()
            .map_err(|_| AnswerKeyError::MalformedLine {
                line: line_no,
                content: line.to_string(),
            })?;
        let expected = answers.len() + 1;
        if number != expected {
            return Err(AnswerKeyError::NumberingGap {
                expected,
                found: number,
            }
            .into());
        }

        let letter = &caps[2];
        let mut chars = letter.chars();
        let index = match (chars.next(), chars.next()) {
            (Some(c), None) => letter_to_index(c).filter(|i| *i < num_options),
            _ => None,
        };
        let index = index.ok_or_else(|| AnswerKeyError::InvalidLetter {
            line: line_no,
            letter: letter.to_string(),
        })?;

        answers.push(index);
    }

    tracing::info!("从答案表中解析出 {} 个答案", answers.len());
    Ok(AnswerKey::new(answers, num_options)?)
}

/// 从文件加载答案表
///
/// `.json` 文件按整数数组解析，其余按字母格式解析
pub async fn load_answer_key(path: &Path, num_options: usize) -> AppResult<AnswerKey> {
    let path_str = path.display().to_string();
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| FileError::read(&path_str, e))?;

    let is_json = path.extension().and_then(|s| s.to_str()) == Some("json");
    let key = if is_json {
        let key: AnswerKey =
            serde_json::from_str(&content).map_err(|source| FileError::JsonParseFailed {
                path: path_str.clone(),
                source,
            })?;
        key.validate(num_options)?;
        key
    } else {
        parse_letter_key(&content, num_options)?
    };

    tracing::info!("成功加载答案表 {}: {} 道题", path_str, key.len());
    Ok(key)
}

/// 将答案表保存为 JSON 数组
pub async fn save_answer_key(path: &Path, key: &AnswerKey) -> AppResult<()> {
    let path_str = path.display().to_string();
    let json = serde_json::to_string(key).map_err(|source| FileError::JsonSerializeFailed {
        path: path_str.clone(),
        source,
    })?;
    fs::write(path, json)
        .await
        .map_err(|e| FileError::write(&path_str, e))?;

    tracing::info!("答案表已保存至 {}", path_str);
    Ok(())
}
