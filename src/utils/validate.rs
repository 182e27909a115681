use once_cell::sync::Lazy;
use regex::Regex;

// 附件名：不含路径分隔符，不以点开头
static ATTACHMENT_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^./\\][^/\\]*$").expect("Invalid attachment name regex"));

pub fn validate_title(title: &str) -> Result<(), &'static str> {
    if title.trim().is_empty() {
        return Err("Title must not be empty");
    }
    if title.len() > 255 {
        return Err("Title must not exceed 255 characters");
    }
    Ok(())
}

/// 课程时间窗口校验：开始时间必须早于结束时间
pub fn validate_time_window(
    begin_at: chrono::DateTime<chrono::Utc>,
    end_at: chrono::DateTime<chrono::Utc>,
) -> Result<(), &'static str> {
    if begin_at >= end_at {
        return Err("Begin time must be earlier than end time");
    }
    Ok(())
}

/// 解析题目ID列表
///
/// 接受逗号或空白分隔的文本，任何非数字项都是校验错误。
pub fn parse_problem_ids(raw: &str) -> Result<Vec<i64>, String> {
    let mut ids = Vec::new();
    for token in raw.split([',', '\n', '\r', '\t', ' ']) {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let id: i64 = token
            .parse()
            .map_err(|_| format!("Invalid problem id: '{token}'"))?;
        ids.push(id);
    }
    Ok(ids)
}

pub fn validate_attachment_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() || name.len() > 255 {
        return Err("Attachment name length must be between 1 and 255 characters");
    }
    if !ATTACHMENT_NAME_RE.is_match(name) {
        return Err("Attachment name must not contain path separators or start with a dot");
    }
    Ok(())
}
