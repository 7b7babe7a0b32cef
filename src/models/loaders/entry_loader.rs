use std::collections::HashMap;
use std::path::Path;

use tokio::fs;

use crate::error::{AppError, AppResult, EntryDefect};
use crate::models::job::Job;

/// 注释行前缀
const COMMENT_MARKER: char = '#';
/// 名称与地址之间的分隔符（按第一次出现切分）
const SEPARATOR: char = ':';

/// 把条目文本解析为有序任务列表
///
/// 每行格式为 `名称:地址`，空行和 `#` 开头的行被跳过。
/// 遇到第一处错误立即返回，不再解析后续行。
pub fn parse_entries(content: &str) -> AppResult<Vec<Job>> {
    let mut jobs = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for (index, raw_line) in content.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            continue;
        }

        let (name, source) = line
            .split_once(SEPARATOR)
            .ok_or_else(|| AppError::malformed_entry(line_number, EntryDefect::MissingSeparator))?;

        let name = name.trim();
        let source = source.trim();

        if name.is_empty() {
            return Err(AppError::malformed_entry(line_number, EntryDefect::EmptyName));
        }
        if source.is_empty() {
            return Err(AppError::malformed_entry(line_number, EntryDefect::EmptyLocator));
        }

        if !is_safe_name(name) {
            return Err(AppError::malformed_entry(
                line_number,
                EntryDefect::UnsafeName {
                    name: name.to_string(),
                },
            ));
        }

        if let Some(&first_line) = seen.get(name) {
            return Err(AppError::malformed_entry(
                line_number,
                EntryDefect::DuplicateName {
                    name: name.to_string(),
                    first_line,
                },
            ));
        }
        seen.insert(name.to_string(), line_number);

        jobs.push(Job::new(name, source));
    }

    Ok(jobs)
}

/// 名称直接作为输出文件名，不允许跳出输出目录
fn is_safe_name(name: &str) -> bool {
    name != "." && name != ".." && !name.contains(['/', '\\'])
}

/// 从文件加载任务列表
pub async fn load_entries(path: &Path) -> AppResult<Vec<Job>> {
    if !fs::try_exists(path).await.unwrap_or(false) {
        return Err(AppError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::io(format!("无法读取输入文件 {}", path.display()), e))?;

    let jobs = parse_entries(&content)?;
    tracing::debug!("从 {} 解析出 {} 个条目", path.display(), jobs.len());

    Ok(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_name_and_locator() {
        let jobs = parse_entries("  alice :  https://example.com/a  \n").unwrap();
        assert_eq!(jobs, vec![Job::new("alice", "https://example.com/a")]);
    }

    #[test]
    fn test_parse_splits_on_first_separator_only() {
        let jobs = parse_entries("clip:https://example.com/watch?v=1:2").unwrap();
        assert_eq!(jobs[0].name(), "clip");
        assert_eq!(jobs[0].source(), "https://example.com/watch?v=1:2");
    }

    #[test]
    fn test_parse_skips_blank_and_comment_lines() {
        let content = "\n# 注释\n   \n  # 缩进注释\nalice:https://example.com/a\n\nbob:https://example.com/b\n";
        let jobs = parse_entries(content).unwrap();
        let names: Vec<_> = jobs.iter().map(Job::name).collect();
        assert_eq!(names, vec!["alice", "bob"]);
    }

    #[test]
    fn test_parse_only_comments_is_empty() {
        assert!(parse_entries("# a\n\n# b\n").unwrap().is_empty());
        assert!(parse_entries("").unwrap().is_empty());
    }

    #[test]
    fn test_missing_separator_reports_line() {
        let err = parse_entries("alice:https://example.com/a\nbob-bad-line-no-colon\n").unwrap_err();
        match err {
            AppError::MalformedEntry { line, defect } => {
                assert_eq!(line, 2);
                assert_eq!(defect, EntryDefect::MissingSeparator);
            }
            other => panic!("意外的错误: {other}"),
        }
    }

    #[test]
    fn test_line_numbers_count_skipped_lines() {
        let err = parse_entries("# header\n\nalice:https://example.com/a\nbroken\n").unwrap_err();
        assert!(matches!(err, AppError::MalformedEntry { line: 4, .. }));
    }

    #[test]
    fn test_empty_sides_rejected() {
        let err = parse_entries(" :https://example.com/a").unwrap_err();
        assert_eq!(err.entry_defect(), Some(&EntryDefect::EmptyName));

        let err = parse_entries("alice:   ").unwrap_err();
        assert_eq!(err.entry_defect(), Some(&EntryDefect::EmptyLocator));
    }

    #[test]
    fn test_fail_fast_ignores_later_lines() {
        // 第 3 行也有错误，但只报告第 2 行
        let err = parse_entries("a:x\nbroken\n:also-broken\n").unwrap_err();
        assert!(matches!(err, AppError::MalformedEntry { line: 2, .. }));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = parse_entries("alice:https://a\nbob:https://b\nalice:https://c\n").unwrap_err();
        match err {
            AppError::MalformedEntry { line, defect } => {
                assert_eq!(line, 3);
                assert_eq!(
                    defect,
                    EntryDefect::DuplicateName {
                        name: "alice".to_string(),
                        first_line: 1
                    }
                );
            }
            other => panic!("意外的错误: {other}"),
        }
    }

    #[test]
    fn test_generated_entries_round_trip() {
        let names = ["alice", "视频 01", "clip-2024_final", "50% off", "über", "a.b.c"];
        let locators = [
            "https://example.com/watch?v=1",
            "https://example.com:8080/x?t=1:2:3",
            "ytsearch:猫 视频",
            "https://例子.测试/路径",
            "file:///tmp/a b.mp4",
        ];
        let pads = ["", " ", "\t", "  \t "];

        for (i, name) in names.iter().enumerate() {
            for (j, locator) in locators.iter().enumerate() {
                let pad = pads[(i + j) % pads.len()];
                let line = format!("{pad}{name}{pad}:{pad}{locator}{pad}");
                let jobs = parse_entries(&line).unwrap();
                assert_eq!(jobs, vec![Job::new(*name, *locator)], "{line:?}");
            }
        }

        // 整个表格放进同一个文件，顺序与内容保持不变
        let mut content = String::new();
        let mut expected = Vec::new();
        for (i, name) in names.iter().enumerate() {
            let locator = locators[i % locators.len()];
            content.push_str(&format!("{}:{}\n", name, locator));
            expected.push(Job::new(*name, locator));
        }
        assert_eq!(parse_entries(&content).unwrap(), expected);
    }

    #[test]
    fn test_path_like_names_rejected() {
        for (content, bad) in [
            ("../../escape:https://a", "../../escape"),
            ("b:https://b\nx/../b:https://c", "x/../b"),
            ("dir\\file:https://a", "dir\\file"),
            ("..:https://a", ".."),
            (".:https://a", "."),
        ] {
            let err = parse_entries(content).unwrap_err();
            assert_eq!(
                err.entry_defect(),
                Some(&EntryDefect::UnsafeName {
                    name: bad.to_string()
                }),
                "{content}"
            );
        }
    }

    #[test]
    fn test_dots_inside_name_allowed() {
        let jobs = parse_entries("v1..final:https://a\n.hidden:https://b\n50% off:https://c\n").unwrap();
        let names: Vec<_> = jobs.iter().map(Job::name).collect();
        assert_eq!(names, vec!["v1..final", ".hidden", "50% off"]);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_entries(&dir.path().join("nope.txt")).await.unwrap_err();
        assert!(matches!(err, AppError::InputNotFound { .. }));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("urls.txt");
        std::fs::write(&path, "alice:https://example.com/a\n").unwrap();
        let jobs = load_entries(&path).await.unwrap();
        assert_eq!(jobs.len(), 1);
    }
}
