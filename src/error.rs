use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::FormatClass;

/// 应用程序错误类型
///
/// 解析期、校验期、前置检查期的错误都是致命的，会在任何外部进程启动前终止整个运行。
/// 单个任务的失败不走这里，见 [`AttemptError`]。
#[derive(Debug, Error)]
pub enum AppError {
    /// 条目文件中某一行格式错误（行号从 1 开始）
    #[error("第 {line} 行格式错误: {defect}")]
    MalformedEntry { line: usize, defect: EntryDefect },

    /// 未知的格式代码
    #[error("无效的格式代码: {code}。可选格式: {valid}")]
    InvalidFormat { code: String, valid: String },

    /// 扩展名与格式的媒体类别不兼容
    #[error("扩展名 '{extension}' 与{class}格式不兼容。可选扩展名: {valid}")]
    IncompatibleExtension {
        extension: String,
        class: FormatClass,
        valid: String,
    },

    /// 数值配置越界
    #[error("配置项 {field} 无效: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// 外部依赖缺失
    #[error("缺少依赖: {}", .missing.join(", "))]
    MissingDependency { missing: Vec<String> },

    /// 条目文件不存在
    #[error("输入文件不存在: {}", .path.display())]
    InputNotFound { path: PathBuf },

    /// 配置文件读取或解析失败
    #[error("配置文件错误 ({}): {message}", .path.display())]
    ConfigFile { path: PathBuf, message: String },

    /// 文件操作失败
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// 条目行的具体缺陷
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryDefect {
    /// 缺少 ':' 分隔符
    MissingSeparator,
    /// 名称为空
    EmptyName,
    /// 地址为空
    EmptyLocator,
    /// 名称含路径分隔符或为 `.` / `..`，会写出输出目录
    UnsafeName { name: String },
    /// 名称与前面某行重复
    DuplicateName { name: String, first_line: usize },
}

impl fmt::Display for EntryDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryDefect::MissingSeparator => write!(f, "缺少 ':' 分隔符 (missing separator)"),
            EntryDefect::EmptyName => write!(f, "名称为空"),
            EntryDefect::EmptyLocator => write!(f, "地址为空"),
            EntryDefect::UnsafeName { name } => {
                write!(f, "名称 '{}' 不能包含路径分隔符或为 '.' / '..'", name)
            }
            EntryDefect::DuplicateName { name, first_line } => {
                write!(f, "名称 '{}' 与第 {} 行重复", name, first_line)
            }
        }
    }
}

/// 单次尝试失败的原因
///
/// 只在执行器内部用于重试判断和日志，不会向上传播。
#[derive(Debug, Error)]
pub enum AttemptError {
    /// 进程无法启动（工具缺失、I/O 错误、超时）
    #[error("无法执行外部工具: {0}")]
    Spawn(#[from] std::io::Error),

    /// 进程以非零状态退出
    #[error("退出码 {}: {stderr}", .code.map_or_else(|| "未知".to_string(), |c| c.to_string()))]
    ExitStatus { code: Option<i32>, stderr: String },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建格式错误
    pub fn malformed_entry(line: usize, defect: EntryDefect) -> Self {
        AppError::MalformedEntry { line, defect }
    }

    /// 创建文件操作错误
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        AppError::Io {
            context: context.into(),
            source,
        }
    }

    /// 缺陷类型（仅对 `MalformedEntry` 有值）
    pub fn entry_defect(&self) -> Option<&EntryDefect> {
        match self {
            AppError::MalformedEntry { defect, .. } => Some(defect),
            _ => None,
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
