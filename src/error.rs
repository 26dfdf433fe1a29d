use thiserror::Error;

/// 应用程序错误类型
///
/// 作业级失败（读取/解析/结构）终止当前作业；条目级失败
/// （单个题目或章节文件）记录后跳过，处理继续
#[derive(Debug, Error)]
pub enum AppError {
    /// 主输入文件缺失或不可读，对该作业致命
    #[error("读取输入文件失败 ({path}): {source}")]
    InputRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON 解析失败，对该作业致命
    #[error("JSON解析失败 ({path}): {source}")]
    JsonParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// 期望的顶层字段缺失或形状不符，对该作业致命，批次中的
    /// 其他作业继续
    #[error("输入结构不符 ({path}): 缺少或无法解析字段 {field}")]
    Schema { path: String, field: &'static str },

    /// `questions` 键对应的值不是数组
    #[error("`questions` 键的值不是数组 (实际为 {found})")]
    MalformedQuestions { found: &'static str },

    /// 输出目录创建失败，对该作业致命
    #[error("创建输出目录失败 ({path}): {source}")]
    OutputDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 单个题目记录无法解析，记录后跳过
    #[error("题目记录无法解析: {source}")]
    ItemParse {
        #[source]
        source: serde_json::Error,
    },

    /// 题目记录缺少 number 字段，无法确定输出文件名
    #[error("题目记录缺少 number 字段")]
    MissingNumber,

    /// 单个输出文件写入失败，记录后跳过
    #[error("写入输出文件失败 ({path}): {source}")]
    ItemWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// SVG 文档中未找到 <svg> 根标签
    #[error("未找到 <svg> 根标签")]
    SvgRootMissing,

    /// 正则表达式构建失败
    #[error("正则表达式错误: {0}")]
    Regex(#[from] regex::Error),
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
