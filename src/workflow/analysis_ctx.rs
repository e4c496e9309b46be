//! 请求处理上下文
//!
//! 封装"我正在处理第几个请求"这一信息，仅用于日志

use std::fmt::Display;

use crate::utils::truncate_text;

/// 请求处理上下文
#[derive(Debug, Clone)]
pub struct AnalysisCtx {
    /// 进程内递增的请求编号
    pub request_id: u64,

    /// 文本预览（已截断）
    pub text_preview: String,
}

impl AnalysisCtx {
    /// 创建新的请求上下文
    pub fn new(request_id: u64, text: &str) -> Self {
        Self {
            request_id,
            text_preview: truncate_text(text, 40),
        }
    }
}

impl Display for AnalysisCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[请求 #{}]", self.request_id)
    }
}
