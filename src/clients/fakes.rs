//! 测试用的内存后端

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::clients::{CommentaryBackend, ScoringBackend};
use crate::error::{CommentaryError, ScoringError};
use crate::models::{Attribute, ScoreSet};

/// 返回固定评分（或固定错误）的评分后端
pub struct FakeScorer {
    pairs: Vec<(Attribute, f64)>,
    failure: Option<(Option<u16>, String)>,
    calls: AtomicUsize,
}

impl FakeScorer {
    pub fn returning(pairs: &[(Attribute, f64)]) -> Self {
        Self {
            pairs: pairs.to_vec(),
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(status: Option<u16>, message: &str) -> Self {
        Self {
            pairs: Vec::new(),
            failure: Some((status, message.to_string())),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ScoringBackend for FakeScorer {
    async fn score(
        &self,
        _text: &str,
        _languages: &[String],
        _attributes: &[Attribute],
    ) -> Result<ScoreSet, ScoringError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some((status, message)) = &self.failure {
            return Err(ScoringError::RequestFailed {
                status: *status,
                message: message.clone(),
            });
        }
        ScoreSet::from_pairs(self.pairs.iter().copied())
    }
}

/// 记录提示词的评论后端
pub struct FakeCommentator {
    reply: Result<String, String>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl FakeCommentator {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CommentaryBackend for FakeCommentator {
    async fn generate(
        &self,
        user_message: &str,
        _system_message: Option<&str>,
    ) -> Result<String, CommentaryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(user_message.to_string());
        self.reply
            .clone()
            .map_err(|message| CommentaryError::ApiCallFailed {
                model: "fake".to_string(),
                message,
            })
    }
}
