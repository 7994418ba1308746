use std::sync::Mutex;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub variant: ToastVariant,
    pub title: String,
    pub description: Option<String>,
}

impl Toast {
    pub fn success(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            variant: ToastVariant::Default,
            title: title.into(),
            description,
        }
    }

    pub fn error(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            title: title.into(),
            description,
        }
    }
}

/// 提示输出，发出即忘
pub trait ToastSink: Send + Sync {
    fn push(&self, toast: Toast);
}

/// 记录全部提示
#[derive(Debug, Default)]
pub struct ToastLog {
    entries: Mutex<Vec<Toast>>,
}

impl ToastLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Toast> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn last(&self) -> Option<Toast> {
        self.entries().pop()
    }
}

impl ToastSink for ToastLog {
    fn push(&self, toast: Toast) {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(toast);
    }
}

/// 通过 tracing 输出提示
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingToasts;

impl ToastSink for TracingToasts {
    fn push(&self, toast: Toast) {
        let description = toast.description.unwrap_or_default();
        match toast.variant {
            ToastVariant::Default => info!("{} {}", toast.title, description),
            ToastVariant::Destructive => warn!("{} {}", toast.title, description),
        }
    }
}
