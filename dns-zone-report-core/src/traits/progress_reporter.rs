//! 进度通知抽象 Trait

/// Task-level progress notifications.
///
/// Every `on_start` is followed by exactly one `on_success` or `on_error`.
pub trait ProgressReporter: Send + Sync {
    fn on_start(&self, label: &str);

    fn on_success(&self);

    fn on_error(&self, message: &str);
}

