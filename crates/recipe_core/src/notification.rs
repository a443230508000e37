/// The two status lines shown above the recipe. The slots are independent:
/// setting one never clears the other.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationState {
    error: Option<String>,
    success: Option<String>,
}

impl NotificationState {
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    pub(crate) fn set_error(&mut self, text: impl Into<String>) {
        self.error = Some(text.into());
    }

    pub(crate) fn set_success(&mut self, text: impl Into<String>) {
        self.success = Some(text.into());
    }

    pub(crate) fn clear(&mut self) {
        self.error = None;
        self.success = None;
    }

    pub fn is_empty(&self) -> bool {
        self.error.is_none() && self.success.is_none()
    }
}
