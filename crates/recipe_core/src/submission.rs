use crate::RequestId;

/// URL draft and the in-flight extraction request, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmissionState {
    draft_url: String,
    in_flight: Option<RequestId>,
}

impl SubmissionState {
    pub fn draft_url(&self) -> &str {
        &self.draft_url
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether a submit would be accepted right now.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && !self.draft_url.trim().is_empty()
    }

    pub(crate) fn set_draft(&mut self, text: String) {
        self.draft_url = text;
    }

    /// Enters Submitting and returns the URL to send, or `None` when the draft
    /// is blank or a request is already running.
    pub(crate) fn begin(&mut self, request_id: RequestId) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        self.in_flight = Some(request_id);
        Some(self.draft_url.trim().to_string())
    }

    /// Returns to Idle if `request_id` is the one in flight.
    pub(crate) fn finish(&mut self, request_id: RequestId) -> bool {
        if self.in_flight != Some(request_id) {
            return false;
        }
        self.in_flight = None;
        true
    }

    pub(crate) fn clear_draft(&mut self) {
        self.draft_url.clear();
    }
}
