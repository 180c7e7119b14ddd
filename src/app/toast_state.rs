use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub kind: ToastKind,
    pub expires_at: Instant,
}

#[derive(Debug, Clone, Default)]
pub struct ToastState {
    toasts: Vec<Toast>,
}

impl ToastState {
    pub const TIMEOUT: Duration = Duration::from_secs(5);

    pub fn push_at(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        kind: ToastKind,
        now: Instant,
    ) {
        self.toasts.push(Toast {
            title: title.into(),
            message: message.into(),
            kind,
            expires_at: now + Self::TIMEOUT,
        });
    }

    pub fn clear_expired_at(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.expires_at > now);
        before != self.toasts.len()
    }

    pub fn next_expiry(&self) -> Option<Instant> {
        self.toasts.iter().map(|toast| toast.expires_at).min()
    }

    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_expires_after_five_seconds() {
        let now = Instant::now();
        let mut state = ToastState::default();
        state.push_at("Success", "Data refreshed successfully", ToastKind::Success, now);

        assert!(!state.clear_expired_at(now + Duration::from_millis(4999)));
        assert_eq!(state.visible().len(), 1);

        assert!(state.clear_expired_at(now + Duration::from_secs(5)));
        assert!(state.visible().is_empty());
    }

    #[test]
    fn next_expiry_tracks_oldest_toast() {
        let now = Instant::now();
        let mut state = ToastState::default();
        state.push_at("a", "", ToastKind::Info, now);
        state.push_at("b", "", ToastKind::Error, now + Duration::from_secs(2));

        assert_eq!(state.next_expiry(), Some(now + ToastState::TIMEOUT));
    }
}
