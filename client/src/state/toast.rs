//! Transient notification queue.
//!
//! Toasts are pushed by request handlers and removed either by the user
//! or by a browser timer scheduled in `util::notify`.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// How long a success toast stays on screen.
pub const SUCCESS_DURATION_MS: u32 = 1_500;
/// How long an error toast stays on screen.
pub const ERROR_DURATION_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn duration_ms(self) -> u32 {
        match self {
            Self::Success => SUCCESS_DURATION_MS,
            Self::Error => ERROR_DURATION_MS,
        }
    }

    /// BEM modifier used by the toast stack styles.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub text: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, title: impl Into<String>, text: Option<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, kind, title: title.into(), text });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}
