use leptos::*;
use uuid::Uuid;

/// How long a toast stays on screen before it dismisses itself.
#[cfg(target_arch = "wasm32")]
const TOAST_LIFETIME_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

impl ToastVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ToastVariant::Default => "bg-gray-900 border-red-500/50 text-white",
            ToastVariant::Destructive => "bg-red-700 border-red-400 text-white",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: None,
            variant: ToastVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            ..Self::new(title)
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Clone, Copy)]
pub struct ToastState {
    pub toasts: RwSignal<Vec<Toast>>,
}

impl ToastState {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
        }
    }

    pub fn push(&self, toast: Toast) {
        let id = toast.id;
        self.toasts.update(|list| list.push(toast));
        self.schedule_dismiss(id);
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }

    pub fn latest(&self) -> Option<Toast> {
        self.toasts.with_untracked(|list| list.last().cloned())
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: Uuid) {
        let state = *self;
        gloo_timers::callback::Timeout::new(TOAST_LIFETIME_MS, move || state.dismiss(id)).forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: Uuid) {}
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_toasts() -> ToastState {
    let state = ToastState::new();
    provide_context(state);
    state
}

pub fn use_toasts() -> ToastState {
    match use_context::<ToastState>() {
        Some(state) => state,
        None => provide_toasts(),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn push_and_dismiss_toasts() {
        with_runtime(|| {
            let toasts = use_toasts();
            toasts.push(Toast::new("Hello"));
            let failure = Toast::destructive("Oops").with_description("details");
            let failure_id = failure.id;
            toasts.push(failure);

            assert_eq!(toasts.toasts.get().len(), 2);
            let latest = toasts.latest().unwrap();
            assert_eq!(latest.variant, ToastVariant::Destructive);
            assert_eq!(latest.description.as_deref(), Some("details"));

            toasts.dismiss(failure_id);
            let remaining = toasts.toasts.get();
            assert_eq!(remaining.len(), 1);
            assert_eq!(remaining[0].title, "Hello");
            assert_eq!(remaining[0].variant, ToastVariant::Default);
        });
    }

    #[test]
    fn use_toasts_reuses_provided_state() {
        with_runtime(|| {
            let provided = provide_toasts();
            provided.push(Toast::new("from root"));
            let used = use_toasts();
            assert_eq!(used.latest().map(|t| t.title), Some("from root".into()));
        });
    }
}
