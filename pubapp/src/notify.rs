use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use pubcore::{
    error::BackendError,
    report::ErrorReporter,
};
use std::sync::{
    atomic::{
        AtomicU64,
        Ordering,
    },
    Arc,
};

/// How long an error toast stays up unless dismissed.
pub const TOAST_MILLIS: u32 = 5000;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub summary: String,
    pub detail: String,
}

impl Toast {
    pub fn from_error(id: u64, error: &BackendError) -> Self {
        let summary = match error {
            BackendError::Network(_) => "Network error",
            BackendError::Status { .. } => "Request rejected",
            _ => "Unexpected response",
        };
        Self {
            id,
            summary: summary.to_string(),
            detail: error.to_string(),
        }
    }
}

/// The error reporter for the web app: every failed request becomes a
/// toast that dismisses itself.
#[derive(Clone)]
pub struct Notifier {
    toasts: ArcRwSignal<Vec<Toast>>,
    next_id: Arc<AtomicU64>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self {
            toasts: ArcRwSignal::new(Vec::new()),
            next_id: Arc::new(AtomicU64::new(0)),
        }
    }
}

impl Notifier {
    pub fn toasts(&self) -> ArcReadSignal<Vec<Toast>> {
        self.toasts.read_only()
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
    }
}

impl ErrorReporter for Notifier {
    fn report(&self, error: &BackendError) {
        leptos::logging::error!("{error}");
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.toasts.update(|toasts| toasts.push(Toast::from_error(id, error)));
        let notifier = self.clone();
        Timeout::new(TOAST_MILLIS, move || notifier.dismiss(id)).forget();
    }
}

#[component]
pub fn Toasts() -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    let toasts = notifier.toasts();
    view! {
        <div id="toasts">
            {move || toasts.get()
                .into_iter()
                .map(|toast| {
                    let notifier = notifier.clone();
                    view! {
                        <div class="toast" role="alert">
                            <strong>{toast.summary}</strong>
                            <p>{toast.detail}</p>
                            <button on:click=move |_| notifier.dismiss(toast.id)>"Dismiss"</button>
                        </div>
                    }
                })
                .collect_view()
            }
        </div>
    }
}
