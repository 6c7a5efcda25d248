// ============================================================================
// SNACKBAR - transient notifications (queue acks, CRUD results)
// ============================================================================

use gloo_timers::callback::Timeout;
use yew::prelude::*;

const AUTO_HIDE_MS: u32 = 4500;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Clone, PartialEq)]
pub struct SnackbarHandle {
    pub show: Callback<(String, Severity)>,
}

impl SnackbarHandle {
    pub fn success(&self, message: impl Into<String>) {
        self.show.emit((message.into(), Severity::Success));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show.emit((message.into(), Severity::Error));
    }
}

#[hook]
pub fn use_snackbar() -> SnackbarHandle {
    use_context::<SnackbarHandle>().expect("use_snackbar outside SnackbarProvider")
}

#[derive(Properties, PartialEq)]
pub struct SnackbarProviderProps {
    pub children: Children,
}

#[function_component(SnackbarProvider)]
pub fn snackbar_provider(props: &SnackbarProviderProps) -> Html {
    let current = use_state(|| None::<(String, Severity)>);
    // Sequence number so a stale auto-hide cannot clear a newer message.
    let seq = use_mut_ref(|| 0u32);

    let show = {
        let current = current.clone();
        let seq = seq.clone();
        Callback::from(move |(message, severity): (String, Severity)| {
            *seq.borrow_mut() += 1;
            let my_seq = *seq.borrow();
            current.set(Some((message, severity)));

            let current = current.clone();
            let seq = seq.clone();
            Timeout::new(AUTO_HIDE_MS, move || {
                if *seq.borrow() == my_seq {
                    current.set(None);
                }
            })
            .forget();
        })
    };

    let on_dismiss = {
        let current = current.clone();
        Callback::from(move |_| current.set(None))
    };

    let toast = match &*current {
        Some((message, severity)) => {
            let class = match severity {
                Severity::Success => "snackbar snackbar-success",
                Severity::Error => "snackbar snackbar-error",
            };
            html! {
                <div {class} onclick={on_dismiss}>
                    {message.clone()}
                </div>
            }
        }
        None => html! {},
    };

    html! {
        <ContextProvider<SnackbarHandle> context={SnackbarHandle { show }}>
            {props.children.clone()}
            {toast}
        </ContextProvider<SnackbarHandle>>
    }
}
