use leptos::prelude::*;
use pubctrl::confirm::DEFAULT_CONFIRM_MESSAGE;

fn display(visible: bool) -> &'static str {
    if visible { "flex" } else { "none" }
}

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner">
            <div class="bounce1"></div>
            <div class="bounce2"></div>
            <div class="bounce3"></div>
        </div>
    }
}

/// Modal yes/no prompt.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] visible: Signal<bool>,
    #[prop(optional, into)] message: Option<String>,
    #[prop(into)] on_accept: Callback<()>,
    #[prop(into)] on_reject: Callback<()>,
) -> impl IntoView {
    let message = message.unwrap_or_else(|| DEFAULT_CONFIRM_MESSAGE.to_string());
    view! {
        <div class="dialog-backdrop" style:display=move || display(visible.get())>
            <div class="dialog confirm" role="alertdialog">
                <p>{message}</p>
                <button on:click=move |_| on_reject.run(())>"No"</button>
                <button on:click=move |_| on_accept.run(())>"Yes"</button>
            </div>
        </div>
    }
}

/// Modal create/edit form; saving is disabled while required fields are
/// missing.
#[component]
pub fn FormDialog(
    #[prop(into)] header: Signal<String>,
    #[prop(into)] visible: Signal<bool>,
    #[prop(into)] missing: Signal<Vec<&'static str>>,
    #[prop(into)] on_save: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" style:display=move || display(visible.get())>
            <form class="dialog" on:submit=move |ev| {
                ev.prevent_default();
                on_save.run(());
            }>
                <h2>{header}</h2>
                {children()}
                {move || {
                    let missing = missing.get();
                    (!missing.is_empty()).then(|| view! {
                        <p class="missing">"Required: "{missing.join(", ")}</p>
                    })
                }}
                <button type="button" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                <button type="submit" disabled=move || !missing.get().is_empty()>"Save"</button>
            </form>
        </div>
    }
}

#[component]
pub fn TextField(
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span>{label}</span>
            <input
                type=input_type
                prop:value=value
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}
