//! Form Field Component
//!
//! Labelled text input bound to a signal, with an inline error message.

use leptos::prelude::*;

/// Labelled input with validation message
///
/// Props:
/// - value: signal the input reads from and writes to
/// - error: message shown under the input (None = valid)
#[component]
pub fn FormField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] autocomplete: Option<String>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());

    view! {
        <div class="field" class:invalid=move || error.with(|e| e.is_some())>
            <label for=id.clone()>{label}</label>
            <input
                id=id
                type=input_type
                placeholder=placeholder
                autocomplete=autocomplete
                aria-invalid=move || error.with(|e| e.is_some()).to_string()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || error.get().map(|message| view! {
                <p class="field-error">{message}</p>
            })}
        </div>
    }
}
