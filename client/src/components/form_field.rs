//! Labeled text input with inline validation message.

#[cfg(test)]
#[path = "form_field_test.rs"]
mod form_field_test;

use leptos::prelude::*;

use crate::util::validation::ValidationResult;

/// Input classes for a field that has not been checked yet, passed, or failed.
fn input_class(check: Option<ValidationResult>) -> &'static str {
    match check {
        None => "input input-bordered w-full",
        Some(result) if result.valid => "input input-bordered w-full input-success",
        Some(_) => "input input-bordered w-full input-error",
    }
}

/// Text input bound to `value`. The error element is `<id>-error`.
#[component]
pub fn FormField(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    check: RwSignal<Option<ValidationResult>>,
    on_blur: Callback<()>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] autocomplete: &'static str,
) -> impl IntoView {
    let error_id = format!("{id}-error");

    view! {
        <div class="form-control">
            <label class="label" for=id>
                <span class="label-text">{label}</span>
            </label>
            <input
                id=id
                name=id
                type=input_type
                placeholder=placeholder
                autocomplete=autocomplete
                class=move || input_class(check.get())
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:blur=move |_| on_blur.run(())
            />
            <p id=error_id class="field-error" class:hidden=move || check.get().map_or(true, |r| r.valid)>
                {move || check.get().and_then(|r| r.error()).unwrap_or_default()}
            </p>
        </div>
    }
}
