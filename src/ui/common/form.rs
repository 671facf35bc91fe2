use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Input with a leading icon, bound to a string signal
#[component]
pub fn IconInput(
    /// Input type (text, email, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    placeholder: &'static str,
    /// Icon shown inside the input on the left
    icon: &'static str,
    /// Bound value
    value: RwSignal<String>,
    /// Browser autocomplete hint
    #[prop(optional)]
    autocomplete: Option<&'static str>,
    #[prop(default = true)]
    required: bool,
) -> impl IntoView {
    view! {
        <div class="relative">
            <span class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                <Icon name=icon class="w-5 h-5 text-gray-400"/>
            </span>
            <input
                type=input_type
                class="input-glass"
                placeholder=placeholder
                autocomplete=autocomplete
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

/// Password input with a show/hide toggle
#[component]
pub fn PasswordInput(
    /// Placeholder text
    placeholder: &'static str,
    /// Bound value
    value: RwSignal<String>,
    /// Browser autocomplete hint
    #[prop(default = "current-password")]
    autocomplete: &'static str,
) -> impl IntoView {
    let visible = RwSignal::new(false);

    view! {
        <div class="relative">
            <span class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                <Icon name=icons::LOCK class="w-5 h-5 text-gray-400"/>
            </span>
            <input
                type=move || if visible.get() { "text" } else { "password" }
                class="input-glass pr-10"
                placeholder=placeholder
                autocomplete=autocomplete
                required=true
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <button
                type="button"
                class="absolute right-3 top-1/2 -translate-y-1/2 text-gray-400 hover:text-gray-600 transition-colors"
                title=move || if visible.get() { "Hide password" } else { "Show password" }
                on:click=move |_| visible.update(|v| *v = !*v)
            >
                {move || {
                    if visible.get() {
                        view! { <Icon name=icons::EYE_CLOSED class="w-5 h-5"/> }.into_any()
                    } else {
                        view! { <Icon name=icons::EYE class="w-5 h-5"/> }.into_any()
                    }
                }}
            </button>
        </div>
    }
}

/// Checkbox bound to a bool signal, with arbitrary label content
#[component]
pub fn CheckboxField(
    /// HTML id, linked to the label
    id: &'static str,
    /// Current checked state
    checked: RwSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="flex items-start gap-2">
            <input
                type="checkbox"
                id=id
                class="w-4 h-4 mt-1 rounded border-gray-300 text-blue-600 focus:ring-2 focus:ring-blue-500"
                prop:checked=move || checked.get()
                on:change=move |ev| checked.set(event_target_checked(&ev))
            />
            <label for=id class="text-sm text-gray-600 leading-relaxed cursor-pointer">
                {children()}
            </label>
        </div>
    }
}
