use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
}

/// Button size options
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonSize {
    Small,
    Medium,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-sm",
            ButtonSize::Medium => "",
        }
    }
}

/// Button with variants, an optional leading icon and a loading state.
///
/// While loading the icon is replaced by a spinner and clicks are ignored.
#[component]
pub fn Button(
    /// Button variant style
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    /// HTML button type (`button` or `submit`)
    #[prop(default = "button")]
    button_type: &'static str,
    /// Click handler; submit buttons usually leave this to the form
    #[prop(optional, into)]
    on_click: Option<Callback<()>>,
    /// Whether button is in loading state
    #[prop(into, default = Signal::stored(false))]
    loading: Signal<bool>,
    /// Optional icon name to show before text
    #[prop(optional)]
    icon: Option<&'static str>,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
    /// Button content (text or elements)
    children: Children,
) -> impl IntoView {
    let full_classes = format!("btn-base {} {} {}", variant.class(), size.class(), class);

    view! {
        <button
            type=button_type
            class=full_classes
            on:click=move |_| {
                if loading.get_untracked() {
                    return;
                }
                if let Some(callback) = on_click.as_ref() {
                    callback.run(());
                }
            }
            disabled=move || loading.get()
        >
            {move || if loading.get() {
                view! {
                    <Icon name=icons::LOADER class="w-5 h-5 animate-spin"/>
                }.into_any()
            } else if let Some(icon_name) = icon {
                view! {
                    <Icon name=icon_name class="w-5 h-5"/>
                }.into_any()
            } else {
                ().into_any()
            }}
            {children()}
        </button>
    }
}
