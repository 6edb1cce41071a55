use crate::shared::icons::icon;
use leptos::prelude::*;

/// Date range picker: two native date inputs plus a clear button.
/// Values travel as yyyy-mm-dd strings; empty string means unset.
#[component]
pub fn DateRangePicker(
    /// "From" value, yyyy-mm-dd or empty
    #[prop(into)]
    date_from: Signal<String>,

    /// "To" value, yyyy-mm-dd or empty
    #[prop(into)]
    date_to: Signal<String>,

    /// Callback on any change: (from, to)
    on_change: Callback<(String, String)>,

    /// Optional label for the control
    #[prop(optional)]
    label: Option<String>,
) -> impl IntoView {
    let on_from_change = move |new_from: String| {
        let current_to = date_to.get_untracked();
        on_change.run((new_from, current_to));
    };

    let on_to_change = move |new_to: String| {
        let current_from = date_from.get_untracked();
        on_change.run((current_from, new_to));
    };

    let on_clear = move |_| {
        on_change.run((String::new(), String::new()));
    };

    let has_value = move || {
        !date_from.get().is_empty() || !date_to.get().is_empty()
    };

    view! {
        <div class="date-range-picker">
            {label.map(|l| view! { <span class="date-range-picker__label">{l}</span> })}
            {icon("calendar")}
            <input
                type="date"
                class="date-range-picker__input"
                prop:value=move || date_from.get()
                on:change=move |ev| on_from_change(event_target_value(&ev))
            />
            <span class="date-range-picker__sep">"–"</span>
            <input
                type="date"
                class="date-range-picker__input"
                prop:value=move || date_to.get()
                on:change=move |ev| on_to_change(event_target_value(&ev))
            />
            <Show when=has_value>
                <button
                    class="date-range-picker__clear"
                    on:click=on_clear
                    title="Clear dates"
                >
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
