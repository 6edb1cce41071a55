use super::{use_theme, Theme};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Theme dropdown in the header.
#[component]
pub fn ThemeSelect() -> impl IntoView {
    let ctx = use_theme();
    let is_open = RwSignal::new(false);

    let toggle_dropdown = move |_| {
        is_open.update(|v| *v = !*v);
    };

    view! {
        <div class="theme-select-wrapper" on:mouseleave=move |_| is_open.set(false)>
            <button
                class="button button--ghost"
                aria-label="Theme"
                on:click=toggle_dropdown
            >
                {move || icon(ctx.get_theme().icon_name())}
            </button>

            <Show when=move || is_open.get()>
                <div class="theme-dropdown">
                    <div class="theme-dropdown__label">"Theme"</div>
                    <For
                        each=move || Theme::all()
                        key=|theme| theme.as_str()
                        children=move |theme| {
                            let is_active = move || ctx.get_theme() == theme;
                            view! {
                                <button
                                    class=move || {
                                        if is_active() {
                                            "theme-dropdown__item theme-dropdown__item--active"
                                        } else {
                                            "theme-dropdown__item"
                                        }
                                    }
                                    on:click=move |_| {
                                        ctx.set_theme(theme);
                                        is_open.set(false);
                                    }
                                >
                                    {icon(theme.icon_name())}
                                    <span>{theme.display_name()}</span>
                                </button>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
