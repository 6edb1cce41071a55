use crate::layout::header::mega_menu::MegaMenuBar;
use crate::shared::icons;
use crate::shared::theme::ThemeSelect;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"Refund Desk"</span>
                <MegaMenuBar />
            </div>
            <div class="header__actions">
                <ThemeSelect />
                <AccountMenu />
            </div>
        </header>
    }
}

/// Avatar dropdown in the header's right corner. Presentational.
#[component]
fn AccountMenu() -> impl IntoView {
    let (is_open, set_is_open) = signal(false);

    let entries = [
        ("user", "Profile"),
        ("settings", "Settings"),
        ("mail", "Support"),
    ];

    view! {
        <div
            class="account-menu"
            on:mouseleave=move |_| set_is_open.set(false)
        >
            <button
                class="account-menu__avatar"
                aria-label="Account"
                on:click=move |_| set_is_open.update(|v| *v = !*v)
            >
                "JN"
            </button>
            <Show when=move || is_open.get()>
                <div class="account-menu__dropdown">
                    <div class="account-menu__label">"My Account"</div>
                    {entries.iter().map(|(icon_name, label)| {
                        view! {
                            <button
                                class="account-menu__item"
                                on:click=move |_| set_is_open.set(false)
                            >
                                {icons::icon(icon_name)}
                                <span>{*label}</span>
                            </button>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
