use crate::shared::icons;
use leptos::prelude::*;

/// One entry inside a mega-menu category panel.
///
/// Presentational only: entries describe the admin area they would open;
/// none of them navigate in this build.
#[derive(Debug, Clone)]
pub struct MegaMenuItem {
    pub title: &'static str,
    pub desc: &'static str,
    pub icon_name: &'static str,
}

#[component]
pub fn MegaMenuCategory(label: &'static str, items: Vec<MegaMenuItem>) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);

    view! {
        <div
            class="mega-menu-category"
            on:mouseenter=move |_| set_is_open.set(true)
            on:mouseleave=move |_| set_is_open.set(false)
        >
            <button
                class="mega-menu-btn"
                class:mega-menu-btn-active=move || is_open.get()
            >
                <span>{label}</span>
                <span
                    class="mega-menu-chevron"
                    class:mega-menu-chevron-open=move || is_open.get()
                >
                    {icons::icon("chevron-down")}
                </span>
            </button>

            <div
                class="mega-menu-panel"
                class:mega-menu-panel-open=move || is_open.get()
            >
                <div class="mega-menu-content mega-menu-grid-2">
                    {items.into_iter().map(|item| {
                        view! {
                            <button
                                class="mega-menu-card"
                                on:click=move |_| set_is_open.set(false)
                            >
                                <div class="mega-menu-card-icon">
                                    {icons::icon(item.icon_name)}
                                </div>
                                <div class="mega-menu-card-body">
                                    <div class="mega-menu-card-title">{item.title}</div>
                                    <div class="mega-menu-card-desc">{item.desc}</div>
                                </div>
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn MegaMenuBar() -> impl IntoView {
    let refunds = vec![
        MegaMenuItem {
            title: "Upload Refund File",
            desc: "Upload your CSV refund file here",
            icon_name: "upload",
        },
        MegaMenuItem {
            title: "Manage Data Mapping",
            desc: "Configure your CSV headers to match our system",
            icon_name: "settings",
        },
    ];

    let email_templates = vec![
        MegaMenuItem {
            title: "Edit Refund Template",
            desc: "Refund email is the initial email sent to the customer",
            icon_name: "mail",
        },
        MegaMenuItem {
            title: "Edit Reminder Template",
            desc: "Reminder email is sent to the customer after 3 days",
            icon_name: "mail",
        },
        MegaMenuItem {
            title: "Edit Second Reminder Template",
            desc: "Second reminder email is sent to the customer after 7 days",
            icon_name: "mail",
        },
        MegaMenuItem {
            title: "Edit OTP Template",
            desc: "OTP email is sent to the customer for verification",
            icon_name: "mail",
        },
        MegaMenuItem {
            title: "Edit Thank You Template",
            desc: "Thank you email is sent to the customer after a successful refund",
            icon_name: "mail",
        },
    ];

    let transactions = vec![
        MegaMenuItem {
            title: "All Transactions",
            desc: "View all refunds and transactions",
            icon_name: "table",
        },
        MegaMenuItem {
            title: "Unclaimed Transactions",
            desc: "View only unclaimed refunds",
            icon_name: "table",
        },
    ];

    view! {
        <nav class="mega-menu-bar">
            <button class="mega-menu-btn">"Dashboard"</button>
            <MegaMenuCategory label="Refunds" items=refunds />
            <MegaMenuCategory label="Email Templates" items=email_templates />
            <MegaMenuCategory label="Transactions" items=transactions />
        </nav>
    }
}
