use crate::domain::refunds::store::RefundStore;
use crate::domain::refunds::ui::list::RefundsList;
use crate::layout::Shell;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::theme::ThemeProvider;
use crate::shared::toast::{ToastHost, ToastService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // The in-memory record store, seeded once per session.
    provide_context(RefundStore::seeded());

    // Centralized modal and toast management.
    provide_context(ModalStackService::new());
    provide_context(ToastService::new());

    view! {
        <ThemeProvider>
            <Shell>
                <RefundsList />
            </Shell>
            <ModalHost />
            <ToastHost />
        </ThemeProvider>
    }
}
