use crate::domain::refunds::store::use_refund_store;
use crate::shared::icons::icon;
use contracts::domain::refund::{field_label, HistoryEntry, RefundId};
use leptos::prelude::*;

fn render_entry(entry: &HistoryEntry) -> AnyView {
    let stamp = entry.at.format("%m/%d/%Y %H:%M").to_string();
    let actor = entry.actor.clone();

    if entry.is_creation() {
        return view! {
            <div class="history-entry history-entry--creation">
                <div class="history-entry__meta">
                    <span class="history-entry__time">{stamp}</span>
                    <span class="history-entry__actor">{actor}</span>
                </div>
                <div class="history-entry__note">"Record created"</div>
            </div>
        }
        .into_any();
    }

    let rows = entry
        .changes
        .iter()
        .map(|c| {
            view! {
                <tr>
                    <td class="history-entry__field">{field_label(&c.field)}</td>
                    <td class="history-entry__old">{c.old.clone()}</td>
                    <td class="history-entry__new">{c.new.clone()}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="history-entry">
            <div class="history-entry__meta">
                <span class="history-entry__time">{stamp}</span>
                <span class="history-entry__actor">{actor}</span>
            </div>
            <table class="history-entry__table">
                <thead>
                    <tr>
                        <th>"Field"</th>
                        <th>"Before"</th>
                        <th>"After"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
    .into_any()
}

/// Read-only change log for one refund, newest edit first.
#[component]
pub fn RefundHistory(record_id: RefundId, on_close: Callback<()>) -> impl IntoView {
    let store = use_refund_store();
    let records = store.records();

    // Tracks the store so a panel left open over a save stays current.
    let entries = Memo::new(move |_| {
        records.with(|rs| {
            rs.iter()
                .find(|r| r.id == record_id)
                .map(|r| r.history.clone())
        })
    });

    view! {
        <div class="history-panel">
            <div class="history-panel__header">
                {icon("history")}
                <h2 class="history-panel__title">"Change History"</h2>
                <span class="history-panel__id">{record_id.as_string()}</span>
            </div>

            <div class="history-panel__body">
                {move || match entries.get() {
                    Some(history) if history.is_empty() => {
                        view! {
                            <div class="history-panel__empty">"No changes recorded"</div>
                        }
                        .into_any()
                    }
                    Some(history) => {
                        history.iter().rev().map(render_entry).collect_view().into_any()
                    }
                    None => {
                        view! {
                            <div class="warning-box warning-box--error">
                                <span class="warning-box__icon">"⚠"</span>
                                <span class="warning-box__text">"Refund not found"</span>
                            </div>
                        }
                        .into_any()
                    }
                }}
            </div>

            <div class="history-panel__footer">
                <button class="btn btn--secondary" on:click=move |_| on_close.run(())>
                    "Close"
                </button>
            </div>
        </div>
    }
}
