mod state;

use crate::domain::refunds::store::use_refund_store;
use crate::domain::refunds::ui::details::RefundDetails;
use crate::domain::refunds::ui::history::RefundHistory;
use crate::shared::clipboard::copy_to_clipboard_with_feedback;
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, SearchInput};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::ToastService;
use contracts::domain::refund::{Refund, RefundId, RefundMethod, RefundStatus};
use contracts::format::{format_date_mdy, format_usd};
use contracts::listing;
use leptos::prelude::*;
use state::create_state;
use std::collections::HashSet;

/// Badge modifier class for a status cell.
fn status_class(status: RefundStatus) -> &'static str {
    match status {
        RefundStatus::Pending => "status-badge status-badge--pending",
        RefundStatus::PendingSent => "status-badge status-badge--pending-sent",
        RefundStatus::AchSent => "status-badge status-badge--ach-sent",
        RefundStatus::Completed => "status-badge status-badge--completed",
        RefundStatus::AchReturned => "status-badge status-badge--returned",
    }
}

#[component]
fn RefundsHeader(#[prop(into)] total_count: Signal<usize>) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                {icon("table")}
                <h1 class="page__title">"Refund Transactions"</h1>
                <span class="badge badge--primary">
                    {move || total_count.get().to_string()}
                </span>
            </div>
        </div>
    }
}

#[component]
pub fn RefundsList() -> impl IntoView {
    let store = use_refund_store();
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService should be provided");
    let toasts = use_context::<ToastService>().expect("ToastService should be provided");

    let state = create_state();
    let is_expanded = RwSignal::new(true);
    let (selected, set_selected) = signal(HashSet::<RefundId>::new());
    // Id of the row whose actions menu is open, if any.
    let open_menu = RwSignal::new(None::<RefundId>);

    let records = store.records();

    // Post-filter, sorted rows across all pages.
    let visible = Memo::new(move |_| {
        let st = state.get();
        let mut rows = listing::visible_subset(&records.get(), &st.filter());
        listing::sort_list(&mut rows, &st.sort_field, st.sort_ascending);
        rows
    });

    // Drop selected ids that fell out of the visible subset.
    Effect::new(move |_| {
        let rows = visible.get();
        let mut pruned = selected.get_untracked();
        let before = pruned.len();
        listing::prune_selection(&mut pruned, &rows);
        if pruned.len() != before {
            set_selected.set(pruned);
        }
    });

    let total_pages = Memo::new(move |_| {
        listing::page_count(visible.get().len(), state.get().page_size)
    });
    let current_page = Memo::new(move |_| {
        listing::clamp_page(state.get().current_page, total_pages.get())
    });
    let page_rows = Memo::new(move |_| {
        let page_size = state.get().page_size;
        visible.with(|rows| listing::page_slice(rows, current_page.get(), page_size))
    });

    let go_to_page = Callback::new(move |page: usize| {
        state.update(|s| s.current_page = page);
    });

    let change_page_size = Callback::new(move |size: usize| {
        state.update(|s| {
            s.page_size = size;
            s.current_page = 0;
        });
    });

    let toggle_sort = move |field: &'static str| {
        state.update(|s| {
            s.toggle_sort(field);
            s.current_page = 0;
        });
    };

    let set_status = move |value: String| {
        state.update(|s| {
            s.status = RefundStatus::parse(&value);
            s.current_page = 0;
        });
    };

    let set_method = move |value: String| {
        state.update(|s| {
            s.method = RefundMethod::parse(&value);
            s.current_page = 0;
        });
    };

    let set_dates = Callback::new(move |(from, to): (String, String)| {
        state.update(|s| {
            s.date_from = from;
            s.date_to = to;
            s.current_page = 0;
        });
    });

    let set_search = Callback::new(move |value: String| {
        state.update(|s| {
            s.search = value;
            s.current_page = 0;
        });
    });

    // Header checkbox covers the whole post-filter subset, not just the page.
    let all_selected = Signal::derive(move || {
        visible.with(|rows| {
            !rows.is_empty()
                && selected.with(|sel| rows.iter().all(|r| sel.contains(&r.id)))
        })
    });

    let toggle_all = move |checked: bool| {
        if checked {
            set_selected.set(visible.get_untracked().iter().map(|r| r.id).collect());
        } else {
            set_selected.set(HashSet::new());
        }
    };

    let open_edit = move |id: RefundId| {
        open_menu.set(None);
        modal_stack.push_with_frame(
            Some("max-width: min(720px, 95vw); width: min(720px, 95vw);".to_string()),
            Some("refund-details-modal".to_string()),
            move |handle| {
                let close = handle.clone();
                let cancel = handle.clone();
                view! {
                    <RefundDetails
                        record_id=id
                        on_saved=Callback::new(move |_| {
                            toasts.success("Saved", "Refund updated");
                            close.close();
                        })
                        on_cancel=Callback::new(move |_| cancel.close())
                    />
                }
                .into_any()
            },
        );
    };

    let open_history = move |id: RefundId| {
        open_menu.set(None);
        modal_stack.push_with_frame(
            Some("max-width: min(640px, 95vw); width: min(640px, 95vw);".to_string()),
            Some("refund-history-modal".to_string()),
            move |handle| {
                let close = handle.clone();
                view! {
                    <RefundHistory
                        record_id=id
                        on_close=Callback::new(move |_| close.close())
                    />
                }
                .into_any()
            },
        );
    };

    let copy_id = move |id: RefundId| {
        open_menu.set(None);
        copy_to_clipboard_with_feedback(
            &id.as_string(),
            move || toasts.success("Copied", "Refund id copied to clipboard"),
            move || toasts.error("Copy failed", "Clipboard is not available"),
        );
    };

    // Mock action: no mail leaves the browser.
    let resend_email = move |email: String| {
        open_menu.set(None);
        toasts.info("Email queued", format!("Refund notification re-sent to {email}"));
    };

    let sortable_header = move |label: &'static str, field: &'static str| {
        view! {
            <th
                class="table__header table__header--sortable"
                on:click=move |_| toggle_sort(field)
            >
                {label}
                <span class=move || {
                    state.with(|s| get_sort_class(&s.sort_field, field))
                }>
                    {move || {
                        state.with(|s| get_sort_indicator(&s.sort_field, field, s.sort_ascending))
                    }}
                </span>
            </th>
        }
    };

    view! {
        <div class="page page--wide">
            <RefundsHeader total_count=Signal::derive(move || visible.with(Vec::len)) />

            <FilterPanel
                is_expanded=is_expanded
                active_filters_count=Signal::derive(move || {
                    state.with(|s| s.filter().active_count())
                })
                pagination_controls=move || {
                    view! {
                        <PaginationControls
                            current_page=Signal::derive(move || current_page.get())
                            total_pages=Signal::derive(move || total_pages.get())
                            total_count=Signal::derive(move || visible.with(Vec::len))
                            page_size=Signal::derive(move || state.get().page_size)
                            on_page_change=go_to_page
                            on_page_size_change=change_page_size
                        />
                    }
                    .into_any()
                }
                filter_content=move || {
                    view! {
                        <div class="filter-panel__row">
                            <div class="filter-panel__field">
                                <label class="filter-panel__label">"Status:"</label>
                                <select
                                    class="filter-panel__select"
                                    on:change=move |ev| set_status(event_target_value(&ev))
                                    prop:value=move || {
                                        state.with(|s| {
                                            s.status.map(|v| v.as_str().to_string()).unwrap_or_default()
                                        })
                                    }
                                >
                                    <option value="">"All statuses"</option>
                                    {RefundStatus::ALL
                                        .iter()
                                        .map(|s| {
                                            view! {
                                                <option value=s.as_str()>{s.as_str()}</option>
                                            }
                                        })
                                        .collect_view()}
                                </select>
                            </div>

                            <div class="filter-panel__field">
                                <label class="filter-panel__label">"Method:"</label>
                                <select
                                    class="filter-panel__select"
                                    on:change=move |ev| set_method(event_target_value(&ev))
                                    prop:value=move || {
                                        state.with(|s| {
                                            s.method.map(|v| v.as_str().to_string()).unwrap_or_default()
                                        })
                                    }
                                >
                                    <option value="">"All methods"</option>
                                    {RefundMethod::ALL
                                        .iter()
                                        .map(|m| {
                                            view! {
                                                <option value=m.as_str()>{m.as_str()}</option>
                                            }
                                        })
                                        .collect_view()}
                                </select>
                            </div>

                            <div class="filter-panel__field">
                                <DateRangePicker
                                    date_from=Signal::derive(move || state.get().date_from)
                                    date_to=Signal::derive(move || state.get().date_to)
                                    on_change=set_dates
                                    label="Refund date:".to_string()
                                />
                            </div>

                            <div class="filter-panel__field filter-panel__field--grow">
                                <SearchInput
                                    value=Signal::derive(move || state.get().search)
                                    on_change=set_search
                                    placeholder="Search status, email, date, amount..."
                                />
                            </div>
                        </div>
                    }
                    .into_any()
                }
            />

            <div class="page-content">
                <div class="table-wrap">
                    <table class="table">
                        <thead>
                            <tr>
                                <th
                                    class="table__header table__header--checkbox"
                                    on:click=|e| e.stop_propagation()
                                >
                                    <input
                                        type="checkbox"
                                        class="table__checkbox"
                                        prop:checked=all_selected
                                        on:change=move |ev| toggle_all(event_target_checked(&ev))
                                    />
                                </th>
                                {listing::COLUMNS
                                    .iter()
                                    .map(|col| match col.sort_key {
                                        Some(field) => {
                                            sortable_header(col.label, field).into_any()
                                        }
                                        None => {
                                            view! {
                                                <th class="table__header">{col.label}</th>
                                            }
                                            .into_any()
                                        }
                                    })
                                    .collect_view()}
                                <th class="table__header table__header--actions"></th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show
                                when=move || !page_rows.with(Vec::is_empty)
                                fallback=|| {
                                    view! {
                                        <tr>
                                            <td class="table__cell table__cell--empty" colspan="7">
                                                "No refunds match the current filters"
                                            </td>
                                        </tr>
                                    }
                                }
                            >
                                <For
                                    each=move || page_rows.get()
                                    key=|row| row.id
                                    children=move |row: Refund| {
                                        let id = row.id;
                                        let email = row.email.clone();
                                        let menu_email = row.email.clone();
                                        let is_selected = Signal::derive(move || {
                                            selected.with(|sel| sel.contains(&id))
                                        });
                                        let toggle_row = Callback::new(move |checked: bool| {
                                            set_selected.update(|sel| {
                                                if checked {
                                                    sel.insert(id);
                                                } else {
                                                    sel.remove(&id);
                                                }
                                            });
                                        });
                                        let menu_open = Signal::derive(move || {
                                            open_menu.get() == Some(id)
                                        });

                                        view! {
                                            <tr
                                                class="table__row table__row--clickable"
                                                class=("table__row--selected", is_selected)
                                                on:click=move |_| open_edit(id)
                                            >
                                                <TableCheckbox
                                                    checked=is_selected
                                                    on_change=toggle_row
                                                />
                                                <td class="table__cell">
                                                    <div class="table__date-primary">
                                                        {format_date_mdy(row.refund_date)}
                                                    </div>
                                                    <div class="table__date-secondary">
                                                        {format_date_mdy(row.claimed_date)}
                                                    </div>
                                                </td>
                                                <td class="table__cell">
                                                    <span class=status_class(row.status)>
                                                        {row.status.as_str()}
                                                    </span>
                                                </td>
                                                <td class="table__cell">
                                                    <div class="table__customer-name">
                                                        {row.full_name()}
                                                    </div>
                                                    <div class="table__customer-email">{email}</div>
                                                </td>
                                                <td class="table__cell table__cell--right">
                                                    {format_usd(row.amount)}
                                                </td>
                                                <td class="table__cell table__cell--center">
                                                    {row.method.as_str()}
                                                </td>
                                                <td
                                                    class="table__cell table__cell--actions"
                                                    on:click=|e| e.stop_propagation()
                                                >
                                                    <button
                                                        class="row-actions__trigger"
                                                        title="Actions"
                                                        on:click=move |_| {
                                                            open_menu.update(|m| {
                                                                *m = if *m == Some(id) {
                                                                    None
                                                                } else {
                                                                    Some(id)
                                                                };
                                                            });
                                                        }
                                                    >
                                                        {icon("more-horizontal")}
                                                    </button>
                                                    <Show when=move || menu_open.get()>
                                                        {
                                                            let menu_email = menu_email.clone();
                                                            view! {
                                                                <div class="row-actions__menu">
                                                                    <button
                                                                        class="row-actions__item"
                                                                        on:click=move |_| open_edit(id)
                                                                    >
                                                                        {icon("edit")}
                                                                        " Edit refund"
                                                                    </button>
                                                                    <button
                                                                        class="row-actions__item"
                                                                        on:click=move |_| open_history(id)
                                                                    >
                                                                        {icon("history")}
                                                                        " View history"
                                                                    </button>
                                                                    <button
                                                                        class="row-actions__item"
                                                                        on:click=move |_| copy_id(id)
                                                                    >
                                                                        {icon("copy")}
                                                                        " Copy refund id"
                                                                    </button>
                                                                    <button
                                                                        class="row-actions__item"
                                                                        on:click={
                                                                            let menu_email = menu_email.clone();
                                                                            move |_| resend_email(menu_email.clone())
                                                                        }
                                                                    >
                                                                        {icon("mail")}
                                                                        " Resend email"
                                                                    </button>
                                                                </div>
                                                            }
                                                        }
                                                    </Show>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </Show>
                        </tbody>
                    </table>
                </div>

                <div class="table__footer">
                    <span class="text-muted">
                        {move || {
                            format!(
                                "{} of {} row(s) selected",
                                selected.with(HashSet::len),
                                visible.with(Vec::len),
                            )
                        }}
                    </span>
                </div>
            </div>
        </div>
    }
}
