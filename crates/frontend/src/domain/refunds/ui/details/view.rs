use super::view_model::RefundDetailsViewModel;
use crate::domain::refunds::store::use_refund_store;
use crate::shared::icons::icon;
use contracts::domain::refund::{RefundDraft, RefundId};
use leptos::prelude::*;

/// One editable input in the dialog, bound to a draft field.
struct FieldSpec {
    key: &'static str,
    label: &'static str,
    input_type: &'static str,
    required: bool,
    get: fn(&RefundDraft) -> String,
    set: fn(&mut RefundDraft, String),
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "first_name",
        label: "First name",
        input_type: "text",
        required: true,
        get: |d| d.first_name.clone(),
        set: |d, v| d.first_name = v,
    },
    FieldSpec {
        key: "last_name",
        label: "Last name",
        input_type: "text",
        required: true,
        get: |d| d.last_name.clone(),
        set: |d, v| d.last_name = v,
    },
    FieldSpec {
        key: "email",
        label: "Email",
        input_type: "email",
        required: true,
        get: |d| d.email.clone(),
        set: |d, v| d.email = v,
    },
    FieldSpec {
        key: "phone",
        label: "Phone",
        input_type: "tel",
        required: false,
        get: |d| d.phone.clone(),
        set: |d, v| d.phone = v,
    },
    FieldSpec {
        key: "address_line1",
        label: "Address",
        input_type: "text",
        required: false,
        get: |d| d.address_line1.clone(),
        set: |d, v| d.address_line1 = v,
    },
    FieldSpec {
        key: "address_line2",
        label: "Address line 2",
        input_type: "text",
        required: false,
        get: |d| d.address_line2.clone(),
        set: |d, v| d.address_line2 = v,
    },
    FieldSpec {
        key: "city",
        label: "City",
        input_type: "text",
        required: false,
        get: |d| d.city.clone(),
        set: |d, v| d.city = v,
    },
    FieldSpec {
        key: "state",
        label: "State",
        input_type: "text",
        required: false,
        get: |d| d.state.clone(),
        set: |d, v| d.state = v,
    },
    FieldSpec {
        key: "zip_code",
        label: "ZIP code",
        input_type: "text",
        required: false,
        get: |d| d.zip_code.clone(),
        set: |d, v| d.zip_code = v,
    },
];

/// Edit dialog for a single refund. Binds to a draft; the record is only
/// updated when validation passes and the user saves.
#[component]
pub fn RefundDetails(
    record_id: RefundId,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let store = use_refund_store();
    let vm = RefundDetailsViewModel::load(store, record_id);

    view! {
        <div class="details-form">
            <div class="details-form__header">
                {icon("edit")}
                <h2 class="details-form__title">"Edit Refund"</h2>
                <span class="details-form__id">{record_id.as_string()}</span>
            </div>

            <Show
                when=move || !vm.is_missing()
                fallback=move || {
                    view! {
                        <div class="warning-box warning-box--error">
                            <span class="warning-box__icon">"⚠"</span>
                            <span class="warning-box__text">
                                {move || {
                                    vm.error.get().map(|e| e.to_string()).unwrap_or_default()
                                }}
                            </span>
                        </div>
                        <div class="details-form__footer">
                            <button
                                class="btn btn--secondary"
                                on:click=move |_| on_cancel.run(())
                            >
                                "Close"
                            </button>
                        </div>
                    }
                }
            >
                <div class="details-form__grid">
                    {FIELDS
                        .iter()
                        .map(|spec| {
                            let key = spec.key;
                            let get = spec.get;
                            let set = spec.set;
                            let err = Signal::derive(move || vm.field_error(key));
                            view! {
                                <div
                                    class="details-form__field"
                                    class=("details-form__field--error", move || err.get().is_some())
                                >
                                    <label class="details-form__label">
                                        {spec.label}
                                        {spec
                                            .required
                                            .then(|| {
                                                view! {
                                                    <span class="details-form__required">"*"</span>
                                                }
                                            })}
                                    </label>
                                    <input
                                        type=spec.input_type
                                        class="details-form__input"
                                        prop:value=move || vm.draft.with(get)
                                        on:input=move |ev| {
                                            vm.draft.update(|d| set(d, event_target_value(&ev)));
                                        }
                                    />
                                    {move || {
                                        err.get()
                                            .map(|m| {
                                                view! {
                                                    <span class="details-form__error">{m}</span>
                                                }
                                            })
                                    }}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="details-form__footer">
                    <button
                        class="btn btn--secondary"
                        on:click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| vm.save(on_saved)
                    >
                        "Save changes"
                    </button>
                </div>
            </Show>
        </div>
    }
}
