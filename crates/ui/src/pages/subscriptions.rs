//! Subscriptions Page Component
//!
//! Server-paged subscription table. Previous is disabled on the first page
//! and Next once a page comes back short.

use dioxus::prelude::*;
use rust_decimal::Decimal;
use waconsole_core::{Phase, Subscription};

use crate::actions::load_subscriptions;
use crate::i18n::{Text, t};
use crate::state::{DeleteTarget, Dialog, use_app};

fn format_amount(amount: Option<Decimal>) -> String {
    amount
        .map(|a| a.round_dp(2).to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn delete_label(subscription: &Subscription) -> String {
    match (
        subscription.customer_full_name.is_empty(),
        subscription.package_name.is_empty(),
    ) {
        (false, false) => format!(
            "{} / {}",
            subscription.customer_full_name, subscription.package_name
        ),
        (false, true) => subscription.customer_full_name.clone(),
        _ => format!("#{}", subscription.id),
    }
}

/// Subscription list page
#[component]
pub fn SubscriptionsPage() -> Element {
    let app = use_app();
    let lang = app.language();
    let mut query = app.subscription_query;
    let subscriptions = app.subscriptions;

    {
        let app = app.clone();
        use_effect(move || {
            let _query = app.subscription_query.read().clone();
            let _generation = *app.subscription_reload.read();
            load_subscriptions(&app);
        });
    }

    let list = subscriptions.read();
    let current_query = query.read().clone();
    let loading = list.is_loading();
    let error = if list.phase() == Phase::Error {
        list.last_error().map(str::to_string)
    } else {
        None
    };
    let rows: Vec<Subscription> = list.items().to_vec();
    let can_previous = current_query.has_previous();
    let can_next = current_query.has_next(list.fetched_len());
    let page_label = format!("{} {}", t(lang, Text::Page), current_query.page_number());
    let add_label = format!("+ {}", t(lang, Text::AddSubscription));

    let on_add = {
        let app = app.clone();
        move |_| app.show_dialog(Dialog::AddSubscription)
    };
    let on_refresh = {
        let app = app.clone();
        move |_| app.reload_subscriptions()
    };

    rsx! {
        div {
            class: "page subscriptions-page",

            div {
                class: "page-header",
                h1 { class: "page-title", {t(lang, Text::Subscriptions)} }
                div {
                    class: "page-actions",
                    button {
                        class: "btn btn-secondary",
                        disabled: loading,
                        onclick: on_refresh,
                        if loading { {t(lang, Text::Loading)} } else { {t(lang, Text::Refresh)} }
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: on_add,
                        "{add_label}"
                    }
                }
            }

            if let Some(message) = error {
                div { class: "error-banner", span { "{message}" } }
            }

            div {
                class: "table-wrapper",
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { {t(lang, Text::Customer)} }
                            th { {t(lang, Text::Package)} }
                            th { {t(lang, Text::Period)} }
                            th { {t(lang, Text::Price)} }
                            th { {t(lang, Text::Total)} }
                            th { class: "col-actions", {t(lang, Text::Actions)} }
                        }
                    }
                    tbody {
                        if rows.is_empty() {
                            tr {
                                td {
                                    colspan: "6",
                                    class: "empty-row",
                                    if loading { {t(lang, Text::Loading)} } else { {t(lang, Text::NoRecords)} }
                                }
                            }
                        }
                        for subscription in rows {
                            SubscriptionRow { key: "{subscription.id}", subscription }
                        }
                    }
                }
            }

            div {
                class: "server-pager",
                button {
                    class: "btn btn-secondary",
                    disabled: loading || !can_previous,
                    onclick: move |_| query.write().previous_page(),
                    {t(lang, Text::Previous)}
                }
                span { class: "pager-page", "{page_label}" }
                button {
                    class: "btn btn-secondary",
                    disabled: loading || !can_next,
                    onclick: move |_| query.write().next_page(),
                    {t(lang, Text::Next)}
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SubscriptionRowProps {
    subscription: Subscription,
}

#[component]
fn SubscriptionRow(props: SubscriptionRowProps) -> Element {
    let app = use_app();
    let lang = app.language();
    let sub = props.subscription.clone();

    let customer = if sub.customer_full_name.is_empty() {
        sub.customer_id.to_string()
    } else {
        sub.customer_full_name.clone()
    };
    let package = if sub.package_name.is_empty() {
        sub.package_id.to_string()
    } else {
        sub.package_name.clone()
    };
    let period = sub.period_type.label();
    let price = format_amount(Some(sub.package_price));
    let total = format_amount(sub.total_amount);

    let on_edit = {
        let app = app.clone();
        let id = sub.id.clone();
        move |_| app.show_dialog(Dialog::EditSubscription(id.clone()))
    };
    let on_delete = {
        let app = app.clone();
        let target = DeleteTarget::Subscription {
            id: sub.id.clone(),
            label: delete_label(&sub),
        };
        move |_| app.show_dialog(Dialog::ConfirmDelete(target.clone()))
    };

    rsx! {
        tr {
            td { class: "cell-strong", "{customer}" }
            td { "{package}" }
            td { "{period}" }
            td { class: "cell-number", "{price}" }
            td { class: "cell-number", "{total}" }
            td {
                class: "col-actions",
                button { class: "btn btn-link", onclick: on_edit, {t(lang, Text::Edit)} }
                button { class: "btn btn-link danger", onclick: on_delete, {t(lang, Text::Delete)} }
            }
        }
    }
}
