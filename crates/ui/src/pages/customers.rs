//! Customers Page Component
//!
//! Server-side filter, sort and skip/limit paging, with client-side search
//! and a second page layer over the fetched rows.

use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use waconsole_core::{ClientPager, Customer, ListQuery, Phase, SortOption};

use crate::actions::load_customers;
use crate::components::{ClientPagerBar, Select, SelectOption, TextInput};
use crate::i18n::{Text, t};
use crate::state::{DeleteTarget, Dialog, use_app};

// ============================================================================
// Helpers
// ============================================================================

fn sort_options() -> Vec<SelectOption> {
    SortOption::ALL
        .iter()
        .map(|o| SelectOption::new(o.expression(), o.label()))
        .collect()
}

/// Apply a server filter. Any server-side change returns to client page one.
fn apply_filter(query: &mut ListQuery, pager: &mut ClientPager, filter: &str) {
    query.set_filter(filter.trim());
    pager.reset();
}

fn apply_sort(query: &mut ListQuery, pager: &mut ClientPager, expression: String) {
    query.set_sorting(expression);
    pager.reset();
}

fn step_server_page(query: &mut ListQuery, pager: &mut ClientPager, forward: bool) {
    if forward {
        query.next_page();
    } else {
        query.previous_page();
    }
    pager.reset();
}

fn format_created(time: Option<DateTime<Utc>>) -> String {
    time.map(|t| t.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

// ============================================================================
// Page Component
// ============================================================================

/// Customer list page
#[component]
pub fn CustomersPage() -> Element {
    let app = use_app();
    let lang = app.language();

    let mut query = app.customer_query;
    let mut pager = app.customer_pager;
    let customers = app.customers;

    // Refetch whenever the server query changes or a reload is requested
    {
        let app = app.clone();
        use_effect(move || {
            let _query = app.customer_query.read().clone();
            let _generation = *app.customer_reload.read();
            load_customers(&app);
        });
    }

    // Keep the client page in range when the collection shrinks
    use_effect(move || {
        let total = pager.peek().filter(customers.read().items()).len();
        if pager.peek().effective_page(total) != pager.peek().page() {
            pager.write().clamp(total);
        }
    });

    let mut filter_draft = use_signal(|| query.peek().filter.clone().unwrap_or_default());

    let list = customers.read();
    let current_query = query.read().clone();
    let pager_state = pager.read().clone();

    let filtered = pager_state.filter(list.items());
    let visible = pager_state.page_of(&filtered);
    let total = filtered.len();
    let loading = list.is_loading();
    let error = if list.phase() == Phase::Error {
        list.last_error().map(str::to_string)
    } else {
        None
    };

    let server_page_label = format!(
        "{} {}",
        t(lang, Text::ServerPage),
        current_query.page_number()
    );
    let has_previous_server_page = current_query.has_previous();
    let has_next_server_page = current_query.has_next(list.fetched_len());

    let add_label = format!("+ {}", t(lang, Text::AddCustomer));

    let on_add = {
        let app = app.clone();
        move |_| app.show_dialog(Dialog::AddCustomer)
    };
    let on_refresh = {
        let app = app.clone();
        move |_| app.reload_customers()
    };
    let on_retry = on_refresh.clone();

    rsx! {
        div {
            class: "page customers-page",

            // Header
            div {
                class: "page-header",
                h1 { class: "page-title", {t(lang, Text::Customers)} }
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

            // Toolbar
            div {
                class: "list-toolbar",
                TextInput {
                    label: t(lang, Text::Search).to_string(),
                    value: pager_state.term().to_string(),
                    placeholder: t(lang, Text::Search).to_string(),
                    on_change: move |term: String| pager.write().set_term(term),
                }
                TextInput {
                    label: t(lang, Text::ServerFilter).to_string(),
                    value: filter_draft.read().clone(),
                    on_change: move |v| filter_draft.set(v),
                    on_enter: move |v: String| {
                        apply_filter(&mut query.write(), &mut pager.write(), &v);
                    },
                }
                Select {
                    label: t(lang, Text::SortBy).to_string(),
                    value: current_query.sorting.clone(),
                    options: sort_options(),
                    on_change: move |expr: String| {
                        apply_sort(&mut query.write(), &mut pager.write(), expr);
                    },
                }
            }

            if let Some(message) = error {
                div {
                    class: "error-banner",
                    span { "{message}" }
                    button {
                        class: "btn btn-secondary",
                        onclick: on_retry,
                        {t(lang, Text::Retry)}
                    }
                }
            }

            // Table
            div {
                class: "table-wrapper",
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { {t(lang, Text::FullName)} }
                            th { {t(lang, Text::CompanyName)} }
                            th { {t(lang, Text::MobileNumber)} }
                            th { {t(lang, Text::MasterMobileNumber)} }
                            th { {t(lang, Text::CreatedAt)} }
                            th { class: "col-actions", {t(lang, Text::Actions)} }
                        }
                    }
                    tbody {
                        if visible.is_empty() {
                            tr {
                                td {
                                    colspan: "6",
                                    class: "empty-row",
                                    if loading { {t(lang, Text::Loading)} } else { {t(lang, Text::NoRecords)} }
                                }
                            }
                        }
                        for customer in visible.iter() {
                            CustomerRow { key: "{customer.id}", customer: (*customer).clone() }
                        }
                    }
                }
            }

            ClientPagerBar { pager, total }

            // Server paging
            div {
                class: "server-pager",
                button {
                    class: "btn btn-secondary",
                    disabled: loading || !has_previous_server_page,
                    onclick: move |_| {
                        step_server_page(&mut query.write(), &mut pager.write(), false);
                    },
                    {t(lang, Text::Previous)}
                }
                span { class: "pager-page", "{server_page_label}" }
                button {
                    class: "btn btn-secondary",
                    disabled: loading || !has_next_server_page,
                    onclick: move |_| {
                        step_server_page(&mut query.write(), &mut pager.write(), true);
                    },
                    {t(lang, Text::Next)}
                }
            }
        }
    }
}

// ============================================================================
// Table Row
// ============================================================================

#[derive(Props, Clone, PartialEq)]
struct CustomerRowProps {
    customer: Customer,
}

#[component]
fn CustomerRow(props: CustomerRowProps) -> Element {
    let app = use_app();
    let lang = app.language();
    let customer = props.customer.clone();
    let created = format_created(customer.creation_time);

    let on_view = {
        let app = app.clone();
        let customer = customer.clone();
        move |_| app.show_dialog(Dialog::ViewCustomer(customer.clone()))
    };
    let on_edit = {
        let app = app.clone();
        let customer = customer.clone();
        move |_| app.show_dialog(Dialog::EditCustomer(customer.clone()))
    };
    let on_delete = {
        let app = app.clone();
        let customer = customer.clone();
        move |_| {
            app.show_dialog(Dialog::ConfirmDelete(DeleteTarget::Customer {
                id: customer.id.clone(),
                name: customer.full_name.clone(),
            }))
        }
    };

    rsx! {
        tr {
            td { class: "cell-strong", "{customer.full_name}" }
            td { "{customer.company_name}" }
            td { class: "cell-mono", "{customer.mobile_number}" }
            td { class: "cell-mono", "{customer.master_mobile_number}" }
            td { "{created}" }
            td {
                class: "col-actions",
                button { class: "btn btn-link", onclick: on_view, {t(lang, Text::View)} }
                button { class: "btn btn-link", onclick: on_edit, {t(lang, Text::Edit)} }
                button { class: "btn btn-link danger", onclick: on_delete, {t(lang, Text::Delete)} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_sort_options_carry_server_expressions() {
        let options = sort_options();
        assert_eq!(options.len(), 4);
        assert_eq!(options[0].value, "creationTime DESC");
        assert_eq!(options[3].value, "fullName DESC");
    }

    #[test]
    fn test_format_created() {
        let time = Utc.with_ymd_and_hms(2024, 3, 9, 10, 0, 0).single();
        assert_eq!(format_created(time), "2024-03-09");
        assert_eq!(format_created(None), "-");
    }

    fn pager_on_page_three() -> ClientPager {
        let mut pager = ClientPager::new();
        pager.go_to(3);
        pager
    }

    #[test]
    fn test_server_filter_returns_to_first_client_page() {
        let mut query = ListQuery::customers(100);
        query.next_page();
        let mut pager = pager_on_page_three();

        apply_filter(&mut query, &mut pager, "  ada ");
        assert_eq!(pager.page(), 1);
        assert_eq!(query.filter.as_deref(), Some("ada"));
        assert_eq!(query.page_number(), 1);
    }

    #[test]
    fn test_sort_change_returns_to_first_client_page() {
        let mut query = ListQuery::customers(100);
        let mut pager = pager_on_page_three();

        apply_sort(&mut query, &mut pager, "fullName ASC".to_string());
        assert_eq!(pager.page(), 1);
        assert_eq!(query.sorting, "fullName ASC");
    }

    #[test]
    fn test_server_paging_returns_to_first_client_page() {
        let mut query = ListQuery::customers(100);
        let mut pager = pager_on_page_three();

        step_server_page(&mut query, &mut pager, true);
        assert_eq!(pager.page(), 1);
        assert_eq!(query.page_number(), 2);

        pager.go_to(2);
        step_server_page(&mut query, &mut pager, false);
        assert_eq!(pager.page(), 1);
        assert_eq!(query.page_number(), 1);
    }
}
