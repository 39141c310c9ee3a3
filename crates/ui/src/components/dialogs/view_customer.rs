//! Read-only customer details

use dioxus::prelude::*;
use waconsole_core::Customer;

use crate::i18n::{Text, t};
use crate::state::{DeleteTarget, Dialog, use_app};

#[derive(Props, Clone, PartialEq)]
pub struct ViewCustomerDialogProps {
    pub customer: Customer,
}

#[component]
pub fn ViewCustomerDialog(props: ViewCustomerDialogProps) -> Element {
    let app = use_app();
    let lang = app.language();
    let customer = props.customer.clone();

    let created = customer
        .creation_time
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string());

    let rows = [
        (t(lang, Text::FullName), customer.full_name.clone()),
        (t(lang, Text::CompanyName), customer.company_name.clone()),
        (t(lang, Text::MobileNumber), customer.mobile_number.clone()),
        (
            t(lang, Text::MasterMobileNumber),
            customer.master_mobile_number.clone(),
        ),
        (t(lang, Text::CreatedAt), created),
    ];

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
    let on_close = {
        let app = app.clone();
        move |_| app.close_dialog()
    };

    rsx! {
        div {
            class: "dialog-body view-customer-dialog",

            h2 { class: "dialog-title", {t(lang, Text::CustomerDetails)} }

            dl {
                class: "detail-list",
                for (label, value) in rows {
                    div {
                        key: "{label}",
                        class: "detail-row",
                        dt { "{label}" }
                        dd {
                            if value.is_empty() { "-" } else { "{value}" }
                        }
                    }
                }
            }

            div {
                class: "dialog-actions",
                button { class: "btn btn-danger", onclick: on_delete, {t(lang, Text::Delete)} }
                button { class: "btn btn-secondary", onclick: on_edit, {t(lang, Text::Edit)} }
                button { class: "btn btn-primary", onclick: on_close, {t(lang, Text::Close)} }
            }
        }
    }
}
