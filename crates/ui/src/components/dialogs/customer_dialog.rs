//! # Customer Dialog Component
//!
//! Create and edit form for customers.
//!
//! - Create: the record returned by the server is prepended to the list
//!   and the dialog closes.
//! - Edit: the returned record replaces the displayed one by id. On
//!   failure the list is left alone and the dialog stays open.

use dioxus::prelude::*;
use waconsole_api::customers::CREATED;
use waconsole_api::{Resource, UpdateFailure};
use waconsole_core::{Customer, CustomerInput, Notice, Validatable};

use crate::components::inputs::TextInput;
use crate::i18n::{Text, t};
use crate::state::{AppContext, use_app};

// ============================================================================
// Dialog Mode
// ============================================================================

/// Mode for the customer dialog
#[derive(Debug, Clone, PartialEq)]
pub enum CustomerDialogMode {
    /// Creating a new customer
    Create,
    /// Editing the given customer
    Edit(Customer),
}

impl CustomerDialogMode {
    fn title(&self, app: &AppContext) -> &'static str {
        match self {
            CustomerDialogMode::Create => t(app.language(), Text::AddCustomer),
            CustomerDialogMode::Edit(_) => t(app.language(), Text::EditCustomer),
        }
    }
}

// ============================================================================
// Form State
// ============================================================================

/// Draft mirroring the editable customer fields
#[derive(Debug, Clone, Default, PartialEq)]
struct CustomerForm {
    full_name: String,
    company_name: String,
    mobile_number: String,
    master_mobile_number: String,
}

impl CustomerForm {
    fn from_customer(customer: &Customer) -> Self {
        Self {
            full_name: customer.full_name.clone(),
            company_name: customer.company_name.clone(),
            mobile_number: customer.mobile_number.clone(),
            master_mobile_number: customer.master_mobile_number.clone(),
        }
    }

    fn to_input(&self) -> CustomerInput {
        CustomerInput {
            full_name: Some(self.full_name.trim().to_string()),
            company_name: Some(self.company_name.trim().to_string()),
            mobile_number: Some(self.mobile_number.trim().to_string()),
            master_mobile_number: Some(self.master_mobile_number.trim().to_string()),
        }
    }
}

/// First validation error mentioning `field`
fn field_error(errors: &[String], field: &str) -> Option<String> {
    errors.iter().find(|e| e.starts_with(field)).cloned()
}

// ============================================================================
// Component
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct CustomerDialogProps {
    pub mode: CustomerDialogMode,
}

/// Create/edit dialog for customers
#[component]
pub fn CustomerDialog(props: CustomerDialogProps) -> Element {
    let app = use_app();
    let lang = app.language();

    let initial = match &props.mode {
        CustomerDialogMode::Create => CustomerForm::default(),
        CustomerDialogMode::Edit(customer) => CustomerForm::from_customer(customer),
    };
    let mut form = use_signal(move || initial);
    let mut errors = use_signal(Vec::<String>::new);
    let mut submit_error = use_signal(|| None::<String>);
    let mut is_saving = use_signal(|| false);

    let title = props.mode.title(&app);

    let handle_save = {
        let app = app.clone();
        let mode = props.mode.clone();
        move |_| {
            if *is_saving.read() {
                return;
            }

            let input = form.read().to_input();
            let validation = input.validation_errors();
            if !validation.is_empty() {
                errors.set(validation);
                return;
            }
            errors.set(Vec::new());
            submit_error.set(None);
            is_saving.set(true);

            let app = app.clone();
            let mode = mode.clone();
            spawn(async move {
                let saved = match &mode {
                    CustomerDialogMode::Create => create_customer(&app, &input).await,
                    CustomerDialogMode::Edit(existing) => {
                        update_customer(&app, existing, &input).await
                    }
                };
                is_saving.set(false);
                match saved {
                    Ok(()) => app.close_dialog(),
                    Err(message) => submit_error.set(Some(message)),
                }
            });
        }
    };

    let handle_cancel = {
        let app = app.clone();
        move |_| app.close_dialog()
    };

    let saving = *is_saving.read();
    let current = form.read().clone();
    let current_errors = errors.read().clone();

    rsx! {
        div {
            class: "dialog-body customer-dialog",

            h2 { class: "dialog-title", "{title}" }

            div {
                class: "form-grid",
                TextInput {
                    label: t(lang, Text::FullName).to_string(),
                    value: current.full_name.clone(),
                    required: true,
                    error: field_error(&current_errors, "Full name"),
                    on_change: move |v| form.write().full_name = v,
                }
                TextInput {
                    label: t(lang, Text::CompanyName).to_string(),
                    value: current.company_name.clone(),
                    on_change: move |v| form.write().company_name = v,
                }
                TextInput {
                    label: t(lang, Text::MobileNumber).to_string(),
                    value: current.mobile_number.clone(),
                    input_type: "tel".to_string(),
                    required: true,
                    error: field_error(&current_errors, "Mobile number"),
                    on_change: move |v| form.write().mobile_number = v,
                }
                TextInput {
                    label: t(lang, Text::MasterMobileNumber).to_string(),
                    value: current.master_mobile_number.clone(),
                    input_type: "tel".to_string(),
                    on_change: move |v| form.write().master_mobile_number = v,
                }
            }

            if let Some(message) = submit_error.read().as_ref() {
                p { class: "inline-error", "{message}" }
            }

            div {
                class: "dialog-actions",
                button {
                    class: "btn btn-secondary",
                    disabled: saving,
                    onclick: handle_cancel,
                    {t(lang, Text::Cancel)}
                }
                button {
                    class: "btn btn-primary",
                    disabled: saving,
                    onclick: handle_save,
                    if saving {
                        {t(lang, Text::Saving)}
                    } else {
                        {t(lang, Text::Save)}
                    }
                }
            }
        }
    }
}

// ============================================================================
// Submit Handlers
// ============================================================================

async fn create_customer(app: &AppContext, input: &CustomerInput) -> Result<(), String> {
    match app.services.customers.create(input).await {
        Ok(created) => {
            tracing::info!(customer_id = %created.id, "Customer created");
            let mut customers = app.customers;
            customers.write().prepend(created);
            app.notices.push(Notice::success(CREATED));
            Ok(())
        }
        Err(e) => Err(e.user_message()),
    }
}

async fn update_customer(
    app: &AppContext,
    existing: &Customer,
    input: &CustomerInput,
) -> Result<(), String> {
    match app.services.customers.update(&existing.id, input).await {
        Ok(updated) => {
            let mut customers = app.customers;
            if !customers.write().replace(updated) {
                tracing::debug!(customer_id = %existing.id, "Updated customer is not on this page");
            }
            Ok(())
        }
        Err(e) => Err(UpdateFailure::from_error(&e).message(Resource::Customer)),
    }
}

// ============================================================================
// Tests
// ============================================================================
