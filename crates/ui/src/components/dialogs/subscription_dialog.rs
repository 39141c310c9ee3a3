//! # Subscription Dialog Component
//!
//! Create and edit form for WhatsApp subscriptions. In edit mode the record
//! is fetched by id before the form is shown.

use dioxus::prelude::*;
use rust_decimal::Decimal;
use waconsole_core::{EntityId, PeriodType, SubscriptionInput, Validatable};

use crate::components::inputs::{Select, SelectOption, TextInput};
use crate::i18n::{Text, t};
use crate::state::{AppContext, use_app};

// ============================================================================
// Dialog Mode
// ============================================================================

/// Mode for the subscription dialog
#[derive(Debug, Clone, PartialEq)]
pub enum SubscriptionDialogMode {
    Create,
    Edit(EntityId),
}

// ============================================================================
// Form State
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct SubscriptionForm {
    customer_id: String,
    package_id: String,
    period_code: String,
    package_price: String,
}

impl Default for SubscriptionForm {
    fn default() -> Self {
        Self {
            customer_id: String::new(),
            package_id: String::new(),
            period_code: PeriodType::Monthly.code().to_string(),
            package_price: String::new(),
        }
    }
}

impl SubscriptionForm {
    fn from_input(input: &SubscriptionInput) -> Self {
        Self {
            customer_id: input.customer_id.clone(),
            package_id: input.package_id.clone(),
            period_code: input.period_type.code().to_string(),
            package_price: input.package_price.normalize().to_string(),
        }
    }

    /// Build the request body, or the list of problems with the draft
    fn to_input(&self) -> Result<SubscriptionInput, Vec<String>> {
        let mut errors = Vec::new();

        let period_type = match self.period_code.trim().parse::<u8>() {
            Ok(code) => PeriodType::from(code),
            Err(_) => {
                errors.push("Period type must be a number".to_string());
                PeriodType::default()
            }
        };

        let price = self.package_price.trim();
        let package_price = if price.is_empty() {
            errors.push("Package price is required".to_string());
            Decimal::ZERO
        } else {
            price.parse::<Decimal>().unwrap_or_else(|_| {
                errors.push("Package price must be a number".to_string());
                Decimal::ZERO
            })
        };

        let input = SubscriptionInput {
            customer_id: self.customer_id.trim().to_string(),
            package_id: self.package_id.trim().to_string(),
            period_type,
            package_price,
        };

        if input.customer_id.is_empty() {
            errors.insert(0, "Customer ID is required".to_string());
        }
        if input.package_id.is_empty() {
            errors.push("Package ID is required".to_string());
        }

        if errors.is_empty() && input.is_valid() {
            Ok(input)
        } else {
            Err(errors)
        }
    }
}

fn field_error(errors: &[String], field: &str) -> Option<String> {
    errors.iter().find(|e| e.starts_with(field)).cloned()
}

fn period_options() -> Vec<SelectOption> {
    PeriodType::SELECTABLE
        .iter()
        .map(|p| SelectOption::new(p.code().to_string(), p.label()))
        .collect()
}

// ============================================================================
// Component
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct SubscriptionDialogProps {
    pub mode: SubscriptionDialogMode,
}

/// Create/edit dialog for subscriptions
#[component]
pub fn SubscriptionDialog(props: SubscriptionDialogProps) -> Element {
    let app = use_app();
    let lang = app.language();

    let mut form = use_signal(SubscriptionForm::default);
    let mut errors = use_signal(Vec::<String>::new);
    let mut submit_error = use_signal(|| None::<String>);
    let mut is_saving = use_signal(|| false);
    let mut is_loading = use_signal(|| matches!(props.mode, SubscriptionDialogMode::Edit(_)));
    let mut load_error = use_signal(|| None::<String>);

    // Load the record being edited
    {
        let app = app.clone();
        let mode = props.mode.clone();
        use_hook(move || {
            if let SubscriptionDialogMode::Edit(id) = mode {
                spawn(async move {
                    match app.services.subscriptions.get(&id).await {
                        Ok(subscription) => {
                            form.set(SubscriptionForm::from_input(&subscription.to_input()));
                        }
                        Err(e) => load_error.set(Some(e.user_message())),
                    }
                    is_loading.set(false);
                });
            }
        });
    }

    let title = match &props.mode {
        SubscriptionDialogMode::Create => t(lang, Text::AddSubscription),
        SubscriptionDialogMode::Edit(_) => t(lang, Text::EditSubscription),
    };

    let handle_save = {
        let app = app.clone();
        let mode = props.mode.clone();
        move |_| {
            if *is_saving.read() || *is_loading.read() {
                return;
            }

            let input = match form.read().to_input() {
                Ok(input) => input,
                Err(problems) => {
                    errors.set(problems);
                    return;
                }
            };
            errors.set(Vec::new());
            submit_error.set(None);
            is_saving.set(true);

            let app = app.clone();
            let mode = mode.clone();
            spawn(async move {
                let result = save_subscription(&app, &mode, &input).await;
                is_saving.set(false);
                match result {
                    Ok(()) => {
                        app.close_dialog();
                        app.reload_subscriptions();
                    }
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
    let loading = *is_loading.read();
    let current = form.read().clone();
    let current_errors = errors.read().clone();

    rsx! {
        div {
            class: "dialog-body subscription-dialog",

            h2 { class: "dialog-title", "{title}" }

            if loading {
                p { class: "muted", {t(lang, Text::Loading)} }
            } else if let Some(message) = load_error.read().as_ref() {
                p { class: "inline-error", "{message}" }
            } else {
                div {
                    class: "form-grid",
                    TextInput {
                        label: t(lang, Text::CustomerId).to_string(),
                        value: current.customer_id.clone(),
                        required: true,
                        error: field_error(&current_errors, "Customer ID"),
                        on_change: move |v| form.write().customer_id = v,
                    }
                    TextInput {
                        label: t(lang, Text::PackageId).to_string(),
                        value: current.package_id.clone(),
                        required: true,
                        error: field_error(&current_errors, "Package ID"),
                        on_change: move |v| form.write().package_id = v,
                    }
                    Select {
                        label: t(lang, Text::Period).to_string(),
                        value: current.period_code.clone(),
                        options: period_options(),
                        required: true,
                        on_change: move |v| form.write().period_code = v,
                    }
                    TextInput {
                        label: t(lang, Text::Price).to_string(),
                        value: current.package_price.clone(),
                        input_type: "number".to_string(),
                        required: true,
                        error: field_error(&current_errors, "Package price"),
                        on_change: move |v| form.write().package_price = v,
                    }
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
                    disabled: saving || loading || load_error.read().is_some(),
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

async fn save_subscription(
    app: &AppContext,
    mode: &SubscriptionDialogMode,
    input: &SubscriptionInput,
) -> Result<(), String> {
    let service = &app.services.subscriptions;
    let result = match mode {
        SubscriptionDialogMode::Create => service.create(input).await,
        SubscriptionDialogMode::Edit(id) => service.update(id, input).await,
    };

    match result {
        Ok(saved) => {
            tracing::info!(subscription_id = %saved.id, "Subscription saved");
            Ok(())
        }
        Err(e) => Err(e.user_message()),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SubscriptionForm {
        SubscriptionForm {
            customer_id: "12".to_string(),
            package_id: "3".to_string(),
            period_code: "4".to_string(),
            package_price: "120.50".to_string(),
        }
    }

    #[test]
    fn test_valid_form_builds_input() {
        let input = filled().to_input().unwrap();
        assert_eq!(input.customer_id, "12");
        assert_eq!(input.period_type, PeriodType::Yearly);
        assert_eq!(input.package_price, Decimal::new(12050, 2));
    }

    #[test]
    fn test_missing_fields_are_reported() {
        let errors = SubscriptionForm::default().to_input().unwrap_err();
        assert!(field_error(&errors, "Customer ID").is_some());
        assert!(field_error(&errors, "Package ID").is_some());
        assert!(field_error(&errors, "Package price").is_some());
    }

    #[test]
    fn test_unparsable_price_is_rejected() {
        let form = SubscriptionForm {
            package_price: "ten".to_string(),
            ..filled()
        };
        let errors = form.to_input().unwrap_err();
        assert_eq!(errors, vec!["Package price must be a number".to_string()]);
    }

    #[test]
    fn test_period_options_are_monthly_and_yearly() {
        let codes: Vec<String> = period_options().into_iter().map(|o| o.value).collect();
        assert_eq!(codes, vec!["1", "4"]);
    }

    #[test]
    fn test_form_from_input_keeps_price_text() {
        let form = SubscriptionForm::from_input(&filled().to_input().unwrap());
        assert_eq!(form.package_price, "120.5");
        assert_eq!(form.period_code, "4");
    }
}
