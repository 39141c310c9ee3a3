//! # Confirm Delete Dialog Component
//!
//! Confirms a customer or subscription delete, then runs it against the
//! server and reconciles the displayed list with the result.

use dioxus::prelude::*;
use waconsole_api::DeleteOutcome;
use waconsole_api::customers::{DELETE_ALREADY_GONE, DELETED, delete_failure_message};
use waconsole_api::subscriptions;
use waconsole_core::{ConsoleResult, DeleteResolution, EntityId, Notice};

use crate::i18n::{Text, t};
use crate::state::{AppContext, DeleteTarget, StatusLevel, use_app};

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct ConfirmDeleteDialogProps {
    /// The target to delete
    pub target: DeleteTarget,
}

// ============================================================================
// Main Component
// ============================================================================

/// Confirmation dialog for delete operations
#[component]
pub fn ConfirmDeleteDialog(props: ConfirmDeleteDialogProps) -> Element {
    let app = use_app();
    let lang = app.language();
    let mut is_deleting = use_signal(|| false);
    let mut inline_error = use_signal(|| None::<String>);

    let title = match &props.target {
        DeleteTarget::Customer { .. } => t(lang, Text::Customer),
        DeleteTarget::Subscription { .. } => t(lang, Text::Subscriptions),
    };
    let item_name = props.target.display_name().to_string();

    let handle_delete = {
        let app = app.clone();
        let target = props.target.clone();
        move |_| {
            if *is_deleting.read() {
                return;
            }
            is_deleting.set(true);
            inline_error.set(None);

            let app = app.clone();
            let target = target.clone();
            spawn(async move {
                match &target {
                    DeleteTarget::Customer { id, .. } => delete_customer(&app, id).await,
                    DeleteTarget::Subscription { id, .. } => {
                        if let Err(message) = delete_subscription(&app, id).await {
                            inline_error.set(Some(message));
                        }
                    }
                }
                is_deleting.set(false);
            });
        }
    };

    let handle_cancel = {
        let app = app.clone();
        move |_| app.close_dialog()
    };

    let deleting = *is_deleting.read();

    rsx! {
        div {
            class: "dialog-body confirm-delete-dialog",

            div {
                class: "dialog-warning-header",
                div { class: "dialog-warning-icon", "⚠️" }
                div {
                    h2 { class: "dialog-title danger", {t(lang, Text::ConfirmDelete)} }
                    p { class: "dialog-subtitle", "{title}" }
                    p { class: "muted", {t(lang, Text::DeleteWarning)} }
                }
            }

            if !item_name.is_empty() {
                div {
                    class: "delete-item",
                    span { class: "muted", "{item_name}" }
                }
            }

            if let Some(error) = inline_error.read().as_ref() {
                p { class: "inline-error", "{error}" }
            }

            div {
                class: "dialog-actions",
                button {
                    class: "btn btn-secondary",
                    disabled: deleting,
                    onclick: handle_cancel,
                    {t(lang, Text::Cancel)}
                }
                button {
                    class: "btn btn-danger",
                    disabled: deleting,
                    onclick: handle_delete,
                    if deleting {
                        {t(lang, Text::Deleting)}
                    } else {
                        {t(lang, Text::Delete)}
                    }
                }
            }
        }
    }
}

// ============================================================================
// Delete Operations
// ============================================================================

/// Delete a customer and reconcile the list with the outcome.
///
/// The dialog closes whatever the outcome; failures are reported as toasts.
async fn delete_customer(app: &AppContext, id: &EntityId) {
    let result = app.services.customers.delete(id).await;

    let mut customers = app.customers;
    let resolution = customers.write().resolve_delete(id, &result);

    match &resolution {
        DeleteResolution::Removed => {
            tracing::info!(customer_id = %id, "Customer deleted");
            app.notices.push(Notice::success(DELETED));
        }
        DeleteResolution::AlreadyGone => {
            tracing::warn!(customer_id = %id, "Customer was already gone on the server");
            app.notices.push(Notice::warning(DELETE_ALREADY_GONE));
            app.reload_customers();
        }
        DeleteResolution::Rejected { .. } => {
            if let Some(message) = delete_failure_message(&resolution) {
                app.notices.push(Notice::error(message.clone()));
                let mut ui = app.ui;
                ui.write().set_status(message, StatusLevel::Error);
            }
        }
    }

    app.close_dialog();
}

/// What the subscriptions view does after a delete request
#[derive(Debug, Clone, PartialEq)]
enum SubscriptionDeleteStep {
    /// Deleted on the server: close and refetch
    Done,
    /// The server no longer had it: warn, close and refetch
    AlreadyGone,
    /// Keep the dialog open with this message
    Failed(String),
}

fn subscription_delete_step(result: &ConsoleResult<DeleteOutcome>) -> SubscriptionDeleteStep {
    match result {
        Ok(_) => SubscriptionDeleteStep::Done,
        Err(e) if e.is_not_found() => SubscriptionDeleteStep::AlreadyGone,
        Err(e) => SubscriptionDeleteStep::Failed(e.user_message()),
    }
}

/// Delete a subscription and refetch the current page.
///
/// A 404 counts as already removed. Other failures keep the dialog open
/// with the relabeled message.
async fn delete_subscription(app: &AppContext, id: &EntityId) -> Result<(), String> {
    let result = app.services.subscriptions.delete(id).await;

    match subscription_delete_step(&result) {
        SubscriptionDeleteStep::Done => {
            tracing::info!(subscription_id = %id, "Subscription deleted");
        }
        SubscriptionDeleteStep::AlreadyGone => {
            tracing::warn!(subscription_id = %id, "Subscription was already gone on the server");
            app.notices.push(Notice::warning(subscriptions::DELETE_ALREADY_GONE));
        }
        SubscriptionDeleteStep::Failed(message) => {
            app.notices.push(Notice::error(message.clone()));
            return Err(message);
        }
    }

    app.close_dialog();
    app.reload_subscriptions();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use waconsole_core::ConsoleError;

    #[test]
    fn test_subscription_delete_success_refetches() {
        let result = Ok(DeleteOutcome::Acknowledged {
            id: EntityId::new("7"),
        });
        assert_eq!(subscription_delete_step(&result), SubscriptionDeleteStep::Done);
    }

    #[test]
    fn test_subscription_delete_not_found_is_already_gone() {
        let result = Err(ConsoleError::server(404, None).relabel(subscriptions::DELETE_FAILED));
        assert_eq!(
            subscription_delete_step(&result),
            SubscriptionDeleteStep::AlreadyGone
        );
    }

    #[test]
    fn test_subscription_delete_server_error_keeps_dialog() {
        let result =
            Err(ConsoleError::server(500, None).relabel(subscriptions::DELETE_SERVER_ERROR));
        assert_eq!(
            subscription_delete_step(&result),
            SubscriptionDeleteStep::Failed(subscriptions::DELETE_SERVER_ERROR.to_string())
        );
    }
}
