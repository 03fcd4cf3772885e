//! Event-to-email dispatch.
//!
//! One handler per event variant. Each validates required fields, renders
//! the recipient message, and delivers it; reservation and waitlist events
//! additionally deliver a plain internal summary when an admin mailbox is
//! configured. The two sends run sequentially inside one fault boundary:
//! an admin failure still fails the whole request even though the recipient
//! mail is already out (emails cannot be unsent).

use std::sync::Arc;

use crate::email::{EmailSender, OutboundEmail};
use crate::error::{AppError, Result};

use super::event::{ReservationRequest, StatusUpdateRequest, WaitlistRequest};
use super::templates::{escape_html, multiline_html, RenderedMessage, TemplateConfig};

/// Loan-start events are intentionally not user-notified.
const STATUS_ON_LOAN: &str = "On Loan";
const STATUS_READY_FOR_PICKUP: &str = "Ready for Pickup";
const STATUS_RETURNED: &str = "Returned";

/// What the dispatcher did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// At least one email was delivered
    Sent,
    /// The suppression rule applied; nothing was sent
    Skipped,
}

/// Decides whether an event produces email, renders it, and requests delivery.
pub struct NotificationDispatcher {
    sender: Arc<dyn EmailSender>,
    templates: TemplateConfig,
    admin_address: Option<String>,
}

impl NotificationDispatcher {
    pub fn new(
        sender: Arc<dyn EmailSender>,
        templates: TemplateConfig,
        admin_address: Option<String>,
    ) -> Self {
        Self {
            sender,
            templates,
            admin_address,
        }
    }

    /// Notify a parent that their reservation was received.
    #[tracing::instrument(name = "dispatcher.reservation_created", skip(self, request))]
    pub async fn handle_reservation_created(
        &self,
        request: &ReservationRequest,
    ) -> Result<DispatchOutcome> {
        let parent_email = require("parentEmail", &request.parent_email)?;
        let item_name = require("itemName", &request.item_name)?;

        let message = self.render_reservation(request, item_name);
        self.deliver(parent_email, message).await?;

        if let Some(admin) = self.admin_address.as_deref() {
            let summary = admin_reservation_summary(request, parent_email, item_name);
            self.deliver(admin, summary).await?;
        }

        Ok(DispatchOutcome::Sent)
    }

    /// Confirm a waitlist entry to the parent.
    #[tracing::instrument(name = "dispatcher.waitlist_created", skip(self, request))]
    pub async fn handle_waitlist_created(
        &self,
        request: &WaitlistRequest,
    ) -> Result<DispatchOutcome> {
        let parent_email = require("parentEmail", &request.parent_email)?;
        let item_name = require("itemName", &request.item_name)?;

        let message = self.render_waitlist(request, item_name);
        self.deliver(parent_email, message).await?;

        if let Some(admin) = self.admin_address.as_deref() {
            let summary = admin_waitlist_summary(request, parent_email, item_name);
            self.deliver(admin, summary).await?;
        }

        Ok(DispatchOutcome::Sent)
    }

    /// Notify a parent of a loan status change, unless the status is suppressed.
    #[tracing::instrument(name = "dispatcher.status_updated", skip(self, request))]
    pub async fn handle_status_updated(
        &self,
        request: &StatusUpdateRequest,
    ) -> Result<DispatchOutcome> {
        let parent_email = require("parentEmail", &request.parent_email)?;
        let item_name = require("itemName", &request.item_name)?;
        let new_status = require("newStatus", &request.new_status)?;

        if new_status == STATUS_ON_LOAN {
            tracing::debug!(item = %item_name, "Suppressing notification for loan start");
            return Ok(DispatchOutcome::Skipped);
        }

        let message = self.render_status_update(request, item_name, new_status);
        self.deliver(parent_email, message).await?;

        Ok(DispatchOutcome::Sent)
    }

    async fn deliver(&self, to: &str, message: RenderedMessage) -> Result<()> {
        let receipt = self
            .sender
            .send(&OutboundEmail {
                to: to.to_string(),
                subject: message.subject,
                html: message.html,
            })
            .await?;

        tracing::debug!(to = %to, provider_id = ?receipt.provider_id, "Email dispatched");
        Ok(())
    }

    fn render_reservation(&self, request: &ReservationRequest, item_name: &str) -> RenderedMessage {
        let item = escape_html(item_name);
        let mut content = format!("<p>Hi {},</p>", greeting_name(&request.parent_name));

        match present(&request.child_name) {
            Some(child) => content.push_str(&format!(
                "<p>We have received your reservation for <strong>{item}</strong> for {}.</p>",
                escape_html(child)
            )),
            None => content.push_str(&format!(
                "<p>We have received your reservation for <strong>{item}</strong>.</p>"
            )),
        }

        match present(&request.preferred_day) {
            Some(day) => content.push_str(&format!(
                "<p>Your preferred pickup day is <strong>{}</strong>.</p>",
                escape_html(day)
            )),
            None => {
                content.push_str("<p>We will contact you to arrange a pickup time.</p>");
            }
        }

        if let Some(note) = present(&request.note) {
            content.push_str(&format!("<p>Your note: {}</p>", multiline_html(note)));
        }

        content.push_str(
            "<p>We will send you another email as soon as your toy is ready for pickup.</p>",
        );

        RenderedMessage {
            subject: format!("Reservation Received - {item_name}"),
            html: self
                .templates
                .render_branded("Reservation Received", &content, false),
        }
    }

    fn render_waitlist(&self, request: &WaitlistRequest, item_name: &str) -> RenderedMessage {
        let item = escape_html(item_name);
        let mut content = format!("<p>Hi {},</p>", greeting_name(&request.parent_name));

        match present(&request.child_name) {
            Some(child) => content.push_str(&format!(
                "<p>You have been added to the waitlist for <strong>{item}</strong> for {}.</p>",
                escape_html(child)
            )),
            None => content.push_str(&format!(
                "<p>You have been added to the waitlist for <strong>{item}</strong>.</p>"
            )),
        }

        content.push_str("<p>We will email you as soon as it becomes available.</p>");

        RenderedMessage {
            subject: format!("Waitlist Confirmation - {item_name}"),
            html: self
                .templates
                .render_branded("Waitlist Confirmation", &content, false),
        }
    }

    fn render_status_update(
        &self,
        request: &StatusUpdateRequest,
        item_name: &str,
        new_status: &str,
    ) -> RenderedMessage {
        let item = escape_html(item_name);

        let (subject, html) = match new_status {
            STATUS_READY_FOR_PICKUP => {
                let mut content = format!("<p>Hi {},</p>", greeting_name(&request.parent_name));

                match present(&request.child_name) {
                    Some(child) => content.push_str(&format!(
                        "<p><strong>{item}</strong> for {} is ready for pickup!</p>",
                        escape_html(child)
                    )),
                    None => content
                        .push_str(&format!("<p><strong>{item}</strong> is ready for pickup!</p>")),
                }

                if let Some(day) = present(&request.preferred_day) {
                    content.push_str(&format!(
                        "<p>Your preferred pickup day is <strong>{}</strong>.</p>",
                        escape_html(day)
                    ));
                }

                content.push_str(
                    "<p>Please bring this confirmation email with you when you come to pick up.</p>",
                );

                (
                    format!("\u{1F389} Your toy is ready for pickup - {item_name}"),
                    self.templates
                        .render_branded("Your Toy is Ready for Pickup", &content, true),
                )
            }
            STATUS_RETURNED => {
                let content = format!(
                    "<p>Hi {},</p>\
                     <p><strong>{item}</strong> has been marked as Returned.</p>\
                     <p>Thank you for using the toy library!</p>",
                    greeting_name(&request.parent_name),
                );

                (
                    format!("Update for {item_name}"),
                    self.templates.render_branded("Thank You", &content, false),
                )
            }
            // Unrecognized statuses keep the generic subject and go out with
            // an empty body. Known behavior, covered by tests; changing it is
            // a product decision.
            _ => (format!("Update for {item_name}"), String::new()),
        };

        RenderedMessage { subject, html }
    }
}

/// Non-empty trimmed value, or `None`.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Escaped parent name for greetings, defaulting to "there".
fn greeting_name(value: &Option<String>) -> String {
    present(value)
        .map(escape_html)
        .unwrap_or_else(|| "there".to_string())
}

/// Escaped value for admin summaries, defaulting to "N/A".
fn or_na(value: &Option<String>) -> String {
    present(value)
        .map(escape_html)
        .unwrap_or_else(|| "N/A".to_string())
}

fn require<'a>(field: &'static str, value: &'a Option<String>) -> Result<&'a str> {
    present(value).ok_or_else(|| AppError::Validation(format!("missing required field: {field}")))
}

fn admin_reservation_summary(
    request: &ReservationRequest,
    parent_email: &str,
    item_name: &str,
) -> RenderedMessage {
    RenderedMessage {
        subject: format!("New reservation - {item_name}"),
        html: format!(
            "<p>A new reservation was created.</p>\
             <ul>\
             <li>Parent: {parent}</li>\
             <li>Email: {email}</li>\
             <li>Child: {child}</li>\
             <li>Item: {item}</li>\
             <li>Preferred day: {day}</li>\
             </ul>",
            parent = or_na(&request.parent_name),
            email = escape_html(parent_email),
            child = or_na(&request.child_name),
            item = escape_html(item_name),
            day = or_na(&request.preferred_day),
        ),
    }
}

fn admin_waitlist_summary(
    request: &WaitlistRequest,
    parent_email: &str,
    item_name: &str,
) -> RenderedMessage {
    RenderedMessage {
        subject: format!("New waitlist entry - {item_name}"),
        html: format!(
            "<p>A new waitlist entry was created.</p>\
             <ul>\
             <li>Parent: {parent}</li>\
             <li>Email: {email}</li>\
             <li>Child: {child}</li>\
             <li>Item: {item}</li>\
             </ul>",
            parent = or_na(&request.parent_name),
            email = escape_html(parent_email),
            child = or_na(&request.child_name),
            item = escape_html(item_name),
        ),
    }
}
