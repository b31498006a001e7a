//! RSVP actions for events.
//!
//! An event either opens the visitor's mail client with a pre-filled
//! subject, or (for `noEmail` events and cancellations) just shows a
//! confirmation message.

use serde::Serialize;

use crate::event::Event;
use crate::format::format_cancellation;

/// Label used when an event has no `buttonText`.
pub const DEFAULT_BUTTON_LABEL: &str = "RSVP";

/// What a calling UI should do when the visitor responds to an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum RsvpAction {
    /// Open this `mailto:` link.
    Mailto(String),
    /// Show this message instead of sending an email.
    Confirmation(String),
}

impl RsvpAction {
    /// Returns the link or message.
    pub fn value(&self) -> &str {
        match self {
            Self::Mailto(url) | Self::Confirmation(url) => url,
        }
    }
}

impl Event {
    /// Label for the RSVP button.
    pub fn button_label(&self) -> &str {
        self.button_text.as_deref().unwrap_or(DEFAULT_BUTTON_LABEL)
    }

    /// Subject line for the RSVP email.
    pub fn rsvp_subject(&self) -> String {
        match self.email_subject {
            Some(ref subject) => subject.clone(),
            None => format!("RSVP: {}", self.title),
        }
    }

    /// Derives the RSVP action, mailing `contact_email` when email is allowed.
    pub fn rsvp_action(&self, contact_email: &str) -> RsvpAction {
        if self.is_no_meeting {
            return RsvpAction::Confirmation(format_cancellation(self));
        }

        if self.no_email {
            let message = self.rsvp_message.clone().unwrap_or_else(|| {
                format!("Thanks! We look forward to seeing you at {}.", self.title)
            });
            return RsvpAction::Confirmation(message);
        }

        RsvpAction::Mailto(format!(
            "mailto:{contact_email}?subject={}",
            urlencoding::encode(&self.rsvp_subject())
        ))
    }
}
