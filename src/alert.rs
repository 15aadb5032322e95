//! Alert fragments for displaying success and error messages to users.
//!
//! Alerts are rendered as HTML fragments and swapped into the
//! `#alert-container` element that [crate::html::base] places on every page.

use maud::{Markup, html};

/// An alert message to display to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// Something worked and is worth telling the user about.
    Success {
        /// The headline of the alert.
        message: String,
        /// Supporting detail, may be empty.
        details: String,
    },
    /// Something went wrong.
    Error {
        /// The headline of the alert.
        message: String,
        /// Supporting detail, may be empty.
        details: String,
    },
}

impl Alert {
    /// Render the alert as an HTML fragment.
    pub fn into_html(self) -> Markup {
        let (style, message, details) = match self {
            Alert::Success { message, details } => (
                "p-4 mb-4 text-sm rounded-lg shadow-lg text-green-800 bg-green-50 \
                dark:bg-gray-800 dark:text-green-400",
                message,
                details,
            ),
            Alert::Error { message, details } => (
                "p-4 mb-4 text-sm rounded-lg shadow-lg text-red-800 bg-red-50 \
                dark:bg-gray-800 dark:text-red-400",
                message,
                details,
            ),
        };

        html! {
            div class=(style) role="alert"
            {
                span class="font-medium" { (message) }

                @if !details.is_empty() {
                    " " (details)
                }
            }
        }
    }
}
