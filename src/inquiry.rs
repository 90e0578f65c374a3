//! Stock inquiry text for the messaging handoff.
//!
//! The message opens with a time-of-day greeting and lists the selected
//! entries by name in selection order, switching to plural wording when more
//! than one entry is selected.

use crate::selection::SelectionSet;
use chrono::Timelike;

const SINGULAR_CONNECTOR: &str = "estou interessado no item:";
const PLURAL_CONNECTOR: &str = "estou interessado nos itens:";
const CLOSING: &str = "Teria em estoque?";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
}

impl Greeting {
    /// Greeting for an hour of the day (0-23, local time).
    pub fn for_hour(hour: u32) -> Self {
        if hour < 12 {
            Greeting::Morning
        } else if hour < 18 {
            Greeting::Afternoon
        } else {
            Greeting::Evening
        }
    }

    pub fn at<T: Timelike>(now: &T) -> Self {
        Self::for_hour(now.hour())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Greeting::Morning => "Bom dia",
            Greeting::Afternoon => "Boa tarde",
            Greeting::Evening => "Boa noite",
        }
    }
}

/// Compose the inquiry for `selection` as of `now`.
///
/// An empty selection still yields the template, with nothing listed.
pub fn compose_inquiry<T: Timelike>(selection: &SelectionSet, now: &T) -> String {
    let connector = if selection.len() > 1 {
        PLURAL_CONNECTOR
    } else {
        SINGULAR_CONNECTOR
    };
    format!(
        "{}, {} {}. {}",
        Greeting::at(now).as_str(),
        connector,
        selection.names().join(", "),
        CLOSING
    )
}

/// Call-to-action label for a selection of `count` entries.
pub fn request_label(count: usize) -> String {
    if count > 1 {
        "Solicitar itens selecionados".to_string()
    } else {
        "Solicitar item selecionado".to_string()
    }
}
