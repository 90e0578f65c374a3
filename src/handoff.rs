//! Deep link for handing an inquiry off to WhatsApp.
//!
//! The composer produces plain text; this module is the caller side that
//! encodes it into the `api.whatsapp.com/send/` link. Opening the link is left
//! to whatever launches URLs on the host.

use anyhow::{Context, Result, bail};
use url::Url;

const SEND_ENDPOINT: &str = "https://api.whatsapp.com/send/";

/// Build the send link for `phone` carrying `message`.
///
/// Query values are form-encoded, so the leading `+` of an international
/// number travels as `%2B`.
pub fn whatsapp_link(phone: &str, message: &str) -> Result<Url> {
    let phone = phone.trim();
    if phone.is_empty() {
        bail!("destination phone must not be empty");
    }
    Url::parse_with_params(
        SEND_ENDPOINT,
        &[
            ("phone", phone),
            ("text", message),
            ("type", "phone_number"),
            ("app_absent", "0"),
        ],
    )
    .with_context(|| format!("building send link for {phone}"))
}
