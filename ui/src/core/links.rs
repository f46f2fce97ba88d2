//! Outbound contact links, computed where they are rendered.

use url::form_urlencoded::byte_serialize;

/// `wa.me` deep link opening a chat with `number`, prefilled with `message`.
/// Non-digit characters in `number` are dropped.
pub fn whatsapp_link(number: &str, message: &str) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    let text: String = byte_serialize(message.as_bytes()).collect();
    format!("https://wa.me/{digits}?text={text}")
}

/// `tel:` link in international format.
pub fn tel_link(number: &str) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    format!("tel:+{digits}")
}

/// `mailto:` link for a plain address.
pub fn mailto_link(address: &str) -> String {
    format!("mailto:{}", address.trim())
}
