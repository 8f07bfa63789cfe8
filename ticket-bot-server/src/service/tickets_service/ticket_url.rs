///
/// Public link to the ticket page.
/// `public_url` is expected to end with `/`
///
pub fn ticket_url(public_url: &str, id: &str) -> String {
    format!("{public_url}ticket/{id}")
}
