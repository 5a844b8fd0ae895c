/* Same level of check as an `<input type="email">`: something@domain.tld, no spaces */
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split('.')
                    .all(|label| !label.is_empty())
                && domain.contains('.')
        }
        None => false,
    }
}
