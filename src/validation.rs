//! Form Validation
//!
//! Checks run before a form is submitted. Each returns the first
//! problem found as a message ready to show under the form.

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MAX_REVIEW_LEN: usize = 2_000;

pub type Validation = Result<(), String>;

pub fn validate_email(email: &str) -> Validation {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required.".to_string());
    }
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err("Enter a valid email address.".to_string())
    }
}

pub fn validate_password(password: &str) -> Validation {
    if password.is_empty() {
        return Err("Password is required.".to_string());
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!("Password must be at least {} characters.", MIN_PASSWORD_LEN));
    }
    Ok(())
}

pub fn validate_required(field: &str, value: &str) -> Validation {
    if value.trim().is_empty() {
        Err(format!("{} is required.", field))
    } else {
        Ok(())
    }
}

pub fn validate_login(email: &str, password: &str) -> Validation {
    validate_email(email)?;
    if password.is_empty() {
        return Err("Password is required.".to_string());
    }
    Ok(())
}

pub fn validate_registration(name: &str, email: &str, password: &str, confirm: &str) -> Validation {
    validate_required("Name", name)?;
    validate_email(email)?;
    validate_password(password)?;
    if password != confirm {
        return Err("Passwords do not match.".to_string());
    }
    Ok(())
}

pub fn validate_review(rating: u8, comment: &str) -> Validation {
    if !(1..=5).contains(&rating) {
        return Err("Pick a rating from 1 to 5 stars.".to_string());
    }
    validate_required("Comment", comment)?;
    if comment.chars().count() > MAX_REVIEW_LEN {
        return Err(format!("Reviews are limited to {} characters.", MAX_REVIEW_LEN));
    }
    Ok(())
}

/// Admin product form; returns the parsed price
pub fn validate_product(title: &str, author: &str, price: &str) -> Result<f64, String> {
    validate_required("Title", title)?;
    validate_required("Author", author)?;
    match price.trim().parse::<f64>() {
        Ok(p) if p.is_finite() && p >= 0.0 => Ok(p),
        _ => Err("Price must be a non-negative number.".to_string()),
    }
}

pub fn validate_contact(name: &str, email: &str, message: &str) -> Validation {
    validate_required("Name", name)?;
    validate_email(email)?;
    validate_required("Message", message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(validate_email("reader@bookcompass.com").is_ok());
        assert!(validate_email("  reader@bookcompass.com ").is_ok());
        assert_eq!(validate_email("").unwrap_err(), "Email is required.");
        for bad in ["reader", "@x.com", "a@b", "a@.com", "a@b.", "a@@b.com", "a b@c.com"] {
            assert!(validate_email(bad).is_err(), "{} should be rejected", bad);
        }
    }

    #[test]
    fn test_password_length() {
        assert!(validate_password("12345").is_err());
        assert!(validate_password("123456").is_ok());
    }

    #[test]
    fn test_registration_reports_first_problem() {
        assert_eq!(validate_registration("", "bad", "1", "2").unwrap_err(), "Name is required.");
        assert_eq!(
            validate_registration("Ana", "ana@x.io", "secret1", "secret2").unwrap_err(),
            "Passwords do not match."
        );
        assert!(validate_registration("Ana", "ana@x.io", "secret1", "secret1").is_ok());
    }

    #[test]
    fn test_login_does_not_enforce_length() {
        assert!(validate_login("ana@x.io", "abc").is_ok());
        assert!(validate_login("ana@x.io", "").is_err());
    }

    #[test]
    fn test_review() {
        assert!(validate_review(0, "ok").is_err());
        assert!(validate_review(6, "ok").is_err());
        assert!(validate_review(5, "   ").is_err());
        assert!(validate_review(4, "Great narration").is_ok());
    }

    #[test]
    fn test_product_price() {
        assert_eq!(validate_product("Dune", "Herbert", " 9.99 "), Ok(9.99));
        assert!(validate_product("Dune", "Herbert", "-1").is_err());
        assert!(validate_product("Dune", "", "1").is_err());
    }

    #[test]
    fn test_contact() {
        assert!(validate_contact("Ana", "ana@x.io", "Hello").is_ok());
        assert_eq!(validate_contact("Ana", "ana@x.io", "").unwrap_err(), "Message is required.");
    }
}
