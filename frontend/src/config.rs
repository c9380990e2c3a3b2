#[cfg(debug_assertions)]
pub fn form_endpoint() -> &'static str {
    "/api/quote"  // served by roofcare-server
}

#[cfg(not(debug_assertions))]
pub fn form_endpoint() -> &'static str {
    "https://formspree.io/f/hampshireroofcare"
}

pub const SITE_NAME: &str = "Hampshire Roof Care";
pub const BASE_URL: &str = "https://hampshireroofcare.co.uk";

pub const PHONE_DISPLAY: &str = "07538 284300";
pub const PHONE_TEL: &str = "07538284300";
pub const EMAIL: &str = "info.hampshireroofcare@gmail.com";

pub fn tel_href() -> String {
    format!("tel:{}", PHONE_TEL)
}

pub fn mailto_href(subject: &str) -> String {
    format!("mailto:{}?subject={}", EMAIL, urlencoding::encode(subject))
}

/// UK numbers in international form: leading 0 swapped for +44.
pub fn phone_international() -> String {
    match PHONE_TEL.strip_prefix('0') {
        Some(rest) => format!("+44{}", rest),
        None => PHONE_TEL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_subject_is_encoded() {
        assert_eq!(
            mailto_href("Roof enquiry"),
            "mailto:info.hampshireroofcare@gmail.com?subject=Roof%20enquiry"
        );
    }

    #[test]
    fn international_phone_drops_leading_zero() {
        assert_eq!(phone_international(), "+447538284300");
    }
}
