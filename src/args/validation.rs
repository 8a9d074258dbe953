use reqwest::Url;

/// # Errors
///
/// Will return `Err` if the value is not an absolute http(s) url without query or fragment
pub fn check_api_base_url(value: &str) -> Result<String, String> {
    let url = Url::parse(value).map_err(|e| format!("The api base url '{value}' is invalid: {e}"))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(format!(
            "The api base url '{value}' must use http or https."
        ));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(format!(
            "The api base url '{value}' must not carry a query or fragment."
        ));
    }
    Ok(value.to_string())
}

/// # Errors
///
/// Will return `Err` if the value is not a whole number of seconds above zero
pub fn check_positive_secs(value: &str) -> Result<u64, String> {
    match value.trim().parse::<u64>() {
        Ok(0) => Err("The timeout must be at least 1 second.".to_string()),
        Ok(secs) => Ok(secs),
        Err(e) => Err(format!("The timeout '{value}' is not a number of seconds: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_default_base_url() {
        let url = "https://sujeitoprogramador.com/next-api/";
        assert_eq!(check_api_base_url(url), Ok(url.to_string()));
    }

    #[test]
    fn rejects_odd_base_urls() {
        assert!(check_api_base_url("not a url").is_err());
        assert!(check_api_base_url("ftp://example.com/api/").is_err());
        assert!(check_api_base_url("https://example.com/api/?api=games").is_err());
    }

    #[test]
    fn timeout_must_be_positive() {
        assert_eq!(check_positive_secs("15"), Ok(15));
        assert!(check_positive_secs("0").is_err());
        assert!(check_positive_secs("-3").is_err());
        assert!(check_positive_secs("soon").is_err());
    }
}
