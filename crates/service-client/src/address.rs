use url::Url;

use crate::client::ApiError;

/// Path of the liveness endpoint, resolved against the service origin.
pub const HEALTH_PATH: &str = "/health";

/// Prefix `http://` onto addresses that do not already start with `http`.
///
/// Addresses carrying `http://` or `https://` are returned untouched.
pub fn normalize_address(address: &str) -> String {
    if address.starts_with("http") {
        address.to_string()
    } else {
        format!("http://{address}")
    }
}

/// Parse a (possibly scheme-less) address into a base URL.
pub fn parse_base(address: &str) -> Result<Url, ApiError> {
    let normalized = normalize_address(address);
    let url = Url::parse(&normalized)?;
    if url.cannot_be_a_base() {
        return Err(ApiError::NotABase(normalized));
    }
    Ok(url)
}

/// Join `version_prefix` and `fragment` into a single reference, making sure
/// the fragment starts with exactly the `/` the caller did not supply.
pub fn versioned_path(version_prefix: &str, fragment: &str) -> String {
    if fragment.starts_with('/') {
        format!("{version_prefix}{fragment}")
    } else {
        format!("{version_prefix}/{fragment}")
    }
}

/// Resolve `reference` against `base`.
///
/// An absolute-path reference replaces the base's path, query and fragment,
/// so only the origin of `base` survives.
pub fn resolve(base: &Url, reference: &str) -> Result<Url, ApiError> {
    Ok(base.join(reference)?)
}
