//! Deployment-owned endpoint configuration. The base URL is baked in at build
//! time via the `API_URL` environment variable; when unset, requests go to
//! same-origin relative paths.

pub const API_URL: &str = match option_env!("API_URL") {
    Some(url) => url,
    None => "",
};

pub const PREDICT_PATH: &str = "/api/predict";
pub const FLAG_PATH: &str = "/api/flag";

pub fn predict_url() -> String {
    format!("{API_URL}{PREDICT_PATH}")
}

pub fn flag_url() -> String {
    format!("{API_URL}{FLAG_PATH}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_end_with_their_endpoint_paths() {
        assert!(predict_url().ends_with(PREDICT_PATH));
        assert!(flag_url().ends_with(FLAG_PATH));
    }
}
