#[cfg(debug_assertions)]
pub fn get_base_path() -> &'static str {
    "/"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_base_path() -> &'static str {
    // GitHub Pages project site unless overridden at build time
    match option_env!("TRAIGENT_BASE_PATH") {
        Some(path) => path,
        None => "/traigent-web/",
    }
}

pub fn asset_url(path: &str) -> String {
    join_base(get_base_path(), path)
}

/// Basename handed to the router, `None` when served from the root.
pub fn router_basename() -> Option<String> {
    basename_for(get_base_path())
}

fn join_base(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn basename_for(base: &str) -> Option<String> {
    let trimmed = base.trim_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(format!("/{}", trimmed))
    }
}

// Outbound destinations. Render these through `ExternalLink` only.
pub const DEMO_BOOKING_URL: &str = "https://cal.com/nimrod-busany";
pub const SDK_REPO_URL: &str = "https://github.com/Traigent/traigent-sdk";
pub const TVL_SITE_URL: &str = "https://tvl-lang.org";
pub const TVL_GETTING_STARTED_URL: &str = "https://www.tvl-lang.org/getting-started/";
pub const TVL_LANGUAGE_REFERENCE_URL: &str = "https://www.tvl-lang.org/reference/language/";
pub const CEO_LINKEDIN_URL: &str = "https://linkedin.com/in/achisolomon";
pub const CTO_LINKEDIN_URL: &str = "https://linkedin.com/in/nimrodbusany";

pub const CEO_EMAIL: &str = "achi@traigent.ai";
pub const CTO_EMAIL: &str = "nimrod@traigent.ai";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_paths_join_without_double_slashes() {
        assert_eq!(join_base("/", "images/robot-happy.png"), "/images/robot-happy.png");
        assert_eq!(
            join_base("/traigent-web/", "/images/robot-happy.png"),
            "/traigent-web/images/robot-happy.png"
        );
        assert_eq!(join_base("/traigent-web", "videos/demo.mp4"), "/traigent-web/videos/demo.mp4");
    }

    #[test]
    fn root_base_has_no_router_basename() {
        assert_eq!(basename_for("/"), None);
        assert_eq!(basename_for(""), None);
        assert_eq!(basename_for("/traigent-web/"), Some("/traigent-web".to_string()));
        assert_eq!(basename_for("docs/site"), Some("/docs/site".to_string()));
    }

    #[test]
    fn debug_builds_serve_from_root() {
        assert_eq!(get_base_path(), "/");
        assert_eq!(asset_url("images/traigent-logo-white.png"), "/images/traigent-logo-white.png");
        assert!(router_basename().is_none());
    }

    #[test]
    fn outbound_links_are_absolute() {
        for url in [
            DEMO_BOOKING_URL,
            SDK_REPO_URL,
            TVL_SITE_URL,
            TVL_GETTING_STARTED_URL,
            TVL_LANGUAGE_REFERENCE_URL,
            CEO_LINKEDIN_URL,
            CTO_LINKEDIN_URL,
        ] {
            assert!(url.starts_with("https://"), "{url}");
        }
    }
}
