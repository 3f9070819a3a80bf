/// Base URL of the API the contact form posts to. Local builds talk to a
/// backend on port 3001, release builds to the origin serving the page.
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""
}

/// Vertical scroll offset past which the navigation bar switches to its solid style.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Duration of the mobile menu open/close animation.
pub const MENU_ANIMATION_MS: u32 = 300;

/// Delay added per item index when a list reveals.
pub const STAGGER_STEP_MS: u32 = 100;

/// Time between mount and the start of mount-triggered entrance animations.
/// One frame is enough for the browser to paint the initial pose.
pub const ENTRANCE_FRAME_MS: u32 = 16;

pub const CONTACT_ENDPOINT: &str = "/api/contact";

/// Local builds have no backend to post to, messages only get logged.
pub const CONTACT_SUBMIT_ENABLED: bool = !cfg!(debug_assertions);

pub fn contact_url() -> String {
    format!("{}{}", get_backend_url(), CONTACT_ENDPOINT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_url_joins_backend_and_endpoint() {
        let url = contact_url();
        assert!(url.starts_with(get_backend_url()));
        assert!(url.ends_with("/api/contact"));
    }
}
