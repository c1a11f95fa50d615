const DEFAULT_CONTACT_EMAIL: &str = "vardproject@gmail.com";

pub fn get_contact_email() -> String {
    option_env!("VARD_CONTACT_EMAIL")
        .filter(|email| !email.trim().is_empty())
        .unwrap_or(DEFAULT_CONTACT_EMAIL)
        .to_string()
}

/// Timing and gesture constants for the landing page choreography.
///
/// All durations are in milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct LandingConfig {
    pub slide_duration_ms: u32,
    pub overlay_close_ms: u32,
    pub typing_speed_ms: u32,
    pub deleting_speed_ms: u32,
    pub pause_between_cycles_ms: u32,
    pub copy_feedback_ms: u32,
    /// Minimum horizontal travel for a touch to count as a swipe (exclusive).
    pub swipe_threshold: f64,
    pub contact: String,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            slide_duration_ms: 5000,
            overlay_close_ms: 700,
            typing_speed_ms: 100,
            deleting_speed_ms: 50,
            pause_between_cycles_ms: 2000,
            copy_feedback_ms: 2000,
            swipe_threshold: 50.0,
            contact: get_contact_email(),
        }
    }
}
