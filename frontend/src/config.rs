use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose motion logs when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info  // Production level
}

/// Timing and geometry constants shared by the scroll effects, the
/// carousel and the placeholder forms.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionConfig {
    pub counter_duration_ms: f64,
    pub reveal_stagger_ms: u32,
    pub carousel_step: f64,
    pub carousel_wrap_epsilon: f64,
    pub carousel_interval_ms: u32,
    pub manual_window_ms: u32,
    pub form_latency_ms: u32,
    pub form_reset_ms: u32,
    pub modal_delay_ms: u32,
    pub header_scrolled_threshold: f64,
    pub header_offset: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            counter_duration_ms: 2000.0,
            reveal_stagger_ms: 50,
            carousel_step: 350.0,
            carousel_wrap_epsilon: 10.0,
            carousel_interval_ms: 3000,
            manual_window_ms: 4000,
            form_latency_ms: 1000,
            form_reset_ms: 3000,
            modal_delay_ms: 2000,
            header_scrolled_threshold: 50.0,
            header_offset: 80.0,
        }
    }
}

pub fn motion() -> MotionConfig {
    MotionConfig::default()
}
