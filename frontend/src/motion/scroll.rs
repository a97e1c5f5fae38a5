//! Scroll-position driven styling: header state, hero parallax, scroll spy.

/// Maps `value` from `input` onto `output`, clamped to the output range.
pub fn interpolate(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_start, in_end) = input;
    let (out_start, out_end) = output;
    if in_end == in_start {
        return if value < in_start { out_start } else { out_end };
    }
    let t = ((value - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
    out_start + (out_end - out_start) * t
}

pub fn header_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroFrame {
    pub opacity: f64,
    pub translate_y: f64,
}

impl HeroFrame {
    pub fn style(&self) -> String {
        format!("opacity: {}; transform: translateY({}px);", self.opacity, self.translate_y)
    }
}

/// Fades and drifts the hero content while it is still on screen. Past the
/// hero there is nothing to update.
pub fn hero_parallax(scrolled: f64, hero_height: f64) -> Option<HeroFrame> {
    if hero_height <= 0.0 || scrolled >= hero_height {
        return None;
    }
    let scrolled = scrolled.max(0.0);
    Some(HeroFrame {
        opacity: 1.0 - (scrolled / hero_height) * 0.5,
        translate_y: scrolled * 0.3,
    })
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// The section whose band contains the scroll position, if any. Later
/// sections win on overlap.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds], header_height: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|section| {
            let top = section.top - header_height - 100.0;
            scroll_y >= top && scroll_y < top + section.height
        })
        .last()
        .map(|section| section.id.as_str())
}

/// Scroll target for an in-page anchor, leaving room for the sticky header.
pub fn anchor_target(section_top: f64, header_offset: f64) -> f64 {
    (section_top - header_offset).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolate_clamps_both_sides() {
        assert_eq!(interpolate(-50.0, (0.0, 1000.0), (0.0, 200.0)), 0.0);
        assert_eq!(interpolate(500.0, (0.0, 1000.0), (0.0, 200.0)), 100.0);
        assert_eq!(interpolate(5000.0, (0.0, 1000.0), (0.0, 200.0)), 200.0);
        assert_eq!(interpolate(900.0, (800.0, 1000.0), (1.0, 0.0)), 0.5);
    }

    #[test]
    fn degenerate_range_steps() {
        assert_eq!(interpolate(9.0, (10.0, 10.0), (0.0, 1.0)), 0.0);
        assert_eq!(interpolate(10.0, (10.0, 10.0), (0.0, 1.0)), 1.0);
    }

    #[test]
    fn hero_fades_to_half_and_stops() {
        assert_eq!(
            hero_parallax(0.0, 800.0),
            Some(HeroFrame {
                opacity: 1.0,
                translate_y: 0.0
            })
        );
        let frame = hero_parallax(400.0, 800.0).unwrap();
        assert_eq!(frame.opacity, 0.75);
        assert!((frame.translate_y - 120.0).abs() < 1e-9);
        assert_eq!(hero_parallax(800.0, 800.0), None);
    }

    #[test]
    fn header_switches_after_threshold() {
        assert!(!header_scrolled(50.0, 50.0));
        assert!(header_scrolled(51.0, 50.0));
    }

    #[test]
    fn scroll_spy_picks_containing_section() {
        let sections = vec![
            SectionBounds {
                id: "home".into(),
                top: 0.0,
                height: 900.0,
            },
            SectionBounds {
                id: "about".into(),
                top: 900.0,
                height: 700.0,
            },
        ];
        assert_eq!(active_section(0.0, &sections, 80.0), Some("home"));
        assert_eq!(active_section(800.0, &sections, 80.0), Some("about"));
        assert_eq!(active_section(5000.0, &sections, 80.0), None);
    }

    #[test]
    fn anchor_leaves_header_room() {
        assert_eq!(anchor_target(1200.0, 80.0), 1120.0);
        assert_eq!(anchor_target(20.0, 80.0), 0.0);
    }
}
