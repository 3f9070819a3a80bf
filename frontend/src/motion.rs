//! Entrance animations as plain data. A [`Motion`] says where an element
//! starts (its initial [`Pose`]) and how it travels to rest; rendering it is
//! just choosing which pose to emit as inline CSS. The browser does the
//! tweening through CSS transitions.

use crate::config::STAGGER_STEP_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn css(&self) -> &'static str {
        match self {
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            delay_ms: 0,
            easing: Easing::EaseOut,
        }
    }

    /// Pushes the start back by one stagger step per `index`.
    pub fn staggered(mut self, index: usize) -> Self {
        self.delay_ms += stagger_delay(index);
        self
    }

    pub fn css(&self) -> String {
        let timing = format!(
            "{}ms {} {}ms",
            self.duration_ms,
            self.easing.css(),
            self.delay_ms
        );
        format!("opacity {timing}, transform {timing}")
    }
}

pub fn stagger_delay(index: usize) -> u32 {
    STAGGER_STEP_MS.saturating_mul(index as u32)
}

/// Opacity plus a 2D offset and uniform scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    pub fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translate3d({}px, {}px, 0) scale({});",
            self.opacity, self.x, self.y, self.scale
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub initial: Pose,
    pub transition: Transition,
}

impl Motion {
    /// Faded out and pushed `distance` px down.
    pub const fn fade_up(distance: f64) -> Self {
        Self::from_pose(Pose {
            opacity: 0.0,
            x: 0.0,
            y: distance,
            scale: 1.0,
        })
    }

    /// Faded out and shifted horizontally; negative `x` starts left of rest.
    pub const fn slide_x(x: f64) -> Self {
        Self::from_pose(Pose {
            opacity: 0.0,
            x,
            y: 0.0,
            scale: 1.0,
        })
    }

    pub const fn pop(scale: f64) -> Self {
        Self::from_pose(Pose {
            opacity: 0.0,
            x: 0.0,
            y: 0.0,
            scale,
        })
    }

    pub const fn fade() -> Self {
        Self::pop(1.0)
    }

    /// Off-screen above, fully opaque. Used for the navigation bar.
    pub fn drop_in(distance: f64) -> Self {
        Self::from_pose(Pose {
            opacity: 1.0,
            x: 0.0,
            y: -distance,
            scale: 1.0,
        })
    }

    const fn from_pose(initial: Pose) -> Self {
        Self {
            initial,
            transition: Transition::new(600),
        }
    }

    pub const fn duration(mut self, duration_ms: u32) -> Self {
        self.transition.duration_ms = duration_ms;
        self
    }

    pub const fn delay(mut self, delay_ms: u32) -> Self {
        self.transition.delay_ms = delay_ms;
        self
    }

    pub const fn easing(mut self, easing: Easing) -> Self {
        self.transition.easing = easing;
        self
    }

    pub fn staggered(mut self, index: usize) -> Self {
        self.transition = self.transition.staggered(index);
        self
    }

    pub fn pose(&self, revealed: bool) -> Pose {
        if revealed {
            Pose::REST
        } else {
            self.initial
        }
    }

    /// Inline style for the element. The transition is only attached once
    /// revealed, so the initial pose is applied instantly on first paint.
    pub fn style(&self, revealed: bool) -> String {
        let pose = self.pose(revealed).css();
        if revealed {
            format!("{} transition: {};", pose, self.transition.css())
        } else {
            pose
        }
    }
}

/// Clamped linear mapping from scroll offset to a decorative offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    pub input: (f64, f64),
    pub output: (f64, f64),
}

impl Parallax {
    pub const fn new(input: (f64, f64), output: (f64, f64)) -> Self {
        Self { input, output }
    }

    pub fn offset(&self, scroll: f64) -> f64 {
        let (in_start, in_end) = self.input;
        let (out_start, out_end) = self.output;
        if in_end == in_start {
            return out_start;
        }
        let progress = ((scroll - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
        out_start + (out_end - out_start) * progress
    }

    pub fn style(&self, scroll: f64) -> String {
        format!("transform: translate3d(0, {}px, 0);", self.offset(scroll))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_grows_linearly_with_index() {
        assert_eq!(stagger_delay(0), 0);
        assert_eq!(stagger_delay(1), STAGGER_STEP_MS);
        assert_eq!(stagger_delay(3), 3 * STAGGER_STEP_MS);

        let card = Motion::fade_up(40.0).staggered(2);
        assert_eq!(card.transition.delay_ms, 200);
        let late = Motion::fade_up(40.0).delay(300).staggered(1);
        assert_eq!(late.transition.delay_ms, 400);
    }

    #[test]
    fn hidden_style_has_no_transition() {
        let motion = Motion::fade_up(40.0);
        let style = motion.style(false);
        assert!(style.contains("opacity: 0;"));
        assert!(style.contains("translate3d(0px, 40px, 0)"));
        assert!(!style.contains("transition"));
    }

    #[test]
    fn revealed_style_rests_and_animates() {
        let motion = Motion::slide_x(-40.0).delay(100);
        let style = motion.style(true);
        assert!(style.contains("opacity: 1;"));
        assert!(style.contains("translate3d(0px, 0px, 0) scale(1)"));
        assert!(style.contains("transition: opacity 600ms ease-out 100ms, transform 600ms ease-out 100ms;"));
    }

    #[test]
    fn drop_in_stays_opaque() {
        let nav = Motion::drop_in(100.0);
        assert_eq!(nav.initial.opacity, 1.0);
        assert_eq!(nav.initial.y, -100.0);
    }

    #[test]
    fn parallax_maps_and_clamps() {
        let down = Parallax::new((0.0, 500.0), (0.0, 200.0));
        let up = Parallax::new((0.0, 500.0), (0.0, -100.0));

        assert_eq!(down.offset(0.0), 0.0);
        assert_eq!(down.offset(250.0), 100.0);
        assert_eq!(down.offset(500.0), 200.0);
        assert_eq!(down.offset(2000.0), 200.0);
        assert_eq!(down.offset(-30.0), 0.0);

        assert_eq!(up.offset(250.0), -50.0);
        assert_eq!(up.offset(900.0), -100.0);
    }

    #[test]
    fn degenerate_parallax_input_is_constant() {
        let flat = Parallax::new((100.0, 100.0), (5.0, 50.0));
        assert_eq!(flat.offset(0.0), 5.0);
        assert_eq!(flat.offset(1000.0), 5.0);
    }
}
