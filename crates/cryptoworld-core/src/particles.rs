//! Drifting background particles for the hero banner.
//!
//! Each particle glides between two random points inside the viewport and
//! back again. The layout is regenerated whenever the viewport changes size.

use rand::Rng;

/// Number of particles in the hero background
pub const PARTICLE_COUNT: usize = 20;

const MIN_DURATION_SECS: f64 = 10.0;
const MAX_DURATION_SECS: f64 = 30.0;

/// Size of the area particles may occupy, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Degenerate or non-finite sizes fall back to a 1x1 area
    fn usable(&self) -> (f64, f64) {
        let clamp = |v: f64| if v.is_finite() && v >= 1.0 { v } else { 1.0 };
        (clamp(self.width), clamp(self.height))
    }

    pub fn contains(&self, (x, y): (f64, f64)) -> bool {
        let (w, h) = self.usable();
        (0.0..=w).contains(&x) && (0.0..=h).contains(&y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub duration_secs: f64,
}

impl Particle {
    /// Inline CSS custom properties consumed by the `drift` keyframes
    pub fn style(&self) -> String {
        format!(
            "--from-x: {:.0}px; --from-y: {:.0}px; --to-x: {:.0}px; --to-y: {:.0}px; animation-duration: {:.1}s;",
            self.from.0, self.from.1, self.to.0, self.to.1, self.duration_secs
        )
    }
}

/// Lay out `count` particles inside `viewport`
pub fn scatter<R: Rng + ?Sized>(viewport: Viewport, count: usize, rng: &mut R) -> Vec<Particle> {
    let (w, h) = viewport.usable();
    (0..count)
        .map(|_| Particle {
            from: (rng.random_range(0.0..w), rng.random_range(0.0..h)),
            to: (rng.random_range(0.0..w), rng.random_range(0.0..h)),
            duration_secs: rng.random_range(MIN_DURATION_SECS..MAX_DURATION_SECS),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_scatter_count() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(scatter(Viewport::default(), PARTICLE_COUNT, &mut rng).len(), 20);
        assert!(scatter(Viewport::default(), 0, &mut rng).is_empty());
    }

    #[test]
    fn test_scatter_stays_inside() {
        let mut rng = StdRng::seed_from_u64(42);
        let viewport = Viewport::new(320.0, 640.0);
        for p in scatter(viewport, 200, &mut rng) {
            assert!(viewport.contains(p.from));
            assert!(viewport.contains(p.to));
            assert!((10.0..30.0).contains(&p.duration_secs));
        }
    }

    #[test]
    fn test_zero_sized_viewport_does_not_panic() {
        let mut rng = StdRng::seed_from_u64(1);
        let particles = scatter(Viewport::new(0.0, f64::NAN), 3, &mut rng);
        assert_eq!(particles.len(), 3);
        for p in particles {
            assert!(p.from.0 < 1.0 && p.from.1 < 1.0);
        }
    }

    #[test]
    fn test_style_has_all_properties() {
        let p = Particle {
            from: (1.0, 2.0),
            to: (3.0, 4.0),
            duration_secs: 12.5,
        };
        let style = p.style();
        assert!(style.contains("--from-x: 1px"));
        assert!(style.contains("--to-y: 4px"));
        assert!(style.contains("animation-duration: 12.5s"));
    }
}
