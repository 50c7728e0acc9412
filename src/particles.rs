//! Decorative "floating code" particle field behind the hero section.
//!
//! The simulation knows nothing about the browser: randomness comes from any
//! [`rand::Rng`] and drawing goes through the [`Surface`] trait, which the
//! canvas component implements for a 2d rendering context.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::theme::ColorMode;

pub const MAX_PARTICLES: usize = 100;
/// Viewport area (px²) per particle.
pub const AREA_PER_PARTICLE: f64 = 15_000.0;
pub const POINTER_RADIUS: f64 = 200.0;
pub const LINK_DISTANCE: f64 = 150.0;
pub const MAX_LINK_ALPHA: f64 = 0.15;

const MAX_SPEED: f64 = 0.25;
const MIN_SIZE: f64 = 10.0;
const SIZE_RANGE: f64 = 14.0;
const MAX_RESTING_ALPHA: f64 = 0.5;
const POINTER_ATTACK: f64 = 0.02;
const TARGET_EASING: f64 = 0.05;
const TWINKLE_CHANCE: f64 = 0.01;

const SYMBOLS: &[&str] = &["{ }", "< >", "/>", ";", "//", "&&", "||", "=>", "[]"];
const HEX_CHARS: &[&str] = &["0", "1", "A", "B", "C", "D", "E", "F"];

const DARK_PALETTE: &[&str] = &["#3B82F6", "#8B5CF6", "#06B6D4", "#64748B"];
const LIGHT_PALETTE: &[&str] = &["#2563EB", "#7C3AED", "#0891B2", "#475569"];

pub fn palette(mode: ColorMode) -> &'static [&'static str] {
    match mode {
        ColorMode::Dark => DARK_PALETTE,
        ColorMode::Light => LIGHT_PALETTE,
    }
}

/// Number of particles for a viewport, `min(100, floor(w*h / 15000))`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn particle_count(width: f64, height: f64) -> usize {
    let area = width * height;
    if !area.is_finite() || area <= 0.0 || width <= 0.0 {
        return 0;
    }
    let count = (area / AREA_PER_PARTICLE).floor();
    if count >= MAX_PARTICLES as f64 {
        MAX_PARTICLES
    } else {
        count as usize
    }
}

/// Alpha of the line joining two particles `distance` apart, if they are
/// close enough to be linked.
pub fn link_alpha(distance: f64) -> Option<f64> {
    if distance >= 0.0 && distance < LINK_DISTANCE {
        Some((1.0 - distance / LINK_DISTANCE) * MAX_LINK_ALPHA)
    } else {
        None
    }
}

fn wrap(value: f64, extent: f64) -> f64 {
    if extent <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub glyph: &'static str,
    pub size: f64,
    pub alpha: f64,
    pub target_alpha: f64,
    pub color: &'static str,
}

impl Particle {
    fn spawn<R: Rng>(rng: &mut R, width: f64, height: f64, mode: ColorMode) -> Self {
        let glyphs = if rng.gen_bool(0.5) { SYMBOLS } else { HEX_CHARS };
        Self {
            x: if width > 0.0 { rng.gen_range(0.0..width) } else { 0.0 },
            y: if height > 0.0 { rng.gen_range(0.0..height) } else { 0.0 },
            vx: rng.gen_range(-MAX_SPEED..MAX_SPEED),
            vy: rng.gen_range(-MAX_SPEED..MAX_SPEED),
            glyph: pick(rng, glyphs),
            size: MIN_SIZE + rng.gen_range(0.0..SIZE_RANGE),
            alpha: rng.gen_range(0.0..MAX_RESTING_ALPHA),
            target_alpha: rng.gen_range(0.0..MAX_RESTING_ALPHA),
            color: pick(rng, palette(mode)),
        }
    }

    fn step<R: Rng>(
        &mut self,
        rng: &mut R,
        width: f64,
        height: f64,
        pointer: Option<(f64, f64)>,
    ) {
        self.x = wrap(self.x + self.vx, width);
        self.y = wrap(self.y + self.vy, height);

        let near_pointer = pointer
            .is_some_and(|(px, py)| (px - self.x).hypot(py - self.y) < POINTER_RADIUS);
        if near_pointer {
            self.alpha += POINTER_ATTACK;
        } else {
            self.alpha += (self.target_alpha - self.alpha) * TARGET_EASING;
        }
        self.alpha = self.alpha.clamp(0.0, 1.0);

        if rng.gen_bool(TWINKLE_CHANCE) {
            self.target_alpha = rng.gen_range(0.0..MAX_RESTING_ALPHA);
        }
    }

    pub fn distance_to(&self, other: &Particle) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

fn pick<R: Rng>(rng: &mut R, items: &'static [&'static str]) -> &'static str {
    items.choose(rng).copied().unwrap_or_default()
}

/// A line between two nearby particles, drawn in the first one's color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub distance: f64,
    pub alpha: f64,
    pub color: &'static str,
}

/// Drawing operations the field needs from a rendering backend.
pub trait Surface {
    fn clear(&self, width: f64, height: f64);
    fn draw_glyph(&self, particle: &Particle);
    fn draw_link(&self, link: &Link);
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    width: f64,
    height: f64,
    mode: ColorMode,
    pointer: Option<(f64, f64)>,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new<R: Rng>(rng: &mut R, width: f64, height: f64, mode: ColorMode) -> Self {
        let particles = (0..particle_count(width, height))
            .map(|_| Particle::spawn(rng, width, height, mode))
            .collect();
        Self {
            width,
            height,
            mode,
            pointer: None,
            particles,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Update the viewport. Existing particles are kept as they are; any that
    /// now sit outside the bounds wrap back in on the next tick.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = Some((x, y));
    }

    /// Switch palettes, recoloring particles in place.
    pub fn set_mode<R: Rng>(&mut self, rng: &mut R, mode: ColorMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        for particle in &mut self.particles {
            particle.color = pick(rng, palette(mode));
        }
    }

    pub fn tick<R: Rng>(&mut self, rng: &mut R) {
        let (width, height, pointer) = (self.width, self.height, self.pointer);
        for particle in &mut self.particles {
            particle.step(rng, width, height, pointer);
        }
    }

    /// Every pair closer than [`LINK_DISTANCE`], each pair listed once.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        self.particles.iter().enumerate().flat_map(move |(i, a)| {
            self.particles[i + 1..].iter().filter_map(move |b| {
                let distance = a.distance_to(b);
                link_alpha(distance).map(|alpha| Link {
                    from: (a.x, a.y),
                    to: (b.x, b.y),
                    distance,
                    alpha,
                    color: a.color,
                })
            })
        })
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &S) {
        surface.clear(self.width, self.height);
        for particle in &self.particles {
            surface.draw_glyph(particle);
        }
        for link in self.links() {
            surface.draw_link(&link);
        }
    }
}
