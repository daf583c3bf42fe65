//! Celebratory particle burst shown when a submission is accepted.

use egui::{Color32, Pos2, Vec2};
use rand::Rng;

pub const PARTICLE_COUNT: usize = 150;
pub const SPREAD_DEGREES: f32 = 70.0;

const GRAVITY: f32 = 600.0;
const LIFETIME_SECONDS: f32 = 2.5;
const MIN_SPEED: f32 = 250.0;
const MAX_SPEED: f32 = 650.0;

const PALETTE: [Color32; 3] = [
    Color32::from_rgb(0x3b, 0x82, 0xf6),
    Color32::from_rgb(0x22, 0xd3, 0xee),
    Color32::from_rgb(0xd9, 0xf9, 0x9d),
];

struct Particle {
    pos: Pos2,
    velocity: Vec2,
    color: Color32,
    size: f32,
    age: f32,
}

pub struct ConfettiBurst {
    particles: Vec<Particle>,
}

impl ConfettiBurst {
    /// Spawns the burst at `origin`, aimed upward within the spread cone.
    pub fn new<R: Rng + ?Sized>(origin: Pos2, rng: &mut R) -> Self {
        let half_spread = SPREAD_DEGREES.to_radians() / 2.0;
        let particles = (0..PARTICLE_COUNT)
            .map(|_| {
                let angle =
                    -std::f32::consts::FRAC_PI_2 + rng.gen_range(-half_spread..half_spread);
                Particle {
                    pos: origin,
                    velocity: Vec2::angled(angle) * rng.gen_range(MIN_SPEED..MAX_SPEED),
                    color: PALETTE[rng.gen_range(0..PALETTE.len())],
                    size: rng.gen_range(2.5..5.0),
                    age: 0.0,
                }
            })
            .collect();
        Self { particles }
    }

    pub fn is_finished(&self) -> bool {
        self.particles.is_empty()
    }

    fn step(&mut self, dt: f32) {
        self.particles.retain_mut(|particle| {
            particle.age += dt;
            if particle.age >= LIFETIME_SECONDS {
                return false;
            }
            particle.velocity.y += GRAVITY * dt;
            particle.pos += particle.velocity * dt;
            true
        });
    }

    /// Advances and paints one frame; returns false once the burst is
    /// spent so the caller can drop it.
    pub fn animate(&mut self, ctx: &egui::Context) -> bool {
        let dt = ctx.input(|input| input.stable_dt).min(0.05);
        self.step(dt);
        if self.particles.is_empty() {
            return false;
        }

        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("confetti_burst"),
        ));
        for particle in &self.particles {
            let fade = 1.0 - particle.age / LIFETIME_SECONDS;
            painter.circle_filled(particle.pos, particle.size, particle.color.gamma_multiply(fade));
        }
        ctx.request_repaint();
        true
    }
}
