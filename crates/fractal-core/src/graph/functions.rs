//! Analytic surface functions `(u, v, t) -> position`.

use glam::Vec3;
use rand::Rng;
use std::f32::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphFunction {
    Wave,
    MorphingWave,
    Ripple,
    TwistedSphere,
    Torus,
}

impl GraphFunction {
    pub const ALL: [GraphFunction; 5] = [
        GraphFunction::Wave,
        GraphFunction::MorphingWave,
        GraphFunction::Ripple,
        GraphFunction::TwistedSphere,
        GraphFunction::Torus,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// Sample the surface at grid coordinates `u, v` in `[-1, 1]` and time `t`.
    pub fn evaluate(self, u: f32, v: f32, t: f32) -> Vec3 {
        match self {
            GraphFunction::Wave => wave(u, v, t),
            GraphFunction::MorphingWave => morphing_wave(u, v, t),
            GraphFunction::Ripple => ripple(u, v, t),
            GraphFunction::TwistedSphere => twisted_sphere(u, v, t),
            GraphFunction::Torus => torus(u, v, t),
        }
    }

    /// Next function in declaration order, wrapping after `Torus`.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Uniformly random function other than `self`.
    pub fn random_other<R: Rng + ?Sized>(self, rng: &mut R) -> Self {
        let n = Self::ALL.len();
        Self::ALL[(self.index() + rng.gen_range(1..n)) % n]
    }

    pub fn name(self) -> &'static str {
        match self {
            GraphFunction::Wave => "wave",
            GraphFunction::MorphingWave => "morphing_wave",
            GraphFunction::Ripple => "ripple",
            GraphFunction::TwistedSphere => "twisted_sphere",
            GraphFunction::Torus => "torus",
        }
    }
}

/// Blend two functions, easing `progress` with smoothstep.
pub fn morph(u: f32, v: f32, t: f32, from: GraphFunction, to: GraphFunction, progress: f32) -> Vec3 {
    from.evaluate(u, v, t)
        .lerp(to.evaluate(u, v, t), smoothstep(0.0, 1.0, progress))
}

/// Hermite interpolation between `edge0` and `edge1`, clamped to `[0, 1]`.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

fn wave(u: f32, v: f32, t: f32) -> Vec3 {
    Vec3::new(u, (PI * (u + v + t)).sin(), v)
}

fn morphing_wave(u: f32, v: f32, t: f32) -> Vec3 {
    let mut y = (PI * (u + 0.5 * t)).sin();
    y += 0.5 * (2.0 * PI * (v + t)).sin();
    y += (PI * (u + v + 0.25 * t)).sin();
    Vec3::new(u, y * (1.0 / 2.5), v)
}

fn ripple(u: f32, v: f32, t: f32) -> Vec3 {
    let d = (u * u + v * v).sqrt();
    let y = (PI * (4.0 * d - t)).sin() / (1.0 + 10.0 * d);
    Vec3::new(u, y, v)
}

fn twisted_sphere(u: f32, v: f32, t: f32) -> Vec3 {
    let r = 0.9 + 0.1 * (PI * (6.0 * u + 4.0 * v + t)).sin();
    let s = r * (0.5 * PI * v).cos();
    Vec3::new(
        s * (PI * u).sin(),
        r * (0.5 * PI * v).sin(),
        s * (PI * u).cos(),
    )
}

fn torus(u: f32, v: f32, t: f32) -> Vec3 {
    let r1 = 0.7 + 0.1 * (PI * (6.0 * u + 0.5 * t)).sin();
    let r2 = 0.15 + 0.05 * (PI * (8.0 * u + 4.0 * v + 2.0 * t)).sin();
    let s = r1 + r2 * (PI * v).cos();
    Vec3::new(s * (PI * u).sin(), r2 * (PI * v).sin(), s * (PI * u).cos())
}

// =============================================================================
// Tests
// =============================================================================
