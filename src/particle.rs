// Simple particle struct to keep track of individual position, velocity, size and color

use crate::color::Color;
use crate::config::FieldConfig;
use crate::palette::Palette;
use rand::Rng;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub radius: f64,
    pub color: Color,
    pub speed_limit: f64,
}

impl Particle {
    /// Velocity is capped to `speed_limit` on the way in.
    pub fn new(
        pos_x: f64,
        pos_y: f64,
        vel_x: f64,
        vel_y: f64,
        radius: f64,
        color: Color,
        speed_limit: f64,
    ) -> Particle {
        let mut particle = Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
            color,
            speed_limit,
        };
        particle.cap_speed();
        particle
    }

    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        width: f64,
        height: f64,
        config: &FieldConfig,
        palette: &Palette,
    ) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let radius = rng.gen_range(config.radius.0, config.radius.1);
        let color = palette.choose(rng);
        let vel_x = (rng.gen::<f64>() - 0.5) * config.initial_velocity_spread;
        let vel_y = (rng.gen::<f64>() - 0.5) * config.initial_velocity_spread;
        let speed_limit = rng.gen_range(config.speed_limit.0, config.speed_limit.1);
        Particle::new(pos_x, pos_y, vel_x, vel_y, radius, color, speed_limit)
    }

    pub fn speed(&self) -> f64 {
        vecmath::vec2_len(self.vel)
    }

    // Moves by one frame of velocity, teleporting to the opposite edge on exit
    pub fn step(&mut self, width: f64, height: f64) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);
        self.pos[0] = wrap(self.pos[0], width);
        self.pos[1] = wrap(self.pos[1], height);
    }

    pub fn nudge(&mut self, delta: Vector2<f64>) {
        self.vel = vecmath::vec2_add(self.vel, delta);
        self.cap_speed();
    }

    fn cap_speed(&mut self) {
        let speed = self.speed();
        if speed > self.speed_limit {
            self.vel = vecmath::vec2_scale(self.vel, self.speed_limit / speed);
        }
    }
}

/// Toroidal wrap of one coordinate into `[0, extent)`.
///
/// Leaving past the far edge resets to 0; leaving past 0 resets to the
/// largest value still below `extent`.
pub fn wrap(value: f64, extent: f64) -> f64 {
    if value >= extent {
        0.0
    } else if value < 0.0 {
        extent * (1.0 - f64::EPSILON)
    } else {
        value
    }
}
