// Particle field that fills the viewport. Owns its particles and rng, is
// rebuilt wholesale on resize or palette change.

use crate::config::FieldConfig;
use crate::palette::Palette;
use crate::particle::Particle;
use crate::surface::Surface;
use rand::rngs::ThreadRng;
use rand::Rng;

pub struct ParticleField<R = ThreadRng> {
    width: f64,
    height: f64,
    config: FieldConfig,
    palette: Palette,
    particles: Vec<Particle>,
    rng: R,
}

impl ParticleField<ThreadRng> {
    pub fn new(width: f64, height: f64) -> Self {
        ParticleField::with_rng(width, height, FieldConfig::default(), rand::thread_rng())
    }
}

impl<R: Rng> ParticleField<R> {
    /// # Panics
    ///
    /// Panics if `config` fails [`FieldConfig::validate`].
    pub fn with_rng(width: f64, height: f64, config: FieldConfig, rng: R) -> Self {
        if let Err(reason) = config.validate() {
            panic!("invalid particle field config: {}", reason);
        }
        let mut field = ParticleField {
            width,
            height,
            config,
            palette: Palette::BRAND,
            particles: Vec::new(),
            rng,
        };
        field.initialize(width, height);
        field
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[cfg(test)]
    pub(crate) fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Replaces every particle with a fresh random one inside
    /// `[0, width) x [0, height)`. Dimensions must be positive.
    pub fn initialize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;

        let count = self.config.particle_count;
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            particles.push(Particle::random(
                &mut self.rng,
                width,
                height,
                &self.config,
                &self.palette,
            ));
        }
        self.particles = particles;
    }

    pub fn advance_frame(&mut self) {
        let (width, height) = (self.width, self.height);
        let chance = self.config.perturb_chance;
        let strength = self.config.perturb_strength;

        for particle in &mut self.particles {
            particle.step(width, height);
            if self.rng.gen_bool(chance) {
                let dx = (self.rng.gen::<f64>() - 0.5) * strength;
                let dy = (self.rng.gen::<f64>() - 0.5) * strength;
                particle.nudge([dx, dy]);
            }
        }
    }

    pub fn render<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        for particle in &self.particles {
            surface.set_fill_color(&particle.color)?;
            surface.fill_circle(particle.pos[0], particle.pos[1], particle.radius)?;
        }
        Ok(())
    }

    /// One pass of the animation loop: clear, move, draw.
    pub fn frame<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        surface.clear()?;
        self.advance_frame();
        self.render(surface)
    }

    pub fn on_resize(&mut self, width: f64, height: f64) {
        self.initialize(width, height);
    }

    pub fn on_palette_change(&mut self) {
        self.palette = Palette::BRAND;
        self.initialize(self.width, self.height);
    }
}
