// Tunables for the particle field. Ranges are half-open [low, high).

pub const CANVAS_ID: &str = "particle-canvas";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    pub radius: (f64, f64),
    pub speed_limit: (f64, f64),
    /// Each initial velocity component is `(u - 0.5) * spread`.
    pub initial_velocity_spread: f64,
    /// Per particle, per frame.
    pub perturb_chance: f64,
    /// Each perturbed velocity component gains `(u - 0.5) * strength`.
    pub perturb_strength: f64,
}

impl FieldConfig {
    /// Ranges must be non-empty and finite, `perturb_chance` must lie in
    /// `[0, 1]`.
    pub fn validate(&self) -> Result<(), String> {
        check_range("radius", self.radius)?;
        check_range("speed_limit", self.speed_limit)?;
        if !(0.0..=1.0).contains(&self.perturb_chance) {
            return Err(format!(
                "perturb_chance must be in [0, 1], got {}",
                self.perturb_chance
            ));
        }
        if !self.initial_velocity_spread.is_finite() || !self.perturb_strength.is_finite() {
            return Err(String::from("velocity spread and perturb strength must be finite"));
        }
        Ok(())
    }
}

fn check_range(name: &str, range: (f64, f64)) -> Result<(), String> {
    let (low, high) = range;
    if low.is_finite() && high.is_finite() && low < high {
        Ok(())
    } else {
        Err(format!("{} range [{}, {}) is empty or not finite", name, low, high))
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            particle_count: 200,
            radius: (0.2, 2.0),
            speed_limit: (0.2, 0.8),
            initial_velocity_spread: 0.8,
            perturb_chance: 0.02,
            perturb_strength: 0.1,
        }
    }
}
