//! SA configuration and the geometric cooling schedule.

use crate::error::{Error, Result};

/// Configuration for the Simulated Annealing algorithm.
///
/// Cooling is geometric: after each cooling step the temperature is
/// multiplied by `cooling_rate`. The run is a fixed budget of
/// `cooling_steps * iterations_per_temperature` move attempts.
///
/// # Examples
///
/// ```
/// use tsp_anneal::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(100.0)
///     .with_cooling_rate(0.98)
///     .with_iterations_per_temperature(200)
///     .with_cooling_steps(500);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.total_moves(), 100_000);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Multiplicative decay per cooling step, in `(0, 1]`.
    ///
    /// Typical values: 0.95–0.999. A rate of exactly 1 keeps the
    /// temperature constant.
    pub cooling_rate: f64,

    /// Number of move attempts at each temperature level.
    pub iterations_per_temperature: usize,

    /// Number of cooling steps.
    pub cooling_steps: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 10_000.0,
            cooling_rate: 0.995,
            iterations_per_temperature: 100,
            cooling_steps: 5000,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_iterations_per_temperature(mut self, n: usize) -> Self {
        self.iterations_per_temperature = n;
        self
    }

    pub fn with_cooling_steps(mut self, n: usize) -> Self {
        self.cooling_steps = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total number of move attempts the run will make.
    pub fn total_moves(&self) -> u64 {
        self.iterations_per_temperature as u64 * self.cooling_steps as u64
    }

    /// Temperature after `steps` cooling steps.
    pub fn temperature_after(&self, steps: usize) -> f64 {
        let exp = i32::try_from(steps).unwrap_or(i32::MAX);
        self.initial_temperature * self.cooling_rate.powi(exp)
    }

    /// Validates the configuration.
    ///
    /// Zero iterations or zero cooling steps are valid and give an empty run.
    pub fn validate(&self) -> Result<()> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(Error::invalid_config(format!(
                "initial_temperature must be positive and finite, got {}",
                self.initial_temperature
            )));
        }
        if !self.cooling_rate.is_finite() || self.cooling_rate <= 0.0 || self.cooling_rate > 1.0 {
            return Err(Error::invalid_config(format!(
                "cooling_rate must be in (0, 1], got {}",
                self.cooling_rate
            )));
        }
        Ok(())
    }
}
