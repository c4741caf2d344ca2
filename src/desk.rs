//! The controller behind the window.
//!
//! [`Desk`] owns the list of customers currently on screen and is the only
//! thing that changes it. Each button in the window maps to one method here:
//!
//! ```text
//! Generate Data   -> Desk::on_generate  (generate_batch + store::save)
//! Load Data       -> Desk::on_load      (store::load)
//! Filter by Rating-> Desk::on_filter    (store::load + filter_by_minimum_rating)
//! ```
//!
//! Every method runs to completion and returns a [`Notice`] for the window to
//! show. Failures never escape as errors; they come back as error notices and
//! leave the displayed list exactly as it was.

use crate::config::DeskSettings;
use crate::error::DeskError;
use crate::generator::generate_batch;
use crate::records::{CustomerRecord, filter_by_minimum_rating};
use crate::store;
use rand::SeedableRng as _;
use rand::rngs::StdRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// A message for the user, shown as a dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(err: &DeskError) -> Self {
        Self {
            severity: Severity::Error,
            title: err.title().to_owned(),
            message: err.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// What the displayed list currently holds.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum View {
    #[default]
    Empty,
    All,
    Filtered { threshold: f64 },
}

pub struct Desk {
    settings: DeskSettings,
    rng: StdRng,
    displayed: Vec<CustomerRecord>,
    view: View,
}

impl Default for Desk {
    fn default() -> Self {
        Self::new(DeskSettings::default())
    }
}

impl Desk {
    /// Controller seeded from OS entropy.
    pub fn new(settings: DeskSettings) -> Self {
        Self::with_rng(settings, StdRng::from_entropy())
    }

    /// Controller whose generated batches are reproducible.
    pub fn with_seed(settings: DeskSettings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: DeskSettings, rng: StdRng) -> Self {
        Self {
            settings,
            rng,
            displayed: Vec::new(),
            view: View::Empty,
        }
    }

    pub fn settings(&self) -> &DeskSettings {
        &self.settings
    }

    pub fn displayed(&self) -> &[CustomerRecord] {
        &self.displayed
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Generates a fresh batch and overwrites the data file with it.
    ///
    /// The displayed list is left alone; the user loads the new batch
    /// explicitly.
    pub fn on_generate(&mut self) -> Notice {
        let records = generate_batch(&mut self.rng, self.settings.batch_size);
        match store::save(&records, &self.settings.data_file) {
            Ok(()) => Notice::info(
                "Success",
                format!(
                    "Customer data generated and saved to '{}'.",
                    self.settings.data_file.display()
                ),
            ),
            Err(e) => {
                tracing::error!("Generate failed: {e}");
                Notice::error(&e)
            }
        }
    }

    /// Replaces the displayed list with everything in the data file.
    pub fn on_load(&mut self) -> Notice {
        match store::load(&self.settings.data_file) {
            Ok(records) => {
                let message = format!(
                    "Loaded {} customers from '{}'.",
                    records.len(),
                    self.settings.data_file.display()
                );
                self.displayed = records;
                self.view = View::All;
                Notice::info("Data Loaded", message)
            }
            Err(e) => {
                tracing::warn!("Load failed: {e}");
                Notice::error(&e)
            }
        }
    }

    /// Reloads the data file and shows only customers at or above the rating
    /// threshold.
    pub fn on_filter(&mut self) -> Notice {
        let threshold = self.settings.rating_threshold;
        match store::load(&self.settings.data_file) {
            Ok(records) => {
                let filtered = filter_by_minimum_rating(&records, threshold);
                tracing::info!(
                    kept = filtered.len(),
                    total = records.len(),
                    threshold,
                    "Applied rating filter"
                );
                let message = format!(
                    "Filtered {} customers with rating >= {threshold}.",
                    filtered.len()
                );
                self.displayed = filtered;
                self.view = View::Filtered { threshold };
                Notice::info("Filter Applied", message)
            }
            Err(e) => {
                tracing::warn!("Filter failed: {e}");
                Notice::error(&e)
            }
        }
    }
}
