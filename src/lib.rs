//! # Customer Desk
//!
//! Generates a small synthetic customer dataset, saves it to
//! `customer_data.csv`, loads it back and filters it by rating, all behind a
//! desktop window.
//!
//! ## Quick Start
//!
//! ```no_run
//! use customer_desk::{generator, records, store};
//! use rand::SeedableRng as _;
//!
//! # fn example() -> customer_desk::error::Result<()> {
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let batch = generator::generate_batch(&mut rng, 15);
//!
//! let path = store::default_data_path();
//! store::save(&batch, &path)?;
//!
//! let loaded = store::load(&path)?;
//! let good = records::filter_by_minimum_rating(&loaded, records::DEFAULT_RATING_THRESHOLD);
//! println!("{} of {} customers rated 3.5 or higher", good.len(), loaded.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`records`]: the customer record and the rating filter
//! - [`generator`]: random batches from a caller-supplied RNG
//! - [`store`]: CSV save/load with column lookup by name
//! - [`desk`]: the controller that owns what the window displays
//! - [`gui`]: the eframe window
//! - [`error`]: `NotFound` / `Io` / `Parse`

#![warn(clippy::all, rust_2018_idioms)]

pub mod activity;
pub mod config;
pub mod desk;
pub mod error;
pub mod generator;
pub mod gui;
pub mod logging;
pub mod records;
pub mod store;
pub mod theme;

pub use gui::CustomerApp;
