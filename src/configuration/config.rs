//! Configuration types for loading a simulation from JSON.
//!
//! This module defines a thin, `serde`-deserializable representation of the
//! two data files the simulator consumes:
//!
//! - [`SimulationConfig`] – numerical constants and lattice geometry
//!   (`Configurations.json`)
//! - [`CatalogConfig`]    – the body catalog: stars and planets with their
//!   physical properties and colors (`BodiesData.json`)
//!
//! # JSON format
//! `Configurations.json`:
//!
//! ```json
//! {
//!     "G_const": 6.674e-11,
//!     "min_dist": 0.5,
//!     "distance_cutoff": 60.0,
//!     "deformation_scale": 2.0,
//!     "gridStep": 1.0,
//!     "gridSquares": 30,
//!     "y_grid": -2.0,
//!     "time_step": 0.01,
//!     "E_val_km": 1e6,
//!     "E_val_kg": 1e29,
//!     "eps2": 0.0
//! }
//! ```
//!
//! `BodiesData.json`:
//!
//! ```json
//! {
//!     "stars": [
//!         {
//!             "name": "Sol",
//!             "mass (kg)": 1.989e30,
//!             "diameter (km)": 1392700,
//!             "center": [0.0, 0.0],
//!             "init_velocity": [0.0, 0.0, 0.0],
//!             "color": [1.0, 0.85, 0.1, 1.0]
//!         }
//!     ],
//!     "planets": [
//!         {
//!             "name": "Terra",
//!             "mass (kg)": 5.972e24,
//!             "diameter (km)": 12742,
//!             "init_distance (km)": 5000000,
//!             "init_velocity": [0.0, 0.0, 1.5],
//!             "system": "Sol",
//!             "color": [0.2, 0.4, 1.0, 1.0]
//!         }
//!     ]
//! }
//! ```
//!
//! Raw values stay in physical units here; the scenario builder divides
//! lengths by `E_val_km`, masses by `E_val_kg`, and rescales `G_const`
//! when it maps this layer into runtime structs.

use serde::Deserialize;

/// Global numerical constants and lattice geometry, raw as loaded.
#[derive(Deserialize, Debug, Clone)]
pub struct SimulationConfig {
    #[serde(rename = "G_const")]
    pub g_const: f64, // gravitational constant in SI units, rescaled at build
    pub min_dist: f64, // fabric softening clamp
    pub distance_cutoff: f64, // fabric contribution range
    pub deformation_scale: f64, // fabric displacement multiplier
    #[serde(rename = "gridStep")]
    pub grid_step: f64, // lattice spacing
    #[serde(rename = "gridSquares")]
    pub grid_squares: i32, // lattice half-extent, forced even at build
    pub y_grid: f64, // lattice base height
    pub time_step: f64, // fixed integration step
    #[serde(rename = "E_val_km")]
    pub e_val_km: f64, // length unit-exponent divisor
    #[serde(rename = "E_val_kg")]
    pub e_val_kg: f64, // mass unit-exponent divisor
    #[serde(default)]
    pub eps2: f64, // integrator softening; absent means 0 = unguarded
}

/// Initial state for one star.
/// Stars anchor the catalog: planets may reference one by name.
#[derive(Deserialize, Debug, Clone)]
pub struct StarConfig {
    pub name: String,
    #[serde(rename = "mass (kg)")]
    pub mass_kg: f64,
    #[serde(rename = "diameter (km)")]
    pub diameter_km: f64,
    pub center: [f64; 2], // x/z placement in km
    pub init_velocity: [f64; 3], // km/s
    pub color: [f32; 4], // RGBA
}

/// Initial state for one planet.
#[derive(Deserialize, Debug, Clone)]
pub struct PlanetConfig {
    pub name: String,
    #[serde(rename = "mass (kg)")]
    pub mass_kg: f64,
    #[serde(rename = "diameter (km)")]
    pub diameter_km: f64,
    #[serde(rename = "init_distance (km)")]
    pub init_distance_km: f64, // distance from its system's star along x
    pub init_velocity: [f64; 3], // km/s
    #[serde(default)]
    pub system: Option<String>, // parent star name; unresolved means no offset
    pub color: [f32; 4], // RGBA
}

/// Top-level body catalog loaded from `BodiesData.json`.
/// Stars are inserted into the body set before planets.
#[derive(Deserialize, Debug, Clone)]
pub struct CatalogConfig {
    pub stars: Vec<StarConfig>,
    pub planets: Vec<PlanetConfig>,
}
