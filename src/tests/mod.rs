//! Test modules for the game engine
//!
//! This module contains all unit tests for the game engine components.
pub mod energy_regeneration_test;
pub mod engine_properties_test;
pub mod entity_structures_test;
pub mod position_correction_test;
pub mod property_access_test;
pub mod scenario_test;
pub mod user_scenario_test;
