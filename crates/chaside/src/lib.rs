//! CHASIDE vocational inventory scoring.
//!
//! The [`workflows::diagnosis`] engine turns raw yes/no answers into area
//! scores, a dominant area per lens, a coherence verdict against the declared
//! career, and a traffic-light category. [`workflows::survey`] reads the
//! questionnaire export that feeds it.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
