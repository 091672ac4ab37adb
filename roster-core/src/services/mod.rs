//! Business logic service layer

mod form_controller;

pub use form_controller::{FormController, FormMode, RemoveOutcome, SubmitOutcome};
