//! Study session: the remote collaborator contract and the step wizard.

pub mod api;
pub mod wizard;

pub use api::StudyApi;
pub use wizard::{Advance, Step, StudyWizard};
