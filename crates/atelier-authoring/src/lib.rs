//! Admin authoring pipeline: loosely-typed form input in, canonical model
//! values out. All functions here are synchronous and side-effect free;
//! persistence and identity-uniqueness checks live in the service layer.

pub mod category;
pub mod enquiry;
pub mod error;
pub mod input;
pub mod journey;
pub mod normalize;

pub use category::{apply_category_patch, new_category};
pub use enquiry::{EnquiryDraft, validate_enquiry};
pub use error::ValidationError;
pub use input::{
    CategoryInput, DeliverableInput, EnquiryInput, FlagInput, JourneyInput, ListInput, NumberInput,
    PlanInput, TextBlockInput,
};
pub use journey::{apply_journey_patch, new_journey_entry};
