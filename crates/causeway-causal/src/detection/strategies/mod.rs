pub mod correlation;
pub mod direct_mapping;
pub mod threshold;
