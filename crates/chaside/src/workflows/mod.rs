pub mod diagnosis;
pub mod survey;
