pub mod answer;
pub mod instrument;
pub mod recommendation;
pub mod report;
pub mod severity;
