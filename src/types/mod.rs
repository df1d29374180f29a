// CBrowser shared type definitions

pub mod errors;
pub mod tab;
