pub mod cyclic;
pub mod histogram;
pub mod palette;
pub mod ramp;
pub mod smooth;
