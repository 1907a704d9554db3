pub mod assignment;
pub mod lifecycle;
pub mod renewals;
pub mod rera;
