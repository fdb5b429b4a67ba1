mod carlsen;
mod kasparov;

pub use carlsen::CARLSEN;
pub use kasparov::KASPAROV;
