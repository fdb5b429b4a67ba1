mod french;
mod sicilian;
mod spanish;

pub use french::FRENCH;
pub use sicilian::SICILIAN;
pub use spanish::SPANISH;
