pub mod number;
pub mod random;

pub use number::NumberRepository;
pub use random::RandomRepository;
