pub mod gate;
pub use gate::AdminGate;
