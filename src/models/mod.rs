pub mod inventory;
pub mod order;
pub mod product;

pub use inventory::*;
pub use order::*;
pub use product::*;
