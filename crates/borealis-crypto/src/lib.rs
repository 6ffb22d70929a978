pub mod bls;
pub mod encode;
pub mod node_id;

pub use bls::{BlsSigner, ProofOfPossession};
pub use encode::{cb58, hex_nc};
pub use node_id::node_id;
