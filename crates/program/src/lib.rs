//! Host-facing entry points of the rollup program.
//!
//! Instructions arrive signed. The signer is authenticated here before the
//! chain manager or the dispute verifier ever see it.

mod auth;
mod errors;
mod instruction;
mod program;

pub use auth::{AuthError, SignerAuthenticator};
pub use errors::{ProgramError, ProgramResult};
pub use instruction::{Instruction, SignedInstruction, INSTRUCTION_SIGHASH_TAG};
pub use program::{ExecOutcome, RollupProgram};
