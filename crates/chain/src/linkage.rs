use rollup_checkpoint_types::{BatchAddress, ChainNamespace};

use crate::{ChainError, ChainResult, LinkageFault};

/// Checks the predecessor reference of a commitment against the address
/// derivation alone, without touching storage.
///
/// Returns the predecessor's address, or `None` for the chain root.
pub fn validate_linkage(
    namespace: &ChainNamespace,
    batch_number: u64,
    previous_reference: Option<&BatchAddress>,
) -> ChainResult<Option<BatchAddress>> {
    let Some(prev_number) = batch_number.checked_sub(1) else {
        return match previous_reference {
            Some(_) => Err(ChainError::ChainRootViolation),
            None => Ok(None),
        };
    };

    let expected = BatchAddress::derive(namespace, prev_number);
    match previous_reference {
        None => Err(ChainError::broken(
            batch_number,
            LinkageFault::MissingReference,
        )),
        Some(provided) if *provided != expected => Err(ChainError::broken(
            batch_number,
            LinkageFault::MismatchedReference {
                expected,
                provided: *provided,
            },
        )),
        Some(_) => Ok(Some(expected)),
    }
}
