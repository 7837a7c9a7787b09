use crate::TargetOption;

/// Related array fields of a struct don't have the same number of entries.
///
/// Hashing is aborted when this happens; no partial digest is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "length mismatch in {schema}: `{field}` has {actual} entries, expecting {expect} to match `{reference}`"
)]
pub struct ShapeError {
    pub schema: &'static str,
    pub reference: &'static str,
    pub field: &'static str,
    pub expect: usize,
    pub actual: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("target option at index {index} is unset")]
    Unset { index: usize },

    #[error("no address known for target option `{option}` (index {index})")]
    Unknown { option: TargetOption, index: usize },
}

/// Ensure every `(field, len)` pair has the same length as the reference.
pub(crate) fn ensure_same_len(
    schema: &'static str,
    (reference, expect): (&'static str, usize),
    others: &[(&'static str, usize)],
) -> Result<(), ShapeError> {
    for &(field, actual) in others {
        if actual != expect {
            return Err(ShapeError {
                schema,
                reference,
                field,
                expect,
                actual,
            });
        }
    }

    Ok(())
}
