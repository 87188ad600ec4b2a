use crate::error::LayoutError;

/// Checks that `ordinals`, the key ordinals of a property list in
/// declaration order, describe exactly one entry per real variant of an enum
/// whose sentinel has ordinal `sentinel`.
///
/// Checks run in order: count, sentinel, duplicates, position. Position `i`
/// must hold ordinal `i`; entries are never reordered.
pub const fn validate_layout(ordinals: &[usize], sentinel: usize) -> Result<(), LayoutError> {
    if ordinals.len() != sentinel {
        return Err(LayoutError::CountMismatch {
            expected: sentinel,
            found: ordinals.len(),
        });
    }

    let mut position = 0;

    while position < ordinals.len() {
        let ordinal = ordinals[position];

        if ordinal >= sentinel {
            return Err(LayoutError::SentinelKey { position });
        }

        let mut earlier = 0;

        while earlier < position {
            if ordinals[earlier] == ordinal {
                return Err(LayoutError::DuplicateKey { position });
            }

            earlier += 1;
        }

        if ordinal != position {
            return Err(LayoutError::OutOfOrder { position, ordinal });
        }

        position += 1;
    }

    Ok(())
}

/// [`validate_layout`] for constant contexts: every error becomes a
/// compile-time panic.
pub const fn assert_layout(ordinals: &[usize], sentinel: usize) {
    match validate_layout(ordinals, sentinel) {
        Ok(()) => {}
        Err(LayoutError::CountMismatch { .. }) => {
            panic!("provide a property for every enum variant")
        }
        Err(LayoutError::SentinelKey { .. }) => {
            panic!("the sentinel variant must not be used as a key")
        }
        Err(LayoutError::DuplicateKey { .. }) => {
            panic!("each enum variant must be given exactly one property")
        }
        Err(LayoutError::OutOfOrder { .. }) => {
            panic!("properties must be listed in enum variant order")
        }
    }
}
