//! The canonical instance table.
//!
//! Every descriptor the registry can hand out lives in one `static` array,
//! built by `const fn` at compile time. A descriptor's address is its identity.
//!
//! # Layout
//!
//! ```text
//! [ shaped:  basic(4) x precision x qualifier x primary(4) x secondary(4) ]
//! [ scalar:  basic(rest) x precision x qualifier                          ]
//! ```
//!
//! Opaque types only get the scalar shape, so no slots are spent on shapes
//! that can never be requested.

use crate::{BasicType, MangledName, Precision, Qualifier, TType};

/// Largest primary or secondary size.
const MAX_SIZE: u8 = 4;

const SIZES: usize = MAX_SIZE as usize;

const QUALIFIED: usize = Precision::COUNT * Qualifier::COUNT;

const SHAPED_LEN: usize = BasicType::SHAPED_COUNT * QUALIFIED * SIZES * SIZES;

const SCALAR_ONLY_LEN: usize = (BasicType::COUNT - BasicType::SHAPED_COUNT) * QUALIFIED;

/// Number of descriptors in the table.
pub const LEN: usize = SHAPED_LEN + SCALAR_ONLY_LEN;

static INSTANCES: [TType; LEN] = build();

/// Table slot of a shape key.
///
/// Callers guarantee the sizes are in `1..=4` and that scalar-only basic types
/// are only asked for in `1x1`.
pub(crate) const fn slot(
    basic_type: BasicType,
    precision: Precision,
    qualifier: Qualifier,
    primary_size: u8,
    secondary_size: u8,
) -> usize {
    if basic_type.is_shaped() {
        let qualified = qualified_index(basic_type.index(), precision, qualifier);
        let shape = (primary_size as usize - 1) * SIZES + (secondary_size as usize - 1);
        qualified * SIZES * SIZES + shape
    } else {
        let basic = basic_type.index() - BasicType::SHAPED_COUNT;
        SHAPED_LEN + qualified_index(basic, precision, qualifier)
    }
}

const fn qualified_index(basic: usize, precision: Precision, qualifier: Qualifier) -> usize {
    (basic * Precision::COUNT + precision.index()) * Qualifier::COUNT + qualifier.index()
}

/// The descriptor at a slot computed by [`slot`].
#[inline]
pub(crate) fn instance(slot: usize) -> &'static TType {
    &INSTANCES[slot]
}

/// All canonical descriptors.
pub fn instances() -> &'static [TType] {
    &INSTANCES
}

const fn build() -> [TType; LEN] {
    const VACANT: TType = TType::new(
        BasicType::Void,
        Precision::Undefined,
        Qualifier::Global,
        1,
        1,
        MangledName::build(BasicType::Void, 1, 1),
    );

    let mut table = [VACANT; LEN];

    let mut b = 0;
    while b < BasicType::COUNT {
        let basic_type = BasicType::ALL[b];
        let max_size = if basic_type.is_shaped() { MAX_SIZE } else { 1 };

        let mut p = 0;
        while p < Precision::COUNT {
            let precision = Precision::ALL[p];

            let mut q = 0;
            while q < Qualifier::COUNT {
                let qualifier = Qualifier::ALL[q];

                let mut primary = 1;
                while primary <= max_size {
                    let mut secondary = 1;
                    while secondary <= max_size {
                        table[slot(basic_type, precision, qualifier, primary, secondary)] =
                            TType::new(
                                basic_type,
                                precision,
                                qualifier,
                                primary,
                                secondary,
                                MangledName::build(basic_type, primary, secondary),
                            );
                        secondary += 1;
                    }
                    primary += 1;
                }
                q += 1;
            }
            p += 1;
        }
        b += 1;
    }

    table
}
