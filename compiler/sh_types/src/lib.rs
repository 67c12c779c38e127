//! Canonical type registry for the shader translator.
//!
//! Thousands of type occurrences in a shader (every `vec3` parameter of every
//! built-in) share one descriptor per distinct
//! `(basic type, precision, qualifier, primary size, secondary size)`.
//! Sharing makes type equality an address comparison and gives every type a
//! precomputed mangled name for overload and symbol disambiguation.
//!
//! # Layout
//!
//! - [`BasicType`], [`Precision`], [`Qualifier`]: the key components
//! - [`MangledName`]: fixed-size names, built at compile time
//! - [`TType`]: the descriptor itself
//! - [`static_type`]: the canonical table and every lookup into it
//! - [`ShapeKey`]: validated keys for callers that only know a type at run time
//!
//! All descriptors are built by `const fn` into a `static` table, so they
//! exist before any lookup runs and can be shared freely across threads.

/// Assert the size of a type at compile time.
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod basic;
mod mangle;
mod qualifier;
mod shape;
pub mod static_type;
mod ty;

pub use basic::{BasicType, MAX_MANGLED_CODE_LEN};
pub use mangle::{
    MangledName, MangledNameError, ParsedMangledName, ShapeClass, MANGLED_NAME_MAX_LEN,
};
pub use qualifier::{Precision, Qualifier};
pub use shape::{ShapeError, ShapeKey};
pub use ty::TType;

// Descriptors are stored inline in the static table; keep them small.
static_assert_size!(BasicType, 1);
static_assert_size!(MangledName, 12);
static_assert_size!(TType, 17);

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a stderr subscriber filtered by `RUST_LOG`.
///
/// `RUST_LOG=sh_types=error` shows unreachable lookups, `sh_types=debug` also
/// shows rejected shape keys. Does nothing when `RUST_LOG` is unset or a
/// global subscriber already exists; later calls are no-ops.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(filter) = EnvFilter::try_from_default_env() else {
            return;
        };
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .try_init();
    });
}
