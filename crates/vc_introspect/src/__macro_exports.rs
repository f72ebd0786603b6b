//! Items referenced by the code the registration macros emit.
//!
//! Not a public API; paths here may change without notice.

pub use crate::range::{Nat, S, Z};
pub use crate::unroll::IndexFn;
pub use crate::visit::{VisitFields, VisitFieldsMut};

/// Capability selection used by generated `FieldAt` impls and
/// [`capability_of!`](crate::capability_of).
pub mod probe {
    pub use crate::dispatch::probe::{FallbackTag, PrimitiveTag, ReflectableTag, UnknownTag};
    pub use crate::dispatch::probe::{Probe, ViaFallback, ViaPrimitive, ViaReflectable, ViaUnknown};
}
