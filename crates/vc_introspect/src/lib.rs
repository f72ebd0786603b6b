#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code always names this crate `vc_introspect`, which also has to
// resolve inside the crate itself.
extern crate self as vc_introspect;

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflectable;

pub mod dispatch;
pub mod range;
pub mod record;
pub mod unroll;
pub mod visit;

#[cfg(feature = "dump")]
pub mod dump;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use vc_introspect_derive as derive;

pub use dispatch::{Capability, Dispatch, DispatchMut, Fallback, Primitive};
pub use dispatch::{dispatch_each, dispatch_each_mut};
pub use record::{Descriptor, DescriptorMut, Field, FieldMut};
pub use record::{FieldAt, FieldInfo, Record, RecordInfo, field_count};
pub use reflectable::Reflectable;
pub use visit::{Visitor, VisitorMut, visit_each, visit_each_mut};

#[cfg(feature = "dump")]
pub use dump::{DumpError, TreeDump};
