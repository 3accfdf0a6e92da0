//! Structural model of an aggregate declaration.
//!
//! ```text
//! AggregateInfo
//!   ├── containing_types: MemoSeq<ContainingType>   (outermost first)
//!   │       └── type_parameters: MemoSeq<TypeParameter>
//!   ├── type_parameters:  MemoSeq<TypeParameter>
//!   │       └── constraints: MemoSeq<String>
//!   ├── dependencies:     MemoSeq<DependencyInfo>    (required first)
//!   └── options:          GenerationOptions
//! ```

mod aggregate;
mod containing;
mod dependency;
mod options;
mod type_param;

pub use aggregate::AggregateInfo;
pub use containing::{ContainingType, ContainingTypeKind};
pub use dependency::DependencyInfo;
pub use options::{Accessibility, GeneratedTypeKind, GeneratedTypeLocation, GenerationOptions};
pub use type_param::TypeParameter;
