pub mod file_type;
pub mod form;
pub mod loaders;
pub mod options;
pub mod policy;
pub mod preset;
pub mod request;

pub use file_type::FileType;
pub use form::{FormState, MaxMarks};
pub use loaders::{load_all_presets, load_preset};
pub use options::MaterialKind;
pub use policy::{field_policy, FieldPolicy};
pub use preset::MaterialPreset;
pub use request::{ExportRequest, ExportResponse, GenerateResponse, GenerationRequest};
