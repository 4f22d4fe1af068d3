pub mod form_store;
pub mod material_flow;
pub mod request_ctx;

pub use form_store::FormStore;
pub use material_flow::MaterialFlow;
pub use request_ctx::RequestCtx;
