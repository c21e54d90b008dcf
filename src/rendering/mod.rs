pub mod adapter;
pub mod backend;
pub mod context;
pub mod embed;

// Re-export main types
pub use adapter::RendererAdapter;
pub use backend::{MapBackend, MarkerSpec};
pub use context::{DrawCommand, RenderContext};
pub use embed::EmbedPayload;
