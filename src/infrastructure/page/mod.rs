//! Page implementations.
//!
//! - [`MemoryPage`] - Field values and display state held in memory
//! - [`TerminalPage`] - `MemoryPage` that also renders to the terminal
//! - `DomPage` - The live browser document (wasm32 only)

#[cfg(target_arch = "wasm32")]
mod dom;
mod memory;
#[cfg(not(target_arch = "wasm32"))]
mod terminal;

#[cfg(target_arch = "wasm32")]
pub use dom::DomPage;
pub use memory::MemoryPage;
#[cfg(not(target_arch = "wasm32"))]
pub use terminal::TerminalPage;
