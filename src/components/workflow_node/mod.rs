//! Draggable workflow node and its supporting types.

mod component;
mod config;
mod error;
mod icons;
mod outside_click;
mod state;
mod types;

pub use component::WorkflowNode;
pub use config::NodeStyle;
pub use error::NodeActionError;
pub use outside_click::OutsideClickListener;
pub use icons::{Glyph, IconGlyph};
pub use state::{ContextMenuState, DragState};
pub use types::{DragData, NodeIcon, PLACEHOLDER_LABEL, Position, WorkflowNodeData};
