use super::icons::IconGlyph;

/// Label shown under a node that has not been assigned a name yet.
pub const PLACEHOLDER_LABEL: &str = "New task";

/// A point in canvas coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
	/// Horizontal offset in pixels.
	pub x: f64,
	/// Vertical offset in pixels.
	pub y: f64,
}

impl Position {
	/// Point at `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// What a node draws inside its circle.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum NodeIcon {
	/// Image URL rendered as an `<img>`.
	Image(String),
	/// Built-in vector glyph.
	Glyph(IconGlyph),
	/// Falls back to the first character of the node name.
	#[default]
	None,
}

/// One circle in the workflow diagram. Owned by the parent editor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorkflowNodeData {
	/// App name; empty until the step is assigned.
	pub name: String,
	/// Caption used while the node is not selected.
	pub label: Option<String>,
	/// Secondary caption under the label.
	pub sub_label: Option<String>,
	/// Top-left corner in canvas coordinates.
	pub position: Position,
	/// CSS fill color of the circle.
	pub color: String,
	/// What the circle draws.
	pub icon: NodeIcon,
	/// Marks the root step, which can never be deleted.
	pub is_first_circle: bool,
	/// Whether the add-child button is shown.
	pub show_plus_button: bool,
}

impl WorkflowNodeData {
	/// A named node that is not the root may be deleted through its context menu.
	pub fn is_selected(&self) -> bool {
		!self.name.is_empty() && !self.is_first_circle
	}

	/// Caption shown under the circle.
	pub fn display_label(&self) -> &str {
		if self.is_selected() {
			&self.name
		} else {
			self.label.as_deref().unwrap_or(PLACEHOLDER_LABEL)
		}
	}

	/// Text fallback for a node without an icon.
	pub fn initial(&self) -> Option<char> {
		self.name.chars().next()
	}
}

/// Gesture payload forwarded on every drag move and on drag stop.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragData {
	/// Node x after this event.
	pub x: f64,
	/// Node y after this event.
	pub y: f64,
	/// Horizontal movement since the previous event.
	pub delta_x: f64,
	/// Vertical movement since the previous event.
	pub delta_y: f64,
	/// Node x before this event.
	pub last_x: f64,
	/// Node y before this event.
	pub last_y: f64,
}

impl DragData {
	/// Node position after this event.
	pub fn position(&self) -> Position {
		Position::new(self.x, self.y)
	}
}
