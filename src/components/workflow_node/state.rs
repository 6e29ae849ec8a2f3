use super::types::{DragData, Position};

/// Visibility and local offset of the delete menu.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContextMenuState {
	/// Whether the menu is rendered.
	pub open: bool,
	/// Left offset from the circle's bounding box.
	pub x: f64,
	/// Top offset from the circle's bounding box.
	pub y: f64,
}

impl ContextMenuState {
	/// Opens the menu at an offset inside the circle's bounding box. A later
	/// call replaces the previous position.
	pub fn open_at(&mut self, x: f64, y: f64) {
		self.open = true;
		self.x = x;
		self.y = y;
	}

	/// Hides the menu, keeping its last position.
	pub fn close(&mut self) {
		self.open = false;
	}

	/// Applies a document-level pointer-down. Returns true if the menu closed.
	pub fn pointer_down(&mut self, inside_menu: bool) -> bool {
		if self.open && !inside_menu {
			self.close();
			return true;
		}
		false
	}
}

/// Turns raw pointer coordinates into node positions for one gesture.
///
/// The node's own position is controlled by the parent; this only tracks
/// where the gesture would put it.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	active: bool,
	start_x: f64,
	start_y: f64,
	node_start_x: f64,
	node_start_y: f64,
	last_x: f64,
	last_y: f64,
}

impl DragState {
	/// Starts a gesture at the pointer, with the node currently at `origin`.
	pub fn begin(&mut self, pointer_x: f64, pointer_y: f64, origin: Position) -> DragData {
		self.active = true;
		self.start_x = pointer_x;
		self.start_y = pointer_y;
		self.node_start_x = origin.x;
		self.node_start_y = origin.y;
		self.last_x = origin.x;
		self.last_y = origin.y;
		DragData {
			x: origin.x,
			y: origin.y,
			delta_x: 0.0,
			delta_y: 0.0,
			last_x: origin.x,
			last_y: origin.y,
		}
	}

	/// Returns `None` when no gesture is in progress.
	pub fn update(&mut self, pointer_x: f64, pointer_y: f64) -> Option<DragData> {
		if !self.active {
			return None;
		}
		let (x, y) = (
			self.node_start_x + (pointer_x - self.start_x),
			self.node_start_y + (pointer_y - self.start_y),
		);
		let data = DragData {
			x,
			y,
			delta_x: x - self.last_x,
			delta_y: y - self.last_y,
			last_x: self.last_x,
			last_y: self.last_y,
		};
		self.last_x = x;
		self.last_y = y;
		Some(data)
	}

	/// Final move of the gesture. Returns `None` when no gesture is in progress.
	pub fn end(&mut self, pointer_x: f64, pointer_y: f64) -> Option<DragData> {
		let data = self.update(pointer_x, pointer_y)?;
		self.active = false;
		Some(data)
	}

	pub fn is_active(&self) -> bool {
		self.active
	}

	/// Position of the node under the gesture, if one is in progress.
	pub fn current(&self) -> Option<Position> {
		self.active.then(|| Position::new(self.last_x, self.last_y))
	}
}
