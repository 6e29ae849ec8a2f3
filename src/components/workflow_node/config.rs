/// Appearance of a workflow node.
///
/// Provide one app-wide with `provide_context`, or pass it to a single node
/// through the `style` prop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeStyle {
	/// Diameter of the circle in pixels.
	pub circle_size: f64,
	/// Diameter of the add-child button.
	pub plus_button_size: f64,
	/// Background of the add-child button.
	pub plus_button_color: &'static str,
	/// Size of the plus glyph inside the add-child button.
	pub plus_glyph_size: f64,
	/// Size of the trash glyph in the delete menu.
	pub menu_glyph_size: f64,
	/// Size of a `NodeIcon::Glyph` icon.
	pub glyph_size: f64,
	/// Stroke color of a `NodeIcon::Glyph` icon.
	pub glyph_color: &'static str,
	/// Width and height of a `NodeIcon::Image` icon.
	pub image_size: f64,
	/// Width of the delete menu.
	pub menu_width: f64,
	/// Height of the delete menu.
	pub menu_height: f64,
	/// Text of the delete entry.
	pub menu_label: &'static str,
}

impl Default for NodeStyle {
	fn default() -> Self {
		Self {
			circle_size: 96.0,
			plus_button_size: 32.0,
			plus_button_color: "#EF4444",
			plus_glyph_size: 20.0,
			menu_glyph_size: 16.0,
			glyph_size: 40.0,
			glyph_color: "white",
			image_size: 32.0,
			menu_width: 192.0,
			menu_height: 35.0,
			menu_label: "Delete module",
		}
	}
}

impl NodeStyle {
	/// Offset that centers the plus button on the circle's bottom-right edge.
	pub fn plus_button_offset(&self) -> f64 {
		-self.plus_button_size / 2.0
	}
}
