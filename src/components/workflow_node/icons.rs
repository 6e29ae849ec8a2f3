//! Stroke glyphs drawn on a 24x24 grid, rendered as inline SVG.

use leptos::prelude::*;

/// Built-in glyph set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconGlyph {
	/// Add-child button.
	Plus,
	/// Delete menu entry.
	Trash,
	/// Workflow trigger.
	Play,
	/// Email step.
	Mail,
	/// Storage step.
	Database,
	/// HTTP step.
	Globe,
	/// Script step.
	Code,
}

impl IconGlyph {
	/// Every glyph, in declaration order.
	pub const ALL: [IconGlyph; 7] = [
		IconGlyph::Plus,
		IconGlyph::Trash,
		IconGlyph::Play,
		IconGlyph::Mail,
		IconGlyph::Database,
		IconGlyph::Globe,
		IconGlyph::Code,
	];

	/// Stable identifier, exposed as `data-glyph` on the rendered SVG.
	pub fn name(self) -> &'static str {
		match self {
			IconGlyph::Plus => "plus",
			IconGlyph::Trash => "trash",
			IconGlyph::Play => "play",
			IconGlyph::Mail => "mail",
			IconGlyph::Database => "database",
			IconGlyph::Globe => "globe",
			IconGlyph::Code => "code",
		}
	}

	/// SVG path data on a 24x24 grid.
	pub fn paths(self) -> &'static [&'static str] {
		match self {
			IconGlyph::Plus => &["M5 12h14", "M12 5v14"],
			IconGlyph::Trash => &[
				"M3 6h18",
				"M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6",
				"M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2",
				"M10 11v6",
				"M14 11v6",
			],
			IconGlyph::Play => &["M6 3l14 9-14 9V3z"],
			IconGlyph::Mail => &[
				"M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
				"M22 7l-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
			],
			IconGlyph::Database => &[
				"M21 5a9 3 0 1 1-18 0a9 3 0 1 1 18 0",
				"M3 5v14a9 3 0 0 0 18 0V5",
				"M3 12a9 3 0 0 0 18 0",
			],
			IconGlyph::Globe => &[
				"M22 12a10 10 0 1 1-20 0a10 10 0 1 1 20 0",
				"M12 2a14.5 14.5 0 0 0 0 20a14.5 14.5 0 0 0 0-20",
				"M2 12h20",
			],
			IconGlyph::Code => &["M16 18l6-6-6-6", "M8 6l-6 6 6 6"],
		}
	}
}

/// Inline SVG for a glyph at a fixed pixel size and stroke color.
#[component]
pub fn Glyph(
	glyph: IconGlyph,
	#[prop(default = 24.0)] size: f64,
	#[prop(default = "currentColor")] color: &'static str,
	#[prop(optional)] class: &'static str,
) -> impl IntoView {
	let size = size.to_string();
	view! {
		<svg
			xmlns="http://www.w3.org/2000/svg"
			class=class
			data-glyph=glyph.name()
			width=size.clone()
			height=size
			viewBox="0 0 24 24"
			fill="none"
			stroke=color
			stroke-width="2"
			stroke-linecap="round"
			stroke-linejoin="round"
		>
			{glyph.paths().iter().map(|d| view! { <path d=*d /> }).collect_view()}
		</svg>
	}
}
