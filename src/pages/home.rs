use leptos::prelude::*;
use log::info;
use web_sys::MouseEvent;

use crate::components::workflow_node::{
	DragData, IconGlyph, NodeIcon, NodeStyle, Position, WorkflowNode, WorkflowNodeData,
};

const ROOT_POSITION: Position = Position::new(80.0, 200.0);
const CHILD_SPACING: f64 = 200.0;
const NODE_COLOR: &str = "#3B82F6";
const ROOT_COLOR: &str = "#10B981";

/// An app a placeholder node can be turned into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppPreset {
	/// App name given to the node.
	pub name: &'static str,
	/// Caption under the name.
	pub sub_label: &'static str,
	/// Icon of the node.
	pub glyph: IconGlyph,
	/// Fill color of the node.
	pub color: &'static str,
}

/// Apps offered by the palette.
pub const PRESETS: [AppPreset; 4] = [
	AppPreset {
		name: "Mail",
		sub_label: "Send a message",
		glyph: IconGlyph::Mail,
		color: "#F59E0B",
	},
	AppPreset {
		name: "Database",
		sub_label: "Insert a row",
		glyph: IconGlyph::Database,
		color: "#8B5CF6",
	},
	AppPreset {
		name: "HTTP",
		sub_label: "Call a webhook",
		glyph: IconGlyph::Globe,
		color: "#0EA5E9",
	},
	AppPreset {
		name: "Script",
		sub_label: "Run code",
		glyph: IconGlyph::Code,
		color: "#64748B",
	},
];

/// The demo editor's node list. Index 0 is always the root.
#[derive(Clone, Debug, PartialEq)]
pub struct Workflow {
	nodes: Vec<WorkflowNodeData>,
}

impl Default for Workflow {
	fn default() -> Self {
		Self {
			nodes: vec![WorkflowNodeData {
				name: "Start".into(),
				label: Some("Trigger".into()),
				sub_label: Some("Manual run".into()),
				position: ROOT_POSITION,
				color: ROOT_COLOR.into(),
				icon: NodeIcon::Glyph(IconGlyph::Play),
				is_first_circle: true,
				show_plus_button: true,
			}],
		}
	}
}

impl Workflow {
	/// Number of nodes, root included.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// True only for a workflow without a root.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Node at `index`.
	pub fn get(&self, index: usize) -> Option<&WorkflowNodeData> {
		self.nodes.get(index)
	}

	/// Appends an unnamed node to the right of `index`, which hands over its
	/// plus button.
	pub fn add_child(&mut self, index: usize) -> Option<usize> {
		let parent = self.nodes.get_mut(index)?;
		parent.show_plus_button = false;
		let position = Position::new(parent.position.x + CHILD_SPACING, parent.position.y);
		self.nodes.push(WorkflowNodeData {
			position,
			color: NODE_COLOR.into(),
			show_plus_button: true,
			..Default::default()
		});
		Some(self.nodes.len() - 1)
	}

	/// Removes a node. The root stays.
	pub fn delete(&mut self, index: usize) -> bool {
		match self.nodes.get(index) {
			Some(node) if !node.is_first_circle => {}
			_ => return false,
		}
		let removed = self.nodes.remove(index);
		if removed.show_plus_button || !self.nodes.iter().any(|n| n.show_plus_button) {
			if let Some(last) = self.nodes.last_mut() {
				last.show_plus_button = true;
			}
		}
		true
	}

	/// Stores a dragged position; unknown indices are ignored.
	pub fn move_to(&mut self, index: usize, position: Position) {
		if let Some(node) = self.nodes.get_mut(index) {
			node.position = position;
		}
	}

	/// Names the earliest placeholder node after the given preset.
	pub fn assign(&mut self, preset: &AppPreset) -> Option<usize> {
		let index = self
			.nodes
			.iter()
			.position(|n| n.name.is_empty() && !n.is_first_circle)?;
		let node = &mut self.nodes[index];
		node.name = preset.name.into();
		node.sub_label = Some(preset.sub_label.into());
		node.icon = NodeIcon::Glyph(preset.glyph);
		node.color = preset.color.into();
		Some(index)
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	provide_context(NodeStyle::default());
	let workflow = RwSignal::new(Workflow::default());

	let on_drag = move |(index, _, data): (usize, MouseEvent, DragData)| {
		workflow.update(|w| w.move_to(index, data.position()));
	};
	let on_drag_stop = move |(index, _, data): (usize, MouseEvent, DragData)| {
		workflow.update(|w| w.move_to(index, data.position()));
		info!("node {} moved to ({}, {})", index, data.x, data.y);
	};
	let on_add_child = move |index: usize| {
		if let Some(child) = workflow.try_update(|w| w.add_child(index)).flatten() {
			info!("node {} added under {}", child, index);
		}
	};
	let on_delete = move |index: usize| {
		if workflow.try_update(|w| w.delete(index)).unwrap_or(false) {
			info!("node {} deleted", index);
		}
	};

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="workflow-editor">
				<aside class="workflow-palette">
					<h2>"Apps"</h2>
					{PRESETS
						.iter()
						.map(|preset| {
							let preset = *preset;
							view! {
								<button
									class="workflow-palette-item"
									on:click=move |_| {
										if let Some(index) = workflow.try_update(|w| w.assign(&preset)).flatten() {
											info!("node {} assigned to {}", index, preset.name);
										}
									}
								>
									{preset.name}
								</button>
							}
						})
						.collect_view()}
				</aside>
				<div class="workflow-canvas">
					<For
						each=move || 0..workflow.with(Workflow::len)
						key=|index| *index
						children=move |index: usize| {
							let node = Signal::derive(move || {
								workflow.with(|w| w.get(index).cloned().unwrap_or_default())
							});
							view! {
								<WorkflowNode
									node=node
									index=index
									on_drag=on_drag
									on_drag_stop=on_drag_stop
									on_add_child=on_add_child
									on_delete=on_delete
								/>
							}
						}
					/>
				</div>
				<div class="graph-overlay">
					<h1>"Workflow Editor"</h1>
					<p class="subtitle">
						"Drag circles to arrange. Right-click a named step to delete it."
					</p>
				</div>
			</div>
		</ErrorBoundary>
	}
}
