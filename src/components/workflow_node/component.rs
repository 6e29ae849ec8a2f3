use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use log::{debug, error};
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

use super::config::NodeStyle;
use super::error::NodeActionError;
use super::icons::{Glyph, IconGlyph};
use super::outside_click::OutsideClickListener;
use super::state::{ContextMenuState, DragState};
use super::types::{DragData, NodeIcon, Position, WorkflowNodeData};

/// A draggable workflow circle with an add-child button and a delete menu.
///
/// The node never moves or deletes itself: every change is handed to the
/// parent through the callbacks, keyed by `index`.
#[component]
pub fn WorkflowNode(
	/// Node descriptor, re-read on every render.
	#[prop(into)]
	node: Signal<WorkflowNodeData>,
	/// Position of the node in the parent's collection.
	index: usize,
	/// Called with `index` when a gesture begins.
	#[prop(optional, into)]
	on_drag_start: Option<Callback<usize>>,
	/// Called on every pointer move of a gesture.
	#[prop(optional, into)]
	on_drag: Option<Callback<(usize, MouseEvent, DragData)>>,
	/// Called once when the gesture ends.
	#[prop(optional, into)]
	on_drag_stop: Option<Callback<(usize, MouseEvent, DragData)>>,
	/// Called with `index` when the plus button is clicked.
	#[prop(optional, into)]
	on_add_child: Option<Callback<usize>>,
	/// Called with `index` from the context menu; a missing handler is logged.
	#[prop(optional, into)]
	on_delete: Option<Callback<usize>>,
	/// Overrides the `NodeStyle` found in context.
	#[prop(optional)]
	style: Option<NodeStyle>,
) -> impl IntoView {
	let style = style
		.or_else(use_context::<NodeStyle>)
		.unwrap_or_default();
	let circle_ref = NodeRef::<leptos::html::Div>::new();
	let menu_ref = NodeRef::<leptos::html::Div>::new();
	let (menu, set_menu) = signal(ContextMenuState::default());
	// Position while a gesture is in flight; `None` defers to the parent.
	let (live_position, set_live_position) = signal(None::<Position>);
	let drag: Rc<RefCell<DragState>> = Rc::new(RefCell::new(DragState::default()));

	match OutsideClickListener::install(move |ev: MouseEvent| {
		let Some(menu_el) = menu_ref.get_untracked() else {
			return;
		};
		let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
		let inside = menu_el.contains(target.as_ref());
		set_menu.update(|m| {
			if m.pointer_down(inside) {
				debug!("context menu of node {} dismissed", index);
			}
		});
	}) {
		Ok(listener) => {
			let listener = StoredValue::new_local(Some(listener));
			on_cleanup(move || {
				listener.update_value(|l| *l = None);
			});
		}
		Err(err) => error!("{}", err),
	}

	let drag_move = drag.clone();
	let move_handle = window_event_listener(ev::mousemove, move |ev| {
		let Some(data) = drag_move
			.borrow_mut()
			.update(ev.client_x() as f64, ev.client_y() as f64)
		else {
			return;
		};
		set_live_position.set(Some(data.position()));
		if let Some(cb) = on_drag {
			cb.run((index, ev, data));
		}
	});

	let drag_up = drag.clone();
	let up_handle = window_event_listener(ev::mouseup, move |ev| {
		let Some(data) = drag_up
			.borrow_mut()
			.end(ev.client_x() as f64, ev.client_y() as f64)
		else {
			return;
		};
		set_live_position.set(None);
		debug!("node {} dropped at ({}, {})", index, data.x, data.y);
		if let Some(cb) = on_drag_stop {
			cb.run((index, ev, data));
		}
	});

	on_cleanup(move || {
		move_handle.remove();
		up_handle.remove();
	});

	let drag_down = drag.clone();
	let on_mousedown = move |ev: MouseEvent| {
		if ev.button() != 0 || targets_button(&ev) {
			return;
		}
		let origin = node.with_untracked(|n| n.position);
		drag_down
			.borrow_mut()
			.begin(ev.client_x() as f64, ev.client_y() as f64, origin);
		set_live_position.set(Some(origin));
		debug!("drag started on node {}", index);
		if let Some(cb) = on_drag_start {
			cb.run(index);
		}
	};

	let open_menu = move |ev: &MouseEvent| {
		ev.prevent_default();
		if !node.with_untracked(WorkflowNodeData::is_selected) {
			return;
		}
		match local_offset(circle_ref, ev) {
			Ok((x, y)) => {
				set_menu.update(|m| m.open_at(x, y));
				debug!("context menu of node {} opened at ({}, {})", index, x, y);
			}
			Err(err) => error!("{}", err),
		}
	};

	let delete = move |_: MouseEvent| {
		if let Err(err) = dispatch_delete(on_delete, index) {
			error!("{}", err);
		}
		set_menu.update(ContextMenuState::close);
	};

	let add_child = move |_: MouseEvent| {
		if let Some(cb) = on_add_child {
			cb.run(index);
		}
	};

	let transform = move || {
		let p = live_position
			.get()
			.unwrap_or_else(|| node.with(|n| n.position));
		format!("translate({}px, {}px)", p.x, p.y)
	};
	let circle_size = format!("{}px", style.circle_size);
	let plus_size = format!("{}px", style.plus_button_size);
	let plus_offset = format!("{}px", style.plus_button_offset());

	view! {
		<div
			class="workflow-node"
			class:dragging=move || live_position.get().is_some()
			style:transform=transform
			on:mousedown=on_mousedown
		>
			<div
				node_ref=circle_ref
				class="workflow-node-circle"
				style:width=circle_size.clone()
				style:height=circle_size
				style:background-color=move || node.with(|n| n.color.clone())
				on:contextmenu=move |ev| open_menu(&ev)
			>
				{move || node.with(|n| render_icon(n, style))}
				<Show when=move || node.with(|n| n.show_plus_button)>
					<button
						class="workflow-node-plus"
						style:width=plus_size.clone()
						style:height=plus_size.clone()
						style:right=plus_offset.clone()
						style:bottom=plus_offset.clone()
						style:background-color=style.plus_button_color
						on:click=add_child
					>
						<Glyph glyph=IconGlyph::Plus size=style.plus_glyph_size />
					</button>
				</Show>
				<Show when=move || menu.get().open>
					<div
						node_ref=menu_ref
						class="workflow-node-menu"
						style:left=move || format!("{}px", menu.get().x)
						style:top=move || format!("{}px", menu.get().y)
						style:width=format!("{}px", style.menu_width)
						style:height=format!("{}px", style.menu_height)
					>
						<button class="workflow-node-delete" on:click=delete>
							<Glyph
								glyph=IconGlyph::Trash
								size=style.menu_glyph_size
								class="workflow-node-delete-glyph"
							/>
							{style.menu_label}
						</button>
					</div>
				</Show>
			</div>
			<div class="workflow-node-caption">
				<div class="workflow-node-label">
					{move || node.with(|n| n.display_label().to_string())}
				</div>
				{move || {
					node.with(|n| n.sub_label.clone())
						.map(|sub| view! { <div class="workflow-node-sub-label">{sub}</div> })
				}}
			</div>
		</div>
	}
}

fn render_icon(node: &WorkflowNodeData, style: NodeStyle) -> AnyView {
	match &node.icon {
		NodeIcon::Image(src) => {
			let size = format!("{}px", style.image_size);
			view! {
				<img
					class="workflow-node-icon"
					src=src.clone()
					alt=node.name.clone()
					style:width=size.clone()
					style:height=size
				/>
			}
			.into_any()
		}
		NodeIcon::Glyph(glyph) => view! {
			<Glyph
				glyph=*glyph
				size=style.glyph_size
				color=style.glyph_color
				class="workflow-node-icon"
			/>
		}
		.into_any(),
		NodeIcon::None => match node.initial() {
			Some(c) => view! { <span class="workflow-node-initial">{c.to_string()}</span> }.into_any(),
			None => ().into_any(),
		},
	}
}

fn dispatch_delete(on_delete: Option<Callback<usize>>, index: usize) -> Result<(), NodeActionError> {
	let cb = on_delete.ok_or(NodeActionError::MissingDeleteHandler { index })?;
	cb.run(index);
	Ok(())
}

/// Offset of the pointer inside the circle's bounding box.
fn local_offset(
	circle_ref: NodeRef<leptos::html::Div>,
	ev: &MouseEvent,
) -> Result<(f64, f64), NodeActionError> {
	let circle = circle_ref
		.get_untracked()
		.ok_or(NodeActionError::CircleNotMounted)?;
	let rect = circle.get_bounding_client_rect();
	Ok((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

fn targets_button(ev: &MouseEvent) -> bool {
	ev.target()
		.and_then(|t| t.dyn_into::<Element>().ok())
		.and_then(|el| el.closest("button").ok().flatten())
		.is_some()
}
