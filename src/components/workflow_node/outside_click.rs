use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{Document, MouseEvent};

use super::error::NodeActionError;

/// A document-level `mousedown` subscription that removes itself on drop.
pub struct OutsideClickListener {
	document: Document,
	callback: Closure<dyn FnMut(MouseEvent)>,
}

impl OutsideClickListener {
	/// Registers `on_pointer_down` for every `mousedown` on the document.
	pub fn install(
		on_pointer_down: impl FnMut(MouseEvent) + 'static,
	) -> Result<Self, NodeActionError> {
		let document = web_sys::window()
			.and_then(|w| w.document())
			.ok_or_else(|| NodeActionError::DocumentUnavailable("no window".into()))?;
		let callback = Closure::<dyn FnMut(MouseEvent)>::new(on_pointer_down);
		document
			.add_event_listener_with_callback("mousedown", callback.as_ref().unchecked_ref())
			.map_err(|e| NodeActionError::DocumentUnavailable(format!("{:?}", e)))?;
		debug!("outside-click listener installed");
		Ok(Self { document, callback })
	}
}

impl Drop for OutsideClickListener {
	fn drop(&mut self) {
		let _ = self
			.document
			.remove_event_listener_with_callback("mousedown", self.callback.as_ref().unchecked_ref());
		debug!("outside-click listener removed");
	}
}
