use thiserror::Error;

/// Failures raised by node interactions. They are logged, never thrown.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NodeActionError {
	/// Delete was invoked on a node rendered without `on_delete`.
	#[error("no delete handler supplied for node {index}")]
	MissingDeleteHandler {
		/// Index of the node.
		index: usize,
	},

	/// The circle element was gone when its bounding box was needed.
	#[error("node circle is not mounted")]
	CircleNotMounted,

	/// The outside-click listener could not reach the document.
	#[error("document is unavailable: {0}")]
	DocumentUnavailable(String),
}
