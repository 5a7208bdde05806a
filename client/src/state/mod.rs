//! Client-side state for the chat widget.
//!
//! DESIGN
//! ======
//! The widget owns a single `WidgetState`; presentation concerns and
//! transcript data live together because nothing else reads them.

pub mod widget;
