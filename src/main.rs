//! Trunk entry point: mount the app to the document body.

use graph_manager::{App, init_logging};
use leptos::prelude::mount_to_body;

fn main() {
	init_logging();
	mount_to_body(App);
}
