//! Remote Graph Store client: wire types and the three store operations.
//!
//! The store is fail-soft: transport errors, non-2xx statuses, missing
//! envelope fields, and malformed bodies all collapse to `None` or an
//! empty list here. Callers never see an error value.

use ehttp::Request;
use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;

fn base_url() -> &'static str {
	option_env!("GRAPH_STORE_URL").unwrap_or("http://localhost:8000")
}

/// One node of a remote graph. The id doubles as the display label.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NodeRecord {
	/// Unique-per-graph node identifier.
	#[serde(deserialize_with = "id_string")]
	pub id: String,
}

/// A weighted link between two node ids. Multiple links between the same
/// pair are permitted and rendered independently.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Link {
	/// Id of the node the link starts at.
	#[serde(deserialize_with = "id_string")]
	pub source: String,
	/// Id of the node the link points to.
	#[serde(deserialize_with = "id_string")]
	pub target: String,
	/// Edge attribute rendered as the edge label; any JSON type.
	#[serde(default)]
	pub weight: Option<Value>,
}

/// Server-held node-link document, the networkx `node_link_data` shape.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RemoteGraph {
	/// Nodes in the order the store lists them.
	#[serde(default)]
	pub nodes: Vec<NodeRecord>,
	/// Weighted links between nodes.
	#[serde(default)]
	pub links: Vec<Link>,
}

// Graph and node ids arrive as JSON numbers for CSV-derived graphs and as
// strings otherwise; both become `String`.
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: serde::Deserializer<'de>,
{
	match Value::deserialize(deserializer)? {
		Value::String(s) => Ok(s),
		other => Ok(other.to_string()),
	}
}

#[derive(Deserialize)]
struct GraphsEnvelope {
	#[serde(default)]
	graphs: Vec<Value>,
}

#[derive(Deserialize)]
struct GraphEnvelope<T> {
	graph: Option<T>,
}

fn parse_graph_list(body: &[u8]) -> Vec<String> {
	match serde_json::from_slice::<GraphsEnvelope>(body) {
		Ok(envelope) => envelope
			.graphs
			.into_iter()
			.map(|id| match id {
				Value::String(s) => s,
				other => other.to_string(),
			})
			.collect(),
		Err(err) => {
			warn!("get-graphs body did not parse: {err}");
			Vec::new()
		}
	}
}

fn parse_graph(body: &[u8]) -> Option<RemoteGraph> {
	match serde_json::from_slice::<GraphEnvelope<RemoteGraph>>(body) {
		Ok(envelope) => envelope.graph,
		Err(err) => {
			warn!("get-graph body did not parse: {err}");
			None
		}
	}
}

fn parse_created_node(body: &[u8]) -> Option<NodeRecord> {
	match serde_json::from_slice::<GraphEnvelope<NodeRecord>>(body) {
		Ok(envelope) => envelope.graph,
		Err(err) => {
			warn!("add-node body did not parse: {err}");
			None
		}
	}
}

fn encode(value: &str) -> String {
	js_sys::encode_uri_component(value).into()
}

/// List the identifiers of every stored graph. Empty on any failure.
pub async fn list_graphs() -> Vec<String> {
	let url = format!("{}/get-graphs/", base_url());
	match ehttp::fetch_async(Request::get(&url)).await {
		Ok(response) if response.ok => {
			let graphs = parse_graph_list(&response.bytes);
			debug!("get-graphs: {} graphs", graphs.len());
			graphs
		}
		Ok(response) => {
			warn!("get-graphs returned {} {}", response.status, response.status_text);
			Vec::new()
		}
		Err(err) => {
			warn!("get-graphs failed: {err}");
			Vec::new()
		}
	}
}

/// Fetch one graph by id. `None` on any failure or not-found.
pub async fn get_graph(graph_id: &str) -> Option<RemoteGraph> {
	let url = format!("{}/get-graph/?id={}", base_url(), encode(graph_id));
	match ehttp::fetch_async(Request::get(&url)).await {
		Ok(response) if response.ok => {
			let graph = parse_graph(&response.bytes);
			if let Some(ref g) = graph {
				debug!("get-graph {graph_id}: {} nodes, {} links", g.nodes.len(), g.links.len());
			}
			graph
		}
		Ok(response) => {
			warn!("get-graph {graph_id} returned {} {}", response.status, response.status_text);
			None
		}
		Err(err) => {
			warn!("get-graph {graph_id} failed: {err}");
			None
		}
	}
}

/// Append a node to a graph; the store persists it and echoes the created
/// node record. `None` on any failure.
pub async fn add_node(graph_id: &str, label: &str) -> Option<NodeRecord> {
	let url = format!("{}/add-node/?id={}", base_url(), encode(graph_id));
	let body = format!("node={}", encode(label)).into_bytes();
	let mut request = Request::post(&url, body);
	request.method = "PUT".to_owned();
	request
		.headers
		.insert("Content-Type", "application/x-www-form-urlencoded");

	match ehttp::fetch_async(request).await {
		Ok(response) if response.ok => {
			let created = parse_created_node(&response.bytes);
			if let Some(ref node) = created {
				debug!("add-node {graph_id}: created {}", node.id);
			}
			created
		}
		Ok(response) => {
			warn!("add-node {graph_id} returned {} {}", response.status, response.status_text);
			None
		}
		Err(err) => {
			warn!("add-node {graph_id} failed: {err}");
			None
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use serde_json::json;

	#[test]
	fn graph_list_accepts_numeric_and_string_ids() {
		let body = br#"{"graphs": [1, "karate", 3]}"#;
		assert_eq!(parse_graph_list(body), vec!["1", "karate", "3"]);
	}

	#[test]
	fn graph_list_without_graphs_field_is_empty() {
		assert_eq!(parse_graph_list(br#"{"message": "nothing here"}"#), Vec::<String>::new());
	}

	#[test]
	fn graph_list_malformed_body_is_empty() {
		assert_eq!(parse_graph_list(b"<html>502</html>"), Vec::<String>::new());
	}

	#[test]
	fn graph_envelope_parses_node_link_data() {
		let body = br#"{"graph": {
			"nodes": [{"id": 1}, {"id": "B"}],
			"links": [{"source": 1, "target": "B", "weight": 5}]
		}}"#;
		let graph = parse_graph(body).unwrap();
		let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, vec!["1", "B"]);
		assert_eq!(graph.links[0].source, "1");
		assert_eq!(graph.links[0].target, "B");
		assert_eq!(graph.links[0].weight, Some(json!(5)));
	}

	#[test]
	fn link_weight_may_be_a_string_or_missing() {
		let body = br#"{"graph": {
			"nodes": [{"id": "A"}, {"id": "B"}],
			"links": [
				{"source": "A", "target": "B", "weight": "heavy"},
				{"source": "B", "target": "A"}
			]
		}}"#;
		let graph = parse_graph(body).unwrap();
		assert_eq!(graph.links[0].weight, Some(json!("heavy")));
		assert_eq!(graph.links[1].weight, None);
	}

	#[test]
	fn absent_or_null_graph_is_none() {
		assert_eq!(parse_graph(br#"{"graph": null}"#), None);
		assert_eq!(parse_graph(br#"{"message": "not found"}"#), None);
		assert_eq!(parse_graph(b"not json at all"), None);
	}

	#[test]
	fn graph_with_missing_node_and_link_fields_is_empty_not_an_error() {
		assert_eq!(parse_graph(br#"{"graph": {}}"#), Some(RemoteGraph::default()));
	}

	#[test]
	fn created_node_parses_string_and_numeric_ids() {
		assert_eq!(
			parse_created_node(br#"{"graph": {"id": "D"}}"#),
			Some(NodeRecord { id: "D".to_owned() })
		);
		assert_eq!(
			parse_created_node(br#"{"graph": {"id": 42}}"#),
			Some(NodeRecord { id: "42".to_owned() })
		);
	}

	#[test]
	fn created_node_with_unexpected_shape_is_none() {
		assert_eq!(parse_created_node(br#"{"graph": {"nodes": []}}"#), None);
		assert_eq!(parse_created_node(br#"{}"#), None);
	}
}
