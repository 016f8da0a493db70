//! Named gallery configurations.

use log::warn;

use super::config::SimulationConfig;

/// A named configuration shown in the gallery.
///
/// `json` lists only the keys that differ from the defaults.
#[derive(Clone, Copy, Debug)]
pub struct Preset {
	/// Stable slug.
	pub id: &'static str,
	pub title: &'static str,
	pub description: &'static str,
	/// Partial camelCase config object.
	pub json: &'static str,
}

impl Preset {
	/// The preset over the defaults. An unparsable preset yields the defaults.
	pub fn config(&self) -> SimulationConfig {
		SimulationConfig::from_json(self.json).unwrap_or_else(|err| {
			warn!("preset {} is invalid ({err}), using defaults", self.id);
			SimulationConfig::default()
		})
	}

	/// Look a preset up by its slug.
	pub fn find(id: &str) -> Option<&'static Preset> {
		PRESETS.iter().find(|preset| preset.id == id)
	}

	/// Copyable component markup: each config key on its own indented line
	/// between `<AnimatedGraphNodes` and `/>`.
	pub fn snippet(&self) -> String {
		let body = self.json.trim();
		let body = body.strip_prefix('{').unwrap_or(body);
		let body = body.strip_suffix('}').unwrap_or(body);
		let mut snippet = String::from("<AnimatedGraphNodes\n");
		for line in body.lines().map(str::trim).filter(|line| !line.is_empty()) {
			snippet.push_str("  ");
			snippet.push_str(line);
			snippet.push('\n');
		}
		snippet.push_str("/>");
		snippet
	}
}

/// Every gallery preset, in display order.
pub static PRESETS: &[Preset] = &[
	Preset {
		id: "micro-network",
		title: "High-Density Micro Nodes",
		description: "Large number of tiny nodes with minimal opacity connections",
		json: r#"{
  "numNodes": 65,
  "nodeColor": "rgb(148, 163, 184)",
  "lineColor": "rgb(148, 163, 184)",
  "nodeOpacity": 0.3,
  "lineOpacity": 0.15,
  "minNodeSize": 0.003,
  "maxNodeSize": 0.005,
  "connectionDistance": 0.4,
  "animationSpeed": 0.02,
  "velocityFactor": 0.025,
  "lineWidth": 0.001
}"#,
	},
	Preset {
		id: "elastic-cluster",
		title: "Elastic Push Response",
		description: "Strong elastic deformation with smooth damping",
		json: r#"{
  "numNodes": 8,
  "nodeColor": "rgb(236, 72, 153)",
  "lineColor": "rgb(236, 72, 153)",
  "nodeOpacity": 1,
  "lineOpacity": 0.8,
  "minNodeSize": 0.02,
  "maxNodeSize": 0.025,
  "connectionDistance": 0.6,
  "animationSpeed": 0.004,
  "velocityFactor": 0.002,
  "lineWidth": 0.006,
  "hoverEffect": "push",
  "pushRadius": 0.5,
  "pushStrength": 0.9,
  "pushElasticity": 0.15,
  "pushDampening": 0.95
}"#,
	},
	Preset {
		id: "repulsion-field",
		title: "Strong Node Repulsion",
		description: "Enhanced repulsion forces with rapid movement",
		json: r#"{
  "numNodes": 32,
  "nodeColor": "rgb(14, 165, 233)",
  "lineColor": "rgb(14, 165, 233)",
  "nodeOpacity": 0.7,
  "lineOpacity": 0.4,
  "minNodeSize": 0.008,
  "maxNodeSize": 0.012,
  "connectionDistance": 0.15,
  "animationSpeed": 0.016,
  "velocityFactor": 0.03,
  "repulsionField": 0.4,
  "lineWidth": 0.002
}"#,
	},
	Preset {
		id: "uniform-grid",
		title: "Uniform Node Distribution",
		description: "Evenly sized nodes with consistent spacing",
		json: r#"{
  "numNodes": 16,
  "nodeColor": "rgb(168, 85, 247)",
  "lineColor": "rgb(168, 85, 247)",
  "nodeOpacity": 0.9,
  "lineOpacity": 0.7,
  "minNodeSize": 0.015,
  "maxNodeSize": 0.015,
  "connectionDistance": 0.3,
  "animationSpeed": 0.008,
  "velocityFactor": 0.005,
  "lineWidth": 0.004,
  "repulsionField": 0.1
}"#,
	},
	Preset {
		id: "radial-expansion",
		title: "Radial Velocity Field",
		description: "Outward radial movement with variable node sizes",
		json: r#"{
  "numNodes": 45,
  "nodeColor": "rgb(250, 204, 21)",
  "lineColor": "rgb(250, 204, 21)",
  "nodeOpacity": 0.8,
  "lineOpacity": 0.2,
  "minNodeSize": 0.004,
  "maxNodeSize": 0.018,
  "connectionDistance": 0.25,
  "animationSpeed": 0.025,
  "velocityFactor": 0.04,
  "lineWidth": 0.001,
  "repulsionField": 0.3
}"#,
	},
	Preset {
		id: "proximity-highlight",
		title: "Proximity Highlighting",
		description: "Distance-based opacity and width variation",
		json: r#"{
  "numNodes": 24,
  "nodeColor": "rgb(34, 197, 94)",
  "lineColor": "rgb(34, 197, 94)",
  "nodeOpacity": 0.6,
  "lineOpacity": 0.5,
  "minNodeSize": 0.01,
  "maxNodeSize": 0.01,
  "connectionDistance": 0.35,
  "animationSpeed": 0.012,
  "velocityFactor": 0.008,
  "lineWidth": 0.003,
  "hoverEffect": "highlight",
  "hoverLineOpacity": 1,
  "hoverLineWidth": 0.006,
  "hoverNodeOpacity": 1
}"#,
	},
	Preset {
		id: "dense-field",
		title: "High-Density Field",
		description: "Maximum node count with minimal movement",
		json: r#"{
  "numNodes": 100,
  "nodeColor": "rgb(244, 114, 182)",
  "lineColor": "rgb(244, 114, 182)",
  "nodeOpacity": 0.4,
  "lineOpacity": 0.2,
  "minNodeSize": 0.002,
  "maxNodeSize": 0.006,
  "connectionDistance": 0.2,
  "animationSpeed": 0.003,
  "velocityFactor": 0.001,
  "lineWidth": 0.001,
  "repulsionField": 0.05
}"#,
	},
	Preset {
		id: "elastic-wave",
		title: "Elastic Wave Propagation",
		description: "Long-range elastic deformation waves",
		json: r#"{
  "numNodes": 18,
  "nodeColor": "rgb(45, 212, 191)",
  "lineColor": "rgb(45, 212, 191)",
  "nodeOpacity": 0.8,
  "lineOpacity": 0.6,
  "minNodeSize": 0.012,
  "maxNodeSize": 0.016,
  "connectionDistance": 0.4,
  "animationSpeed": 0.01,
  "velocityFactor": 0.015,
  "lineWidth": 0.003,
  "hoverEffect": "push",
  "pushRadius": 0.6,
  "pushStrength": 0.8,
  "pushElasticity": 0.12,
  "pushDampening": 0.85
}"#,
	},
	Preset {
		id: "intense-interaction",
		title: "High-Intensity Interactions",
		description: "Maximum opacity and connection strength",
		json: r#"{
  "numNodes": 12,
  "nodeColor": "rgb(239, 68, 68)",
  "lineColor": "rgb(239, 68, 68)",
  "nodeOpacity": 1,
  "lineOpacity": 0.9,
  "minNodeSize": 0.018,
  "maxNodeSize": 0.022,
  "connectionDistance": 0.5,
  "animationSpeed": 0.018,
  "velocityFactor": 0.02,
  "lineWidth": 0.005,
  "repulsionField": 0.25,
  "hoverEffect": "highlight",
  "hoverLineOpacity": 1,
  "hoverLineWidth": 0.008,
  "hoverNodeOpacity": 1
}"#,
	},
	Preset {
		id: "still-life",
		title: "Static Constellation",
		description: "Animation disabled, drawn once and redrawn on resize",
		json: r#"{
  "enableAnimations": false,
  "numNodes": 20,
  "nodeColor": "rgb(100, 116, 139)",
  "lineColor": "rgb(100, 116, 139)",
  "connectionDistance": 0.35,
  "hoverEffect": "none"
}"#,
	},
];
