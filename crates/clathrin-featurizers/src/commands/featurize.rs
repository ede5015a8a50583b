use anyhow::{anyhow, Context, Result};
use candle_core::Device;
use clathrin_core::{AtomFrame, GraphFeatures};
use clathrin_hull::QuickHull;
use log::info;
use std::collections::HashMap;
use std::path::Path;

pub fn execute(input: &str, output: &str) -> Result<()> {
    let (pdb_data, _errors) =
        pdbtbx::open(input).map_err(|e| anyhow!("failed to parse '{}': {:?}", input, e))?;
    let id = Path::new(input)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("protein")
        .to_string();

    let frame = AtomFrame::from(&pdb_data);
    let device = Device::Cpu;
    let graph = frame.to_graph(&id, &device, &QuickHull::default())?;
    info!(
        "featurized '{}': {} atoms, {} residues",
        graph.id,
        frame.size(),
        graph.num_residues()
    );

    let tensors = HashMap::from([
        ("res_types".to_string(), graph.res_types),
        ("coords_ca".to_string(), graph.coords_ca),
        ("coords_n".to_string(), graph.coords_n),
        ("coords_c".to_string(), graph.coords_c),
        ("side_chain_embs".to_string(), graph.side_chain_embs),
        ("bb_embs".to_string(), graph.bb_embs),
        ("hull_edge_index".to_string(), graph.hull_edge_index),
        ("hull_pos".to_string(), graph.hull_pos),
        ("hull_radius".to_string(), graph.hull_radius),
    ]);
    candle_core::safetensors::save(&tensors, output)
        .with_context(|| format!("writing graph record to '{}'", output))?;
    Ok(())
}
