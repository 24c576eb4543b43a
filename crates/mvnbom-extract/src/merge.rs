//! Attaching adjacency edges onto the module set to form the final
//! ownership tree.

use std::collections::HashMap;

use crate::module::Module;
use crate::tree::AdjacencyMap;

/// For every adjacency source with a known module, attach a value copy of
/// each known target module under the source's children, keyed by target
/// name.
///
/// The module list is indexed by name with the first occurrence winning.
/// Unknown sources and targets are skipped silently: the graph dump may
/// reference build-tool-internal pseudo-packages that never produced a
/// module.
pub fn merge_graph(modules: &mut [Module], adjacency: &AdjacencyMap) {
    let mut index: HashMap<String, usize> = HashMap::new();
    for (i, module) in modules.iter().enumerate() {
        index.entry(module.name.clone()).or_insert(i);
    }

    for (source, targets) in adjacency {
        let Some(&source_idx) = index.get(source) else {
            tracing::debug!("graph source '{source}' has no module, skipping");
            continue;
        };
        for target in targets {
            if target.is_empty() {
                continue;
            }
            let Some(&target_idx) = index.get(target) else {
                tracing::debug!("graph target '{target}' has no module, skipping");
                continue;
            };
            let copy = modules[target_idx].clone();
            modules[source_idx].modules.insert(copy.name.clone(), copy);
        }
    }
}
