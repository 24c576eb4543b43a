//! Command: print the module tree.

use miette::Result;

use mvnbom_extract::Module;

/// Extract and pretty-print the module tree rooted at the root module.
pub fn exec(path: &str, manifest_only: bool) -> Result<()> {
    let extraction = super::run_extraction(path, manifest_only)?;

    let Some(root) = extraction.root() else {
        println!("No modules.");
        return Ok(());
    };

    let mut output = String::new();
    output.push_str(&format!("{}\n", label(root)));
    let count = root.modules.len();
    for (i, child) in root.modules.values().enumerate() {
        print_subtree(&mut output, child, "", i == count - 1);
    }
    print!("{output}");
    Ok(())
}

fn print_subtree(output: &mut String, module: &Module, prefix: &str, is_last: bool) {
    let connector = if is_last { "└── " } else { "├── " };
    output.push_str(&format!("{prefix}{connector}{}\n", label(module)));

    let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
    let count = module.modules.len();
    for (i, child) in module.modules.values().enumerate() {
        print_subtree(output, child, &child_prefix, i == count - 1);
    }
}

fn label(module: &Module) -> String {
    if module.version.is_empty() {
        module.name.clone()
    } else {
        format!("{}:{}", module.name, module.version)
    }
}
